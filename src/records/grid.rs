use super::{Column, Record};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn icon(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// Client-side view over the fetched rows: page size, current page, sort, and
/// the column cursor. Never mutates or re-orders the underlying row set.
#[derive(Clone, Debug)]
pub struct GridView {
    page_sizes: Vec<usize>,
    page_size_index: usize,
    page: usize,
    sort: Option<SortState>,
    cursor: Column,
}

impl GridView {
    /// `page_sizes` must be non-empty; config validation guarantees it.
    pub fn new(page_sizes: Vec<usize>, default_page_size: usize) -> Self {
        let page_size_index = page_sizes
            .iter()
            .position(|size| *size == default_page_size)
            .unwrap_or(0);
        Self {
            page_sizes,
            page_size_index,
            page: 0,
            sort: None,
            cursor: Column::Id,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_sizes
            .get(self.page_size_index)
            .copied()
            .unwrap_or(1)
            .max(1)
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn cursor(&self) -> Column {
        self.cursor
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size()).max(1)
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn first_page(&mut self) {
        self.page = 0;
    }

    pub fn last_page(&mut self, total: usize) {
        self.page = self.page_count(total) - 1;
    }

    /// Move to the next page size option and return to the first page.
    pub fn cycle_page_size(&mut self) {
        if !self.page_sizes.is_empty() {
            self.page_size_index = (self.page_size_index + 1) % self.page_sizes.len();
        }
        self.page = 0;
    }

    pub fn cursor_right(&mut self) {
        let idx = (self.cursor.index() + 1) % Column::ALL.len();
        self.cursor = Column::ALL[idx];
    }

    pub fn cursor_left(&mut self) {
        let idx = (self.cursor.index() + Column::ALL.len() - 1) % Column::ALL.len();
        self.cursor = Column::ALL[idx];
    }

    /// Sort by the cursor column: ascending first, then flip on repeat.
    pub fn toggle_sort(&mut self) {
        let column = self.cursor;
        self.sort = Some(match self.sort {
            Some(state) if state.column == column => SortState {
                column,
                direction: match state.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => SortState {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// A new row set starts on the first page; the sort choice is kept.
    pub fn reset_for_new_rows(&mut self) {
        self.page = 0;
    }

    /// Rows in display order, ignoring pagination.
    pub fn sorted<'a>(&self, rows: &'a [Record]) -> Vec<&'a Record> {
        let mut ordered: Vec<&Record> = rows.iter().collect();
        if let Some(state) = self.sort {
            ordered.sort_by(|a, b| {
                let ord = state.column.value(a).cmp(state.column.value(b));
                match state.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        ordered
    }

    /// Rows on the current page, clamped if the page ran past the end.
    pub fn visible<'a>(&self, rows: &'a [Record]) -> Vec<&'a Record> {
        let page = self.page.min(self.page_count(rows.len()) - 1);
        self.sorted(rows)
            .into_iter()
            .skip(page * self.page_size())
            .take(self.page_size())
            .collect()
    }

    /// 1-based inclusive bounds of the current page, `(0, 0)` when empty.
    pub fn visible_range(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let page = self.page.min(self.page_count(total) - 1);
        let start = page * self.page_size();
        (start + 1, (start + self.page_size()).min(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Devices;

    fn rows(ids: &[&str]) -> Vec<Record> {
        ids.iter()
            .map(|id| Record {
                id: (*id).into(),
                origination_time: format!("2024-01-0{id}"),
                cluster_id: "c".into(),
                user_id: format!("user-{id}"),
                devices: Devices::default(),
            })
            .collect()
    }

    fn ids<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn paginates_with_default_size() {
        let data = rows(&["1", "2", "3", "4", "5", "6", "7"]);
        let mut view = GridView::new(vec![5, 10, 20], 5);

        assert_eq!(view.page_count(data.len()), 2);
        assert_eq!(ids(&view.visible(&data)), ["1", "2", "3", "4", "5"]);

        view.next_page(data.len());
        assert_eq!(ids(&view.visible(&data)), ["6", "7"]);
        assert_eq!(view.visible_range(data.len()), (6, 7));

        view.next_page(data.len());
        assert_eq!(view.page(), 1);

        view.prev_page();
        view.prev_page();
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn cycling_page_size_returns_to_first_page() {
        let data = rows(&["1", "2", "3", "4", "5", "6", "7"]);
        let mut view = GridView::new(vec![5, 10, 20], 5);
        view.next_page(data.len());

        view.cycle_page_size();
        assert_eq!(view.page_size(), 10);
        assert_eq!(view.page(), 0);
        assert_eq!(view.visible(&data).len(), 7);

        view.cycle_page_size();
        view.cycle_page_size();
        assert_eq!(view.page_size(), 5);
    }

    #[test]
    fn unknown_default_page_size_falls_back_to_first_option() {
        let view = GridView::new(vec![5, 10, 20], 7);
        assert_eq!(view.page_size(), 5);
    }

    #[test]
    fn sorts_ascending_then_descending_without_touching_rows() {
        let data = rows(&["2", "3", "1"]);
        let mut view = GridView::new(vec![5], 5);

        assert_eq!(ids(&view.visible(&data)), ["2", "3", "1"]);

        view.toggle_sort();
        assert_eq!(ids(&view.visible(&data)), ["1", "2", "3"]);

        view.toggle_sort();
        assert_eq!(ids(&view.visible(&data)), ["3", "2", "1"]);
        assert_eq!(data[0].id, "2");
    }

    #[test]
    fn switching_sort_column_starts_ascending() {
        let data = rows(&["2", "3", "1"]);
        let mut view = GridView::new(vec![5], 5);
        view.toggle_sort();
        view.toggle_sort();

        view.cursor_right();
        view.toggle_sort();
        let sort = view.sort().unwrap();
        assert_eq!(sort.column, Column::OriginationTime);
        assert_eq!(sort.direction, SortDirection::Ascending);
        assert_eq!(ids(&view.visible(&data)), ["1", "2", "3"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let data = rows(&["b", "a", "c"]);
        let mut view = GridView::new(vec![5], 5);
        view.cursor_right();
        view.cursor_right();
        view.toggle_sort();
        assert_eq!(view.sort().unwrap().column, Column::ClusterId);
        assert_eq!(ids(&view.visible(&data)), ["b", "a", "c"]);
    }

    #[test]
    fn cursor_wraps_around_columns() {
        let mut view = GridView::new(vec![5], 5);
        view.cursor_left();
        assert_eq!(view.cursor(), Column::Voicemail);
        view.cursor_right();
        assert_eq!(view.cursor(), Column::Id);
    }

    #[test]
    fn clamps_stale_page_after_rows_shrink() {
        let many = rows(&["1", "2", "3", "4", "5", "6"]);
        let few = rows(&["9"]);
        let mut view = GridView::new(vec![5], 5);
        view.last_page(many.len());
        assert_eq!(view.page(), 1);

        assert_eq!(ids(&view.visible(&few)), ["9"]);
        assert_eq!(view.visible_range(few.len()), (1, 1));
        assert_eq!(view.visible_range(0), (0, 0));

        view.reset_for_new_rows();
        assert_eq!(view.page(), 0);
    }
}
