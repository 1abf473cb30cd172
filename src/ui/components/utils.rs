use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rectangle of fixed `height` rows and `percent_x` width, centred in `r`.
pub fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let vertical = split_vertical(
        r,
        &[
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ],
    );
    let horizontal = split_horizontal(
        vertical[1],
        &[
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ],
    );
    horizontal[1]
}

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}

pub fn split_horizontal(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.to_vec())
        .split(area)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_fixed_height_box() {
        let area = Rect::new(0, 0, 100, 20);
        let inner = centered_rect(50, 6, area);
        assert_eq!(inner.height, 6);
        assert_eq!(inner.y, 7);
        assert_eq!(inner.width, 50);
    }

    #[test]
    fn clamps_height_to_available_space() {
        let area = Rect::new(0, 0, 40, 4);
        assert_eq!(centered_rect(50, 10, area).height, 4);
    }
}
