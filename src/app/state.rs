use log::{error, info, warn};

use crate::config::Config;
use crate::fetch::{FetchResult, RecordQuery};
use crate::form::{validate, FormField, FormState, ValidationError};
use crate::records::{GridView, Record};

/// Text of the blocking alert shown when a required field is empty.
pub const VALIDATION_ALERT: &str = "Please fill all required fields";

/// Where keyboard input currently goes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Field(FormField),
    Submit,
    Table,
    Export,
}

/// Coarse lifecycle of the form, derived from the request bookkeeping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Idle,
    Loading,
    Loaded,
    /// Last request failed; whatever was loaded before is still shown.
    FetchFailed,
}

/// A validated submission waiting to be sent.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub generation: u64,
    pub query: RecordQuery,
}

/// Outcome of one spawned fetch, tagged with the submission it belongs to.
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub result: FetchResult<Vec<Record>>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CompletionOutcome {
    Applied(usize),
    Superseded,
    Failed,
}

/// Everything the form owns. All mutation goes through these methods and the
/// controller redraws after each one.
pub struct AppState {
    pub form: FormState,
    focus: Focus,
    rows: Vec<Record>,
    grid: GridView,
    in_flight: usize,
    next_generation: u64,
    applied_generation: u64,
    last_fetch_failed: bool,
    alert: Option<String>,
    status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormState::default(),
            focus: Focus::Field(FormField::StartDate),
            rows: Vec::new(),
            grid: GridView::new(config.page_sizes.clone(), config.default_page_size),
            in_flight: 0,
            next_generation: 0,
            applied_generation: 0,
            last_fetch_failed: false,
            alert: None,
            status_message: None,
        }
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn grid(&self) -> &GridView {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridView {
        &mut self.grid
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn can_export(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn status(&self) -> Status {
        if self.is_loading() {
            Status::Loading
        } else if self.last_fetch_failed {
            Status::FetchFailed
        } else if self.rows.is_empty() {
            Status::Idle
        } else {
            Status::Loaded
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Focus targets in tab order. Table and export only exist once rows do.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = FormField::ALL.iter().copied().map(Focus::Field).collect();
        order.push(Focus::Submit);
        if self.can_export() {
            order.push(Focus::Table);
            order.push(Focus::Export);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus_order().contains(&focus) {
            self.focus = focus;
        }
    }

    /// Gate a submission. Invalid input raises the alert and changes nothing
    /// else; valid input marks the form as loading and hands out a generation.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, ValidationError> {
        let validated = match validate(&self.form) {
            Ok(validated) => validated,
            Err(err) => {
                warn!("Submission rejected: {err}");
                self.alert = Some(VALIDATION_ALERT.to_string());
                return Err(err);
            }
        };

        self.next_generation += 1;
        self.in_flight += 1;
        let query = RecordQuery::from(validated);
        info!(
            "Submitting request #{} ({} to {}, {}={})",
            self.next_generation, query.start_date, query.end_date, query.parameter, query.value
        );

        Ok(PendingRequest {
            generation: self.next_generation,
            query,
        })
    }

    /// Settle one request. Rows are replaced only by a success that is newer
    /// than the last applied one; failures leave them untouched.
    pub fn complete(&mut self, completion: Completion) -> CompletionOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        match completion.result {
            Ok(rows) if completion.generation > self.applied_generation => {
                let count = rows.len();
                self.rows = rows;
                self.applied_generation = completion.generation;
                self.last_fetch_failed = false;
                self.grid.reset_for_new_rows();
                if !self.focus_order().contains(&self.focus) {
                    self.focus = Focus::Submit;
                }
                info!(
                    "Request #{} loaded {} records",
                    completion.generation, count
                );
                CompletionOutcome::Applied(count)
            }
            Ok(_) => {
                warn!(
                    "Discarding response for request #{}: request #{} already applied",
                    completion.generation, self.applied_generation
                );
                CompletionOutcome::Superseded
            }
            Err(err) if completion.generation > self.applied_generation => {
                error!(
                    "Error fetching data for request #{}: {}",
                    completion.generation, err
                );
                self.last_fetch_failed = true;
                CompletionOutcome::Failed
            }
            Err(err) => {
                warn!(
                    "Ignoring failure of request #{}: request #{} already applied ({})",
                    completion.generation, self.applied_generation, err
                );
                CompletionOutcome::Superseded
            }
        }
    }
}
