use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::app::state::{AppState, Completion, Focus};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::RecordSource;
use crate::form::FormField;
use crate::records::export_to_file;
use crate::ui::{render_app, TerminalGuard};
use crate::utils::current_human_timestamp;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Side effects a key press asks the controller to perform.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Submit,
    Export,
    Quit,
}

/// Owns the form state and drives the TUI: key handling, spawning fetches,
/// applying their completions, redrawing.
pub struct AppController {
    config: Config,
    source: Arc<dyn RecordSource>,
    state: AppState,
    completions_tx: UnboundedSender<Completion>,
    completions_rx: UnboundedReceiver<Completion>,
    tick: usize,
}

impl AppController {
    pub fn new(config: Config, source: Arc<dyn RecordSource>) -> Self {
        let state = AppState::new(&config);
        let (completions_tx, completions_rx) = unbounded_channel();
        Self {
            config,
            source,
            state,
            completions_tx,
            completions_rx,
            tick: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub async fn run(mut self) -> Result<()> {
        let mut guard = TerminalGuard::new()?;
        info!("Records form started (endpoint {})", self.config.endpoint);

        loop {
            self.drain_completions();

            let tick = self.tick;
            guard
                .terminal_mut()
                .draw(|f| render_app(f, &self.state, tick))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match self.handle_key(key) {
                        Some(Command::Quit) => break,
                        Some(command) => self.execute(command),
                        None => {}
                    }
                }
            }

            self.tick = self.tick.wrapping_add(1);
            tokio::task::yield_now().await;
        }

        guard.restore()?;
        info!("Records form closed");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Submit => self.dispatch_submit(),
            Command::Export => self.export_rows(),
            Command::Quit => {}
        }
    }

    /// Validate and, if the form is complete, spawn the fetch. Nothing is
    /// sent when validation fails.
    pub fn dispatch_submit(&mut self) {
        let Ok(pending) = self.state.begin_submit() else {
            return;
        };

        let generation = pending.generation;
        let request = self.source.fetch_records(pending.query);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = request.await;
            let _ = tx.send(Completion { generation, result });
        });
    }

    /// Apply every completion that has arrived since the last frame.
    pub fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.state.complete(completion);
        }
    }

    /// Wait for the next completion and apply it.
    #[cfg(test)]
    pub async fn settle_next(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(completion) => {
                self.state.complete(completion);
                true
            }
            None => false,
        }
    }

    pub fn export_rows(&mut self) {
        if !self.state.can_export() {
            return;
        }

        let path = self.config.export_path.clone();
        match export_to_file(self.state.rows(), self.config.quoting, &path) {
            Ok(()) => self.state.set_status_message(format!(
                "Saved {} rows to {} at {}",
                self.state.rows().len(),
                path.display(),
                current_human_timestamp()
            )),
            Err(err) => {
                log::error!("CSV export failed: {err}");
                self.state
                    .set_status_message(format!("Export failed: {err}"));
            }
        }
    }

    /// Map a key press onto state edits, returning a command when the key
    /// asks for a side effect.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let state = &mut self.state;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        if state.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                state.dismiss_alert();
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(Command::Quit),
            KeyCode::Tab | KeyCode::Down => {
                state.focus_next();
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus_prev();
                return None;
            }
            _ => {}
        }

        match state.focus() {
            Focus::Field(FormField::Parameter) => match key.code {
                KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => {
                    state.form.cycle_parameter_forward()
                }
                KeyCode::Left | KeyCode::Char('h') => state.form.cycle_parameter_backward(),
                KeyCode::Enter => return Some(Command::Submit),
                _ => {}
            },
            Focus::Field(field) => match key.code {
                KeyCode::Enter => return Some(Command::Submit),
                KeyCode::Backspace => {
                    if let Some(text) = state.form.text_mut(field) {
                        text.pop();
                    }
                }
                KeyCode::Char(ch)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    if let Some(text) = state.form.text_mut(field) {
                        text.push(ch);
                    }
                }
                _ => {}
            },
            Focus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return Some(Command::Submit);
                }
            }
            Focus::Export => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    return Some(Command::Export);
                }
            }
            Focus::Table => {
                let total = state.rows().len();
                let grid = state.grid_mut();
                match key.code {
                    KeyCode::Left | KeyCode::Char('h') => grid.cursor_left(),
                    KeyCode::Right | KeyCode::Char('l') => grid.cursor_right(),
                    KeyCode::Char('s') | KeyCode::Enter => grid.toggle_sort(),
                    KeyCode::PageDown | KeyCode::Char('n') => grid.next_page(total),
                    KeyCode::PageUp | KeyCode::Char('p') => grid.prev_page(),
                    KeyCode::Home => grid.first_page(),
                    KeyCode::End => grid.last_page(total),
                    KeyCode::Char('z') => grid.cycle_page_size(),
                    KeyCode::Char('e') => return Some(Command::Export),
                    _ => {}
                }
            }
        }

        None
    }
}
