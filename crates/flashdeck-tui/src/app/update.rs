use super::{App, InputMode};
use crate::action::Action;
use crate::tui_event::BackendCommand;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Quit confirmation modal — q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::Cancel => {
                    self.confirm_quit = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        // Help overlay intercepts everything except quit
        if self.show_help {
            match action {
                Action::Quit => {
                    self.confirm_quit = true;
                }
                Action::ToggleHelp | Action::Cancel => {
                    self.show_help = false;
                }
                Action::Tick => {
                    self.tick = self.tick.wrapping_add(1);
                }
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(..) => {}
            Action::ToggleHelp => {
                self.show_help = true;
            }

            // ── Link editing ────────────────────────────────────────
            Action::StartEditing => {
                self.input_mode = InputMode::Editing;
            }
            Action::Cancel => {
                self.input_mode = InputMode::Normal;
            }
            Action::InputChar(ch) => {
                if self.input_mode == InputMode::Editing {
                    self.session.insert_char(ch);
                }
            }
            Action::Backspace => {
                if self.input_mode == InputMode::Editing {
                    self.session.backspace();
                }
            }
            Action::CursorLeft => self.session.cursor_left(),
            Action::CursorRight => self.session.cursor_right(),
            Action::CursorHome => self.session.cursor_home(),
            Action::CursorEnd => self.session.cursor_end(),

            // ── Submission ──────────────────────────────────────────
            Action::Submit => {
                self.submit_link();
            }

            // ── Card list ───────────────────────────────────────────
            Action::MoveDown => {
                if !self.session.concepts.is_empty() {
                    self.session.selected =
                        (self.session.selected + 1).min(self.session.concepts.len() - 1);
                }
            }
            Action::MoveUp => {
                self.session.selected = self.session.selected.saturating_sub(1);
            }
            Action::GoTop => {
                self.session.selected = 0;
            }
            Action::GoBottom => {
                self.session.selected = self.session.concepts.len().saturating_sub(1);
            }
            Action::Discard => {
                self.session.discard(self.session.selected);
            }

            Action::None => {}
        }

        false
    }

    /// Submit the current link to the backend.
    ///
    /// Inert while a request is in flight: the loading flag is the sole gate
    /// against a second concurrent request, so it must be checked before
    /// anything is sent.
    fn submit_link(&mut self) {
        if self.session.loading {
            return;
        }
        let Some(tx) = &self.backend_cmd_tx else {
            tracing::error!("no backend channel; submit dropped");
            return;
        };

        // No validation: empty or nonsense text goes out as-is and the
        // service decides what to make of it.
        self.session.loading = true;
        let cmd = BackendCommand::Analyze {
            link: self.session.link.clone(),
        };
        if tx.send(cmd).is_err() {
            tracing::error!("backend task gone; submit dropped");
            self.session.loading = false;
        }
    }
}
