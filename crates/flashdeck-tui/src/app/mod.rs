mod backend;
mod update;

use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use crate::model::session::SessionState;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and discard cards.
    Normal,
    /// Keys edit the link text.
    Editing,
}

/// Main application state.
pub struct App {
    pub session: SessionState,
    pub input_mode: InputMode,
    pub theme: Theme,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    /// Scroll offset into the card list (first visible card).
    pub scroll_offset: usize,
    /// Channel to send commands to the backend task.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            session: SessionState::new(),
            input_mode: InputMode::Editing,
            theme,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            scroll_offset: 0,
            backend_cmd_tx: None,
        }
    }

    /// Input mode used for event mapping. Modal overlays take Normal-mode
    /// keys even while the link editor has focus.
    pub fn effective_input_mode(&self) -> InputMode {
        if self.confirm_quit || self.show_help {
            InputMode::Normal
        } else {
            self.input_mode.clone()
        }
    }

    /// Label of the submit control; toggles with the loading flag.
    pub fn submit_label(&self) -> &'static str {
        if self.session.loading {
            "Analyzing video..."
        } else {
            "Generate Flashcards"
        }
    }

    // update() is in update.rs; handle_backend_event() is in backend.rs

    /// Render the whole screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Length(3), // link input
            Constraint::Length(1), // submit control
            Constraint::Min(3),    // cards
            Constraint::Length(1), // footer
        ])
        .split(f.area());

        crate::view::chrome::render_header(f, chunks[0], self);
        crate::view::link::render(f, chunks[1], self);
        crate::view::link::render_submit(f, chunks[2], self);
        crate::view::cards::render(f, chunks[3], self);
        crate::view::chrome::render_footer(f, chunks[4], self);

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
