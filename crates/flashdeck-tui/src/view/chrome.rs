use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};

/// Top header bar: app badge plus card count.
pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(" FLASHDECK ", theme.header_style()),
        Span::styled(
            " Video Link to Flashcards",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if !app.session.concepts.is_empty() {
        spans.push(Span::styled(
            format!("  {} cards", app.session.concepts.len()),
            Style::default().fg(theme.dim),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Bottom footer: keybindings for the current input mode.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = match app.input_mode {
        InputMode::Editing => " Enter:generate  Esc:browse cards  ?:help  Ctrl+c:quit",
        InputMode::Normal => {
            " j/k:select  d:discard  Enter:generate  e:edit link  ?:help  q:quit"
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.footer_style()))),
        area,
    );
}
