use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, InputMode};
use crate::view::spinner_char;

/// Single-line link entry box.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Editing;

    let border_style = if editing {
        Style::default().fg(theme.active)
    } else {
        theme.border_style()
    };

    // Keep the cursor in view: show the tail of the text if it overflows.
    let inner_width = area.width.saturating_sub(3) as usize;
    let visible: String = if app.session.link.chars().count() > inner_width {
        let skip = app.session.link.chars().count() - inner_width;
        app.session.link.chars().skip(skip).collect()
    } else {
        app.session.link.clone()
    };

    let cursor = if editing { "\u{2588}" } else { "" };
    let line = Line::from(vec![
        Span::styled(visible, Style::default().fg(theme.text)),
        Span::styled(cursor, Style::default().fg(theme.active)),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Paste Video Link "),
    );
    f.render_widget(input, area);
}

/// Submit control line. The label toggles with the loading flag and the
/// styling goes inert while a request is in flight.
pub fn render_submit(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = if app.session.loading {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_char(app.tick)),
                Style::default().fg(theme.spinner),
            ),
            Span::styled(app.submit_label(), Style::default().fg(theme.dim)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                " [Enter] ",
                Style::default()
                    .fg(theme.header_fg)
                    .bg(theme.active)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", app.submit_label()),
                Style::default().fg(theme.text),
            ),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}
