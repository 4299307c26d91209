use flashdeck_core::Concept;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, InputMode};
use crate::theme::Theme;
use crate::view::truncate;

/// Rows per card: borders plus two definition lines.
const CARD_HEIGHT: u16 = 4;

/// Render the flashcard container: one card per concept, in list order.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let container = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Flashcards ");
    let inner = container.inner(area);
    f.render_widget(container, area);

    if app.session.concepts.is_empty() {
        let hint = if app.session.loading {
            "Waiting for the analyzer..."
        } else {
            "No flashcards. Paste a video link above and press Enter."
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.dim),
            ))),
            inner,
        );
        return;
    }

    let visible = (inner.height / CARD_HEIGHT).max(1) as usize;

    // Keep the selected card inside the window.
    if app.session.selected < app.scroll_offset {
        app.scroll_offset = app.session.selected;
    } else if app.session.selected >= app.scroll_offset + visible {
        app.scroll_offset = app.session.selected + 1 - visible;
    }
    app.scroll_offset = app
        .scroll_offset
        .min(app.session.concepts.len().saturating_sub(1));

    let selecting = app.input_mode == InputMode::Normal;
    for (row, index) in (app.scroll_offset..app.session.concepts.len())
        .take(visible)
        .enumerate()
    {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + (row as u16) * CARD_HEIGHT,
            width: inner.width,
            height: CARD_HEIGHT.min(inner.height.saturating_sub((row as u16) * CARD_HEIGHT)),
        };
        let selected = selecting && index == app.session.selected;
        render_card(f, card_area, &app.theme, &app.session.concepts[index], selected);
    }
}

/// Render one flashcard. Stateless: term and definition are drawn as-is
/// (empty strings render empty), and the discard affordance is shown on the
/// selected card only.
fn render_card(f: &mut Frame, area: Rect, theme: &Theme, concept: &Concept, selected: bool) {
    let border_style = if selected {
        Style::default().fg(theme.active)
    } else {
        theme.border_style()
    };

    let title_width = area.width.saturating_sub(16) as usize;
    let mut title = format!(" {} ", truncate(&concept.term, title_width));
    if selected {
        title.push_str("[d] discard ");
    }

    let body_style = if selected {
        theme.highlight_style().fg(theme.definition)
    } else {
        Style::default().fg(theme.definition)
    };

    let card = Paragraph::new(Line::from(Span::styled(
        concept.definition.clone(),
        body_style,
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                Style::default().fg(theme.term).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}
