use quote_core::{
    quote::Quote,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

const OPEN_MARK_HEIGHT: u16 = 1;
const GAP_HEIGHT: u16 = 1;
const AUTHOR_HEIGHT: u16 = 1;

pub fn render_quote_card(frame: &mut Frame, area: Rect, theme: &Theme, quote: &Quote) {
    let card_block = Block::new()
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .padding(Padding::horizontal(2))
        .style(theme.ratatui_style(Element::Text));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let text_line = Line::from(Span::styled(
        quote.text.as_str(),
        theme.text_style().add_modifier(Modifier::BOLD),
    ));
    let text_height = wrapped_height(text_line.width(), inner_area.width);
    let content_height = OPEN_MARK_HEIGHT + text_height + GAP_HEIGHT + AUTHOR_HEIGHT;
    let top_padding = inner_area.height.saturating_sub(content_height) / 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_padding),
            Constraint::Length(OPEN_MARK_HEIGHT),
            Constraint::Length(text_height),
            Constraint::Length(GAP_HEIGHT),
            Constraint::Length(AUTHOR_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner_area);

    frame.render_widget(
        Paragraph::new("“").style(theme.ratatui_style(Element::Border)),
        chunks[1],
    );

    let text_paragraph = Paragraph::new(text_line)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(text_paragraph, chunks[2]);

    let author_paragraph = Paragraph::new(Line::from(vec![
        Span::styled("—— ", theme.ratatui_style(Element::Border)),
        Span::styled(quote.author.as_str(), theme.muted_style()),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(author_paragraph, chunks[4]);
}

/// Rows needed to show `text_width` columns inside `area_width`.
fn wrapped_height(text_width: usize, area_width: u16) -> u16 {
    if area_width == 0 {
        return 1;
    }
    let rows = text_width.div_ceil(area_width as usize).max(1);
    u16::try_from(rows).unwrap_or(u16::MAX)
}
