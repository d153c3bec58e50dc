use quote_core::{
    state::Overlay,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme, overlay: Overlay) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .style(theme.ratatui_style(Element::Text));

    let inner_area = footer_block.inner(area);

    let content = match overlay {
        Overlay::List => Line::from(Span::styled(
            "[↑↓] Navigate | [←→] Page | [ENTER] Show | [ESC] Close",
            theme.muted_style(),
        )),
        Overlay::Help => Line::from(Span::styled("[ESC/H/?] Close", theme.muted_style())),
        Overlay::None => Line::from(vec![
            Span::raw("[N]"),
            Span::styled("ext", theme.muted_style()),
            Span::raw(" | "),
            Span::styled("[A]", theme.accent_style()),
            Span::styled("I", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[L]"),
            Span::styled("ist", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[T]"),
            Span::styled("heme", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[H]"),
            Span::styled("elp", theme.muted_style()),
            Span::raw(" | "),
            Span::raw("[Q]"),
            Span::styled("uit", theme.muted_style()),
        ]),
    }
    .alignment(Alignment::Center);

    let footer_paragraph = Paragraph::new(content).style(theme.ratatui_style(Element::Text));

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
