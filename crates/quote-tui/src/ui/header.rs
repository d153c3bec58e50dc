use quote_core::{
    settings::Settings,
    state::WidgetState,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    state: &WidgetState,
    settings: &Settings,
) {
    let title = Title::from(" 每日一句 ").alignment(Alignment::Left);

    let (ai_text, ai_color) = build_ai_status(state, settings);

    let status = Line::from(vec![
        Span::styled(
            format!("Theme :: {} :: ", theme.variant().label()),
            theme.text_style(),
        ),
        Span::styled(ai_text, theme.text_style().fg(ai_color)),
    ]);

    let header_paragraph = Paragraph::new(status)
        .style(theme.ratatui_style(Element::Text))
        .alignment(Alignment::Left)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.ratatui_style(Element::Border))
                .style(theme.ratatui_style(Element::Text)),
        );

    frame.render_widget(header_paragraph, area);
}

fn build_ai_status(state: &WidgetState, settings: &Settings) -> (String, Color) {
    if state.is_ai_loading() {
        return ("AI 灵感生成中...".to_string(), Color::Cyan);
    }

    // Only the variable name is shown, never its value
    match settings.api_key() {
        Ok(_) => (format!("AI READY ({})", settings.model), Color::Green),
        Err(_) => (
            format!("AI [SET {}]", settings.api_key_env),
            Color::Yellow,
        ),
    }
}
