use quote_core::{
    settings::{Settings, CONFIG_FILE},
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme, settings: &Settings) {
    let block = Block::new()
        .title(" 使用说明 ")
        .borders(Borders::ALL)
        .border_style(theme.ratatui_style(Element::Border))
        .style(theme.ratatui_style(Element::Text));

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            theme.accent_style().add_modifier(Modifier::BOLD),
        ))
    };
    let key_line = |key: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("{:<10}", key), theme.text_style().add_modifier(Modifier::BOLD)),
            Span::styled(what, theme.muted_style()),
        ])
    };

    let lines = vec![
        heading("1. 快捷键"),
        key_line("N/Space", "换一个"),
        key_line("A", "AI 灵感"),
        key_line("L", "查看全部"),
        key_line("T", "切换主题"),
        key_line("H/?", "打开或关闭说明 (Esc 关闭)"),
        key_line("Q/Esc", "退出"),
        Line::raw(""),
        heading("2. AI 密钥"),
        Line::from(Span::styled("导出环境变量:", theme.muted_style())),
        Line::from(Span::styled(settings.api_key_env.clone(), theme.text_style())),
        Line::raw(""),
        heading("3. 修改句子"),
        Line::from(vec![
            Span::styled("编辑 ", theme.muted_style()),
            Span::styled(CONFIG_FILE, theme.text_style()),
            Span::styled(" 中的 [[quotes]]", theme.muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
