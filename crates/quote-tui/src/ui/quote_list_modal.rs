use quote_core::{
    quote::Quote,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct QuoteListParams<'a> {
    pub theme: &'a Theme,
    pub quotes: &'a [Quote],
    pub selected_index: usize,
    pub quotes_per_page: usize,
}

pub fn render_quote_list_modal(frame: &mut Frame, area: Rect, params: QuoteListParams) {
    let title = format!(" 我的私人句子库 ({}) ", params.quotes.len());
    let block = Block::new()
        .title(title)
        .borders(Borders::ALL)
        .border_style(params.theme.ratatui_style(Element::Border))
        .style(params.theme.ratatui_style(Element::Text));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Page indicator
            Constraint::Min(0),    // Quote list
        ])
        .split(inner_area);

    let per_page = params.quotes_per_page.max(1);
    let total_pages = params.quotes.len().div_ceil(per_page);
    let current_page = params.selected_index / per_page;
    let start_index = current_page * per_page;
    let end_index = std::cmp::min(start_index + per_page, params.quotes.len());

    let page_info = if total_pages > 1 {
        format!("Page {} of {}", current_page + 1, total_pages)
    } else {
        format!("{} quotes", params.quotes.len())
    };
    let page_paragraph = Paragraph::new(page_info)
        .alignment(Alignment::Center)
        .style(params.theme.muted_style());
    frame.render_widget(page_paragraph, chunks[0]);

    let items: Vec<ListItem> = params.quotes[start_index..end_index]
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            let style = if start_index + i == params.selected_index {
                params.theme.highlight_style()
            } else {
                params.theme.text_style()
            };

            ListItem::new(Line::from(vec![
                Span::styled(quote.text.clone(), style.add_modifier(Modifier::BOLD)),
                Span::styled(format!("  — {}", quote.author), params.theme.muted_style()),
            ]))
        })
        .collect();

    let list = List::new(items).style(params.theme.ratatui_style(Element::Text));
    frame.render_widget(list, chunks[1]);
}
