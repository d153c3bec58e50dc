use super::{
    footer::render_footer, header::render_header, help_modal::render_help_modal,
    quote_card::render_quote_card,
    quote_list_modal::{render_quote_list_modal, QuoteListParams},
};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quote_core::{
    generator::QuoteGenerator,
    quote::{Quote, QuoteStore},
    settings::Settings,
    state::{Overlay, WidgetState},
    theme::{Element, Theme},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear},
    Frame, Terminal,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

pub const QUOTES_PER_PAGE: usize = 8;

pub struct App {
    should_quit: bool,
    theme: Theme,
    state: WidgetState,
    settings: Settings,
    store: QuoteStore,
    generator: QuoteGenerator,
    rng: StdRng,
    generated_tx: UnboundedSender<Option<Quote>>,
    generated_rx: UnboundedReceiver<Option<Quote>>,
}

impl App {
    pub fn new(settings: Settings, store: QuoteStore, generator: QuoteGenerator) -> Self {
        let mut rng = StdRng::from_os_rng();
        let state = WidgetState::new(&store, settings.theme, &mut rng);
        let (generated_tx, generated_rx) = unbounded_channel();
        Self {
            should_quit: false,
            theme: Theme::new(settings.theme),
            state,
            settings,
            store,
            generator,
            rng,
            generated_tx,
            generated_rx,
        }
    }

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        while !self.should_quit {
            self.apply_generated();
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::new()
                .borders(Borders::NONE)
                .style(self.theme.ratatui_style(Element::Background)),
            area,
        );

        let app_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        render_header(frame, app_chunks[0], &self.theme, &self.state, &self.settings);
        render_quote_card(frame, app_chunks[1], &self.theme, self.state.current());
        render_footer(frame, app_chunks[2], &self.theme, self.state.overlay());

        match self.state.overlay() {
            Overlay::None => {}
            Overlay::List => {
                let modal_area = modal_rect(area, 0.8, 0.7, (30, 8), (72, 24));
                frame.render_widget(Clear, modal_area);
                render_quote_list_modal(
                    frame,
                    modal_area,
                    QuoteListParams {
                        theme: &self.theme,
                        quotes: self.store.as_slice(),
                        selected_index: self.state.list_cursor(),
                        quotes_per_page: QUOTES_PER_PAGE,
                    },
                );
            }
            Overlay::Help => {
                let modal_area = modal_rect(area, 0.7, 0.6, (30, 10), (64, 18));
                frame.render_widget(Clear, modal_area);
                render_help_modal(frame, modal_area, &self.theme, &self.settings);
            }
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.state.overlay() {
            Overlay::None => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Char(' ') => {
                    self.state.next_random(&self.store, &mut self.rng);
                }
                KeyCode::Char('a') => self.request_ai_quote(),
                KeyCode::Char('l') => self.state.open_list(&self.store),
                KeyCode::Char('t') => {
                    let variant = self.state.toggle_theme();
                    self.theme.set_variant(variant);
                    debug!(theme = variant.label(), "theme changed");
                }
                KeyCode::Char('h') | KeyCode::Char('?') => self.state.open_help(),
                _ => {}
            },
            Overlay::List => match key.code {
                KeyCode::Up => self.state.list_previous(self.store.len()),
                KeyCode::Down => self.state.list_next(self.store.len()),
                KeyCode::Left => {
                    self.state
                        .list_page(self.store.len(), QUOTES_PER_PAGE, false)
                }
                KeyCode::Right => self.state.list_page(self.store.len(), QUOTES_PER_PAGE, true),
                KeyCode::Enter => self.state.select_from_list(&self.store),
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('l') => {
                    self.state.close_overlay()
                }
                _ => {}
            },
            Overlay::Help => match key.code {
                KeyCode::Esc
                | KeyCode::Enter
                | KeyCode::Char('q')
                | KeyCode::Char('h')
                | KeyCode::Char('?') => self.state.close_overlay(),
                _ => {}
            },
        }
    }

    /// Spawn one generator call. Ignored while another is outstanding.
    fn request_ai_quote(&mut self) {
        if !self.state.begin_ai_request() {
            debug!("AI request already in flight");
            return;
        }
        info!("requesting AI quote");

        let generator = self.generator.clone();
        let tx = self.generated_tx.clone();
        tokio::spawn(async move {
            let quote = generator.generate().await;
            // Receiver only disappears when the app is shutting down
            let _ = tx.send(quote);
        });
    }

    fn apply_generated(&mut self) {
        while let Ok(quote) = self.generated_rx.try_recv() {
            self.state.finish_ai_request(quote);
        }
    }
}

/// Centered modal sized as a fraction of the terminal, clamped to bounds.
fn modal_rect(
    size: Rect,
    width_ratio: f32,
    height_ratio: f32,
    (min_width, min_height): (u16, u16),
    (max_width, max_height): (u16, u16),
) -> Rect {
    let modal_width = (((size.width as f32) * width_ratio).round() as u16)
        .clamp(min_width, max_width)
        .min(size.width);
    let modal_height = (((size.height as f32) * height_ratio).round() as u16)
        .clamp(min_height, max_height)
        .min(size.height);
    Rect::new(
        size.x + (size.width.saturating_sub(modal_width)) / 2,
        size.y + (size.height.saturating_sub(modal_height)) / 2,
        modal_width,
        modal_height,
    )
}
