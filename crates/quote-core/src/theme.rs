//! Theme system for the quote widget
//!
//! Three palettes (Light, Dark, Notion) cycled at runtime. Styles are handed
//! out per UI [`Element`] so the renderer never touches raw colours.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme variants supported by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// White card, dark text (default)
    #[default]
    Light,
    /// Near-black card, light text
    Dark,
    /// Warm off-white paper
    Notion,
}

impl ThemeVariant {
    /// Next variant in the Light -> Dark -> Notion -> Light cycle
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Notion,
            Self::Notion => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
            Self::Notion => "NOTION",
        }
    }
}

/// Color palette for a theme variant
#[derive(Debug, Clone)]
pub struct ColorPalette {
    pub background: Color,
    pub card: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Screen behind the card
    Background,
    /// Card body text (the quote itself)
    Text,
    /// Author line and secondary hints
    Muted,
    /// Titles
    Title,
    /// Borders and frames
    Border,
    /// Selected list entry
    Highlight,
    /// The AI action and loading indicator
    Accent,
}

/// Main theme structure managing all UI styling
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Light => ColorPalette {
                background: Color::Rgb(255, 255, 255), // #ffffff
                card: Color::Rgb(255, 255, 255),       // #ffffff
                foreground: Color::Rgb(31, 41, 55),    // #1f2937
                muted: Color::Rgb(107, 114, 128),      // #6b7280
                accent: Color::Rgb(59, 130, 246),      // #3b82f6
                border: Color::Rgb(229, 231, 235),     // #e5e7eb
                selection: Color::Rgb(243, 244, 246),  // #f3f4f6
            },
            ThemeVariant::Dark => ColorPalette {
                background: Color::Rgb(18, 18, 18),    // #121212
                card: Color::Rgb(25, 25, 25),          // #191919
                foreground: Color::Rgb(243, 244, 246), // #f3f4f6
                muted: Color::Rgb(156, 163, 175),      // #9ca3af
                accent: Color::Rgb(59, 130, 246),      // #3b82f6
                border: Color::Rgb(55, 65, 81),        // #374151
                selection: Color::Rgb(37, 37, 37),     // #252525
            },
            ThemeVariant::Notion => ColorPalette {
                background: Color::Rgb(247, 246, 243), // #f7f6f3
                card: Color::Rgb(247, 246, 243),       // #f7f6f3
                foreground: Color::Rgb(31, 41, 55),    // #1f2937
                muted: Color::Rgb(120, 119, 116),      // #787774
                accent: Color::Rgb(59, 130, 246),      // #3b82f6
                border: Color::Rgb(229, 231, 235),     // #e5e7eb
                selection: Color::Rgb(235, 234, 230),  // #ebeae6
            },
        };

        Self { variant, colors }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn set_variant(&mut self, variant: ThemeVariant) {
        if self.variant != variant {
            *self = Self::new(variant);
        }
    }

    /// Get a ratatui Style for the specified UI element
    pub fn ratatui_style(&self, element: Element) -> Style {
        match element {
            Element::Background => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.background),

            Element::Text => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.card),

            Element::Muted => Style::default()
                .fg(self.colors.muted)
                .bg(self.colors.card)
                .add_modifier(Modifier::ITALIC),

            Element::Title => Style::default()
                .fg(self.colors.foreground)
                .bg(self.colors.card)
                .add_modifier(Modifier::BOLD),

            Element::Border => Style::default()
                .fg(self.colors.border)
                .bg(self.colors.card),

            Element::Highlight => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),

            Element::Accent => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.card),
        }
    }

    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    pub fn muted_style(&self) -> Style {
        self.ratatui_style(Element::Muted)
    }

    pub fn highlight_style(&self) -> Style {
        self.ratatui_style(Element::Highlight)
    }

    pub fn accent_style(&self) -> Style {
        self.ratatui_style(Element::Accent)
    }
}
