//! # Quote Core Library
//!
//! Everything behind the quote widget that does not touch a terminal: the
//! quote model and its built-in store, the AI quote generator, the Gemini
//! client it talks to, configuration, theming and the widget state.
//!
//! ## Modules
//!
//! - `quote`: `Quote` and the read-only `QuoteStore`
//! - `generator`: one-shot AI quote generation that never fails loudly
//! - `gemini`: `TextService` implementation over the Generative Language API
//! - `settings`: figment-backed configuration
//! - `state`: the widget's explicit state holder
//! - `theme`: Light / Dark / Notion palettes

pub mod error;
pub mod gemini;
pub mod generator;
pub mod quote;
pub mod settings;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests {
    use crate::quote::{Quote, QuoteStore};
    use crate::settings::Settings;
    use crate::state::WidgetState;
    use crate::theme::ThemeVariant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeVariant::Light);
        assert_eq!(settings.model, "gemini-3-flash-preview");
        assert_eq!(settings.api_key_env, "GEMINI_API_KEY");
        assert!(settings.quotes.is_empty());
    }

    #[test]
    fn test_store_from_default_settings_is_builtin() {
        let store = QuoteStore::from_settings(&Settings::default()).unwrap();
        assert_eq!(store.as_slice(), QuoteStore::builtin().as_slice());
    }

    #[test]
    fn test_configured_quotes_replace_builtin() {
        let settings = Settings {
            quotes: vec![Quote::new("知行合一。", "王阳明")],
            ..Settings::default()
        };
        let store = QuoteStore::from_settings(&settings).unwrap();
        assert_eq!(store.len(), 1);

        // A one-quote store pins the initial state
        let state = WidgetState::new(&store, settings.theme, &mut StdRng::seed_from_u64(0));
        assert_eq!(state.current(), &Quote::new("知行合一。", "王阳明"));
    }

    #[test]
    fn test_blank_configured_quote_is_rejected() {
        let settings = Settings {
            quotes: vec![Quote::new("", "王阳明")],
            ..Settings::default()
        };
        assert!(QuoteStore::from_settings(&settings).is_err());
    }
}
