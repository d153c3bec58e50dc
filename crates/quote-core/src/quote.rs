//! Quote value type and the fixed, ordered Quote Store.

use crate::error::StoreError;
use crate::settings::Settings;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Author sentinel used when a quote has no known author.
pub const ANONYMOUS: &str = "匿名";

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    ("慢慢来，比较快。", ANONYMOUS),
    ("世上本没有路，走的人多了，也便成了路。", "鲁迅"),
    ("生活不止眼前的苟且，还有诗和远方。", "高晓松"),
    ("你若盛开，清风自来。", ANONYMOUS),
    ("凡是过往，皆为序章。", "莎士比亚"),
    ("知足且上进，温柔而坚定。", ANONYMOUS),
    ("人生如逆旅，我亦是行人。", "苏轼"),
    ("行到水穷处，坐看云起时。", "王维"),
    ("愿你出走半生，归来仍是少年。", ANONYMOUS),
    ("种一棵树最好的时间是十年前，其次是现在。", "丹比萨·莫约"),
    ("心有猛虎，细嗅蔷薇。", "西格里夫·萨松"),
    ("不积跬步，无以至千里。", "荀子"),
];

/// A displayable aphorism. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Read-only, non-empty, ordered list of known quotes.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Build a store from an explicit list.
    pub fn new(quotes: Vec<Quote>) -> Result<Self, StoreError> {
        if quotes.is_empty() {
            return Err(StoreError::Empty);
        }
        if let Some(index) = quotes
            .iter()
            .position(|q| q.text.trim().is_empty() || q.author.trim().is_empty())
        {
            return Err(StoreError::BlankEntry { index });
        }
        Ok(Self { quotes })
    }

    /// The list compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            quotes: BUILTIN_QUOTES
                .iter()
                .map(|(text, author)| Quote::new(*text, *author))
                .collect(),
        }
    }

    /// Quotes from the config file if any were given, otherwise the built-in list.
    pub fn from_settings(settings: &Settings) -> Result<Self, StoreError> {
        if settings.quotes.is_empty() {
            Ok(Self::builtin())
        } else {
            Self::new(settings.quotes.clone())
        }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    /// Uniformly random entry. May return the quote currently on screen.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.random_range(0..self.quotes.len())]
    }
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builtin_store_is_valid() {
        let store = QuoteStore::builtin();
        assert_eq!(store.len(), BUILTIN_QUOTES.len());
        // Must also pass the checks applied to configured lists
        assert!(QuoteStore::new(store.as_slice().to_vec()).is_ok());
        assert_eq!(store.get(0), Some(&Quote::new("慢慢来，比较快。", ANONYMOUS)));
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(QuoteStore::new(Vec::new()).unwrap_err(), StoreError::Empty);
    }

    #[test]
    fn rejects_blank_entries() {
        let quotes = vec![Quote::new("a", "b"), Quote::new("c", "  ")];
        assert_eq!(
            QuoteStore::new(quotes).unwrap_err(),
            StoreError::BlankEntry { index: 1 }
        );
    }

    #[test]
    fn random_stays_in_store() {
        let store = QuoteStore::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let q = store.random(&mut rng);
            assert!(store.as_slice().iter().any(|s| s == q));
        }
    }

    #[test]
    fn single_entry_store_always_returns_it() {
        let store = QuoteStore::new(vec![Quote::new("only", "me")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(store.random(&mut rng), &Quote::new("only", "me"));
        assert_eq!(store.get(1), None);
    }
}
