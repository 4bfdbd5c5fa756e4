//! Project cards
//!
//! The collection has a fixed length. Cards are edited in place by index and
//! "cleared" by emptying their fields, never removed.

use serde::{Deserialize, Serialize};

/// A single project card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub title: String,
    /// Inline data URL, external image URL, or empty
    #[serde(rename = "imgDataUrl")]
    pub img_data_url: String,
    pub link: String,
}

impl Card {
    /// A card with every field empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.img_data_url.is_empty() && self.link.is_empty()
    }

    pub fn has_image(&self) -> bool {
        !self.img_data_url.is_empty()
    }

    /// Apply an update. Fields left as `None` / `NoChange` / `Keep` are untouched.
    pub fn apply(&mut self, update: &CardUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(link) = &update.link {
            self.link = link.clone();
        }
        match &update.image {
            ImageUpdate::NoChange | ImageUpdate::Keep => {}
            ImageUpdate::Set(src) => self.img_data_url = src.clone(),
            ImageUpdate::Clear => self.img_data_url.clear(),
        }
    }
}

/// How a save affects the card image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageUpdate {
    /// Caller did not mention the image
    #[default]
    NoChange,
    /// Caller explicitly asked to retain the stored image
    Keep,
    /// Replace with a data URL or external URL
    Set(String),
    /// Remove the image
    Clear,
}

/// Partial update for one card
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub link: Option<String>,
    pub image: ImageUpdate,
}

impl CardUpdate {
    /// Update that resets title, link and image to empty
    pub fn cleared() -> Self {
        Self {
            title: Some(String::new()),
            link: Some(String::new()),
            image: ImageUpdate::Clear,
        }
    }
}

/// Fresh collection of `count` empty cards
pub fn default_cards(count: usize) -> Vec<Card> {
    vec![Card::empty(); count]
}

/// Pad with empty cards or truncate so exactly `count` remain.
/// Returns true if the collection was changed.
pub fn normalize_len(cards: &mut Vec<Card>, count: usize) -> bool {
    if cards.len() == count {
        return false;
    }
    cards.resize_with(count, Card::empty);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Card {
        Card {
            title: "Old".to_string(),
            img_data_url: "https://img.example/a.png".to_string(),
            link: "https://old.example".to_string(),
        }
    }

    #[test]
    fn test_no_change_keeps_image() {
        let mut card = filled();
        card.apply(&CardUpdate {
            title: Some("T".to_string()),
            link: Some("L".to_string()),
            image: ImageUpdate::NoChange,
        });
        assert_eq!(card.title, "T");
        assert_eq!(card.link, "L");
        assert_eq!(card.img_data_url, "https://img.example/a.png");
    }

    #[test]
    fn test_unspecified_fields_untouched() {
        let mut card = filled();
        card.apply(&CardUpdate {
            image: ImageUpdate::Set("data:image/png;base64,AA==".to_string()),
            ..Default::default()
        });
        assert_eq!(card.title, "Old");
        assert_eq!(card.link, "https://old.example");
        assert_eq!(card.img_data_url, "data:image/png;base64,AA==");
    }

    #[test]
    fn test_clear() {
        let mut card = filled();
        card.apply(&CardUpdate::cleared());
        assert!(card.is_empty());
        assert!(!card.has_image());
    }

    #[test]
    fn test_normalize_len() {
        let mut cards = vec![filled()];
        assert!(normalize_len(&mut cards, 3));
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], filled());
        assert!(cards[1].is_empty());

        let mut cards = vec![filled(); 5];
        assert!(normalize_len(&mut cards, 3));
        assert_eq!(cards.len(), 3);

        assert!(!normalize_len(&mut cards, 3));
    }

    #[test]
    fn test_stored_field_names() {
        let json = serde_json::to_string(&Card::empty()).unwrap();
        assert_eq!(json, r#"{"title":"","imgDataUrl":"","link":""}"#);
    }
}
