//! View layer
//!
//! Pure view-models computed from the stored records, plus the DOM renderer
//! that materializes them in the browser.

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod form;

pub use form::{FormState, SaveForm, resolve_image};

use crate::cards::Card;
use crate::data_url::{self, ImageSource};
use crate::profile::Profile;
use crate::settings::EditorConfig;

/// Thumb text for cards without an image
pub const NO_IMAGE_TEXT: &str = "Sin imagen (subila o pegá una URL)";
/// Link text for cards without a link
pub const NO_LINK_TEXT: &str = "Aún no hay link";
/// Confirmation prompt before clearing a card
pub const CLEAR_CONFIRM_TEXT: &str = "Borrar título, imagen y link de esta card?";

/// Display text for a card with no title (1-based)
pub fn default_card_title(index: usize) -> String {
    format!("Proyecto {}", index + 1)
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Profile header contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub legajo: String,
    pub materia: String,
    pub curso: String,
    pub photo_src: String,
}

impl ProfileView {
    /// Empty fields fall back to the configured default profile
    pub fn new(profile: &Profile, config: &EditorConfig) -> Self {
        let defaults = &config.default_profile;
        let photo_src = if profile.has_photo() {
            profile.photo_data_url.clone()
        } else {
            config.placeholder_avatar.clone()
        };

        Self {
            name: or_fallback(&profile.name, &defaults.name),
            legajo: or_fallback(&profile.legajo, &defaults.legajo),
            materia: or_fallback(&profile.materia, &defaults.materia),
            curso: or_fallback(&profile.curso, &defaults.curso),
            photo_src,
        }
    }
}

/// Card thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumb {
    Image {
        src: String,
        alt: String,
        /// Hosted elsewhere; rendered lazily without a referrer
        external: bool,
    },
    Placeholder(&'static str),
}

/// One rendered project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub thumb: Thumb,
    pub heading: String,
    pub link_href: String,
    pub link_text: String,
    /// Prefill for the edit form
    pub form_title: String,
    pub form_link: String,
}

impl CardView {
    pub fn new(card: &Card, index: usize) -> Self {
        let heading = or_fallback(&card.title, &default_card_title(index));

        let thumb = if card.has_image() {
            let external = matches!(
                data_url::classify(&card.img_data_url),
                ImageSource::External(_)
            );
            Thumb::Image {
                src: card.img_data_url.clone(),
                alt: heading.clone(),
                external,
            }
        } else {
            Thumb::Placeholder(NO_IMAGE_TEXT)
        };

        Self {
            index,
            thumb,
            heading,
            link_href: or_fallback(&card.link, "#"),
            link_text: or_fallback(&card.link, NO_LINK_TEXT),
            form_title: card.title.clone(),
            form_link: card.link.clone(),
        }
    }

    /// View-models for the whole collection, in order
    pub fn all(cards: &[Card]) -> Vec<Self> {
        cards
            .iter()
            .enumerate()
            .map(|(i, card)| Self::new(card, i))
            .collect()
    }
}
