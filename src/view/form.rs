//! Card edit form: visibility state and save resolution

use crate::cards::{CardUpdate, ImageUpdate};

/// Visibility of a card's edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Collapsed,
    Expanded,
}

impl FormState {
    /// Edit button: flip between the two states
    pub fn toggle(self) -> Self {
        match self {
            FormState::Collapsed => FormState::Expanded,
            FormState::Expanded => FormState::Collapsed,
        }
    }

    /// CSS `display` value for the form element
    pub fn css_display(&self) -> &'static str {
        match self {
            FormState::Collapsed => "none",
            FormState::Expanded => "flex",
        }
    }

    /// Recover the state from the form's current `display` value
    pub fn from_css_display(display: &str) -> Self {
        if display == "none" {
            FormState::Collapsed
        } else {
            FormState::Expanded
        }
    }
}

/// Pick the image update for a save.
///
/// An uploaded file wins over a pasted URL; with neither the stored image is kept.
pub fn resolve_image(uploaded: Option<String>, pasted_url: &str) -> ImageUpdate {
    if let Some(data_url) = uploaded {
        return ImageUpdate::Set(data_url);
    }
    let pasted_url = pasted_url.trim();
    if pasted_url.is_empty() {
        ImageUpdate::Keep
    } else {
        ImageUpdate::Set(pasted_url.to_string())
    }
}

/// Raw text field values read from a card form at save time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveForm {
    pub title: String,
    pub link: String,
    pub image_url: String,
}

impl SaveForm {
    /// Build the card update, given the data URL of an uploaded file if any
    pub fn into_update(self, uploaded: Option<String>) -> CardUpdate {
        CardUpdate {
            title: Some(self.title.trim().to_string()),
            link: Some(self.link.trim().to_string()),
            image: resolve_image(uploaded, &self.image_url),
        }
    }
}
