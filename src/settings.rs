//! Editor configuration
//!
//! Built in code, never read from storage: the card count decides how many
//! stored cards survive a load.

use crate::consts::*;
use crate::profile::Profile;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Fixed number of project cards
    pub card_count: usize,

    // === Storage ===
    /// Key of the card collection record
    pub cards_key: String,
    /// Key of the profile record
    pub profile_key: String,

    // === Display ===
    /// Profile written on first load, also used as display fallback
    pub default_profile: Profile,
    /// Image shown when no profile photo is stored
    pub placeholder_avatar: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            card_count: NUM_CARDS,
            cards_key: CARDS_KEY.to_string(),
            profile_key: PROFILE_KEY.to_string(),
            default_profile: Profile::default(),
            placeholder_avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }
}

impl EditorConfig {
    /// Default config with a different card count
    pub fn with_card_count(card_count: usize) -> Self {
        Self {
            card_count,
            ..Self::default()
        }
    }
}
