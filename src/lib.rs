//! Folio Cards - a single-page portfolio editor
//!
//! Core modules:
//! - `cards`: Project cards and the tagged update applied to them
//! - `profile`: The profile record (name, course info, photo)
//! - `persistence`: Key-value storage and the self-healing state accessor
//! - `platform`: Browser backends (LocalStorage, file reading)
//! - `view`: View-models and the DOM renderer
//! - `settings`: Editor configuration

pub mod cards;
pub mod data_url;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod profile;
pub mod settings;
pub mod view;

pub use cards::{Card, CardUpdate, ImageUpdate};
pub use error::{PortfolioError, Result, StorageError};
pub use persistence::{KeyValueStore, MemoryStore, PortfolioState, PortfolioStore};
pub use profile::Profile;
pub use settings::EditorConfig;

/// Editor configuration constants
pub mod consts {
    /// Number of project cards shown on the page
    pub const NUM_CARDS: usize = 3;

    /// LocalStorage key for the card collection
    pub const CARDS_KEY: &str = "martin_ficha_cards_v1";
    /// LocalStorage key for the profile record
    pub const PROFILE_KEY: &str = "martin_ficha_profile_v1";

    /// Image shown when no profile photo has been uploaded
    pub const PLACEHOLDER_AVATAR: &str = "placeholder-avatar.png";

    /// Default profile values
    pub const DEFAULT_NAME: &str = "Martin Mongelos";
    pub const DEFAULT_LEGAJO: &str = "1223475";
    pub const DEFAULT_MATERIA: &str = "Diseño y desarrollo web";
    pub const DEFAULT_CURSO: &str = "";
}

/// Element ids the page markup must provide
pub mod dom_ids {
    pub const PROFILE_PHOTO: &str = "profilePhoto";
    pub const PROFILE_PHOTO_INPUT: &str = "profilePhotoInput";
    pub const FULL_NAME: &str = "fullName";
    pub const LEGAJO: &str = "legajo";
    pub const MATERIA: &str = "materia";
    pub const CURSO: &str = "curso";
    pub const CARDS_CONTAINER: &str = "cardsContainer";
}
