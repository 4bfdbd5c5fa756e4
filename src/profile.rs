//! Profile record
//!
//! Singleton stored under its own LocalStorage key.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Student profile shown in the page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Student id number
    pub legajo: String,
    /// Subject
    pub materia: String,
    /// Course
    pub curso: String,
    /// Inline data URL of the uploaded photo, empty when none
    #[serde(rename = "photoDataUrl")]
    pub photo_data_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            legajo: DEFAULT_LEGAJO.to_string(),
            materia: DEFAULT_MATERIA.to_string(),
            curso: DEFAULT_CURSO.to_string(),
            photo_data_url: String::new(),
        }
    }
}

impl Profile {
    /// Whether a photo has been uploaded
    pub fn has_photo(&self) -> bool {
        !self.photo_data_url.is_empty()
    }

    /// Replace the photo, leaving every other field as is
    pub fn set_photo(&mut self, data_url: impl Into<String>) {
        self.photo_data_url = data_url.into();
    }
}
