//! Field population: common attributes first, then one routine per variant.

pub mod common;
pub mod equipment;
pub mod structures;

pub use common::populate_common;

use crate::config::EngineSettings;
use crate::constants::{AIDS_TO_NAVIGATION, GENERIC_BEACON, GENERIC_BUOY, SEAMARK_PREFIX};
use crate::domain::AtonType;

/// Tag key composition for one variant.
///
/// Descriptive attributes live under `seamark:<type>:`; standards-only
/// attributes live under `<ns>:aidsToNavigation:<category>:`, where beacons
/// and buoys share one generic category across all their subtypes.
#[derive(Debug, Clone)]
pub struct TagKeys {
    seamark_prefix: String,
    standards_prefix: String,
}

impl TagKeys {
    pub fn new(aton_type: AtonType, settings: &EngineSettings) -> Self {
        let standards_category = if aton_type.is_beacon() {
            GENERIC_BEACON
        } else if aton_type.is_buoy() {
            GENERIC_BUOY
        } else {
            aton_type.key()
        };

        Self {
            seamark_prefix: format!("{}:{}:", SEAMARK_PREFIX, aton_type.key()),
            standards_prefix: format!(
                "{}:{}:{}:",
                settings.schema_version.tag_namespace(),
                AIDS_TO_NAVIGATION,
                standards_category
            ),
        }
    }

    /// `seamark:<type>:<attribute>`
    pub fn seamark(&self, attribute: &str) -> String {
        format!("{}{}", self.seamark_prefix, attribute)
    }

    /// `<ns>:aidsToNavigation:<category>:<attribute>`
    pub fn standards(&self, attribute: &str) -> String {
        format!("{}{}", self.standards_prefix, attribute)
    }
}

/// Key of a standards attribute that is not tied to a category
pub fn standards_key(settings: &EngineSettings, attribute: &str) -> String {
    format!(
        "{}:{}:{}",
        settings.schema_version.tag_namespace(),
        AIDS_TO_NAVIGATION,
        attribute
    )
}
