//! # Preset Catalog
//!
//! Named chord progressions a user can load instead of typing chords.
//!
//! The built-in catalog is `presets/presets.yaml`, embedded at compile time.
//! A user file in the same format can be merged over it; entries with an id
//! that already exists replace the built-in entry in place.
//!
//! ## File format
//! ```yaml
//! presets:
//!   - id: jazz1
//!     category: jazz
//!     chords:
//!       - { root: "D", quality: "m7" }
//!       - { root: "G", quality: "7" }
//!       - { root: "C", quality: "maj7" }
//! ```
//!
//! Roots and qualities deserialize straight into the closed enums, so a
//! catalog that loads contains only valid chords.

use crate::chord::Chord;
use crate::error::TransposeError;
use crate::table::MAX_CHORDS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_PRESETS: &str = include_str!("../presets/presets.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
    pub id: String,
    pub category: String,
    pub chords: Vec<Chord>,
}

impl Preset {
    /// Chord display names joined with spaces, e.g. `"Dm7 G7 Cmaj7"`.
    pub fn summary(&self) -> String {
        self.chords
            .iter()
            .map(Chord::display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Raw file layout for YAML deserialization
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct PresetFile {
    presets: Vec<Preset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self, TransposeError> {
        Self::from_yaml(BUILTIN_PRESETS)
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, TransposeError> {
        let file: PresetFile =
            serde_yaml::from_str(content).map_err(|e| TransposeError::Preset(e.to_string()))?;

        let mut seen = HashSet::new();
        for preset in &file.presets {
            if preset.id.trim().is_empty() {
                return Err(TransposeError::Preset("preset with empty id".to_string()));
            }
            if !seen.insert(preset.id.as_str()) {
                return Err(TransposeError::Preset(format!(
                    "duplicate preset id '{}'",
                    preset.id
                )));
            }
            if preset.chords.is_empty() {
                return Err(TransposeError::Preset(format!(
                    "preset '{}' has no chords",
                    preset.id
                )));
            }
            if preset.chords.len() > MAX_CHORDS {
                return Err(TransposeError::Preset(format!(
                    "preset '{}' has {} chords (maximum {})",
                    preset.id,
                    preset.chords.len(),
                    MAX_CHORDS
                )));
            }
        }

        log::debug!("Loaded {} preset(s)", file.presets.len());
        Ok(Self {
            presets: file.presets,
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, TransposeError> {
        let content = fs::read_to_string(path).map_err(|e| TransposeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }

    /// Merge `other` into this catalog. Matching ids are replaced in place,
    /// new ids are appended in `other`'s order.
    pub fn merge(&mut self, other: PresetCatalog) {
        for preset in other.presets {
            match self.presets.iter_mut().find(|p| p.id == preset.id) {
                Some(existing) => {
                    log::warn!("Preset '{}' overrides the built-in entry", preset.id);
                    *existing = preset;
                }
                None => self.presets.push(preset),
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<&Preset, TransposeError> {
        self.presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| TransposeError::UnknownPreset(id.to_string()))
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn ids(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.id.as_str()).collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for preset in &self.presets {
            if !categories.contains(&preset.category.as_str()) {
                categories.push(&preset.category);
            }
        }
        categories
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Preset> + 'a {
        self.presets.iter().filter(move |p| p.category == category)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::NoteSpelling;
    use crate::quality::ChordQuality;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = PresetCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 71);
        assert_eq!(
            catalog.categories(),
            vec!["pop", "jazz", "basic", "blues", "rock", "folk", "country", "rnb", "reggae", "caribbean"]
        );
    }

    #[test]
    fn test_builtin_entries() {
        let catalog = PresetCatalog::builtin().unwrap();

        let jazz1 = catalog.get("jazz1").unwrap();
        assert_eq!(jazz1.summary(), "Dm7 G7 Cmaj7");

        let blues = catalog.get("blues").unwrap();
        assert_eq!(blues.chords.len(), 12);
        assert!(blues.chords.iter().all(|c| c.quality == ChordQuality::Dominant7));

        let modal = catalog.get("modal").unwrap();
        assert_eq!(modal.chords[1].root, NoteSpelling::ASharp);

        let blues5 = catalog.get("blues5").unwrap();
        assert_eq!(blues5.chords[5].display(), "F#dim7");
    }

    #[test]
    fn test_unknown_preset() {
        let catalog = PresetCatalog::builtin().unwrap();
        assert_eq!(
            catalog.get("polka1"),
            Err(TransposeError::UnknownPreset("polka1".to_string()))
        );
    }

    #[test]
    fn test_by_category() {
        let catalog = PresetCatalog::builtin().unwrap();
        let caribbean: Vec<&str> = catalog
            .by_category("caribbean")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(caribbean, vec!["caribbean1", "caribbean2", "caribbean3"]);
    }

    #[test]
    fn test_invalid_preset_files() {
        let bad_root = r#"
presets:
  - id: x
    category: pop
    chords:
      - { root: "H", quality: "" }
"#;
        assert!(matches!(
            PresetCatalog::from_yaml(bad_root),
            Err(TransposeError::Preset(_))
        ));

        let bad_quality = r#"
presets:
  - id: x
    category: pop
    chords:
      - { root: "C", quality: "min" }
"#;
        assert!(PresetCatalog::from_yaml(bad_quality).is_err());

        let duplicate = r#"
presets:
  - id: x
    category: pop
    chords: [{ root: "C", quality: "" }]
  - id: x
    category: pop
    chords: [{ root: "G", quality: "" }]
"#;
        assert_eq!(
            PresetCatalog::from_yaml(duplicate),
            Err(TransposeError::Preset("duplicate preset id 'x'".to_string()))
        );

        let empty = r#"
presets:
  - id: x
    category: pop
    chords: []
"#;
        assert_eq!(
            PresetCatalog::from_yaml(empty),
            Err(TransposeError::Preset("preset 'x' has no chords".to_string()))
        );
    }

    #[test]
    fn test_oversized_preset_is_rejected() {
        let mut yaml = String::from("presets:\n  - id: long\n    category: pop\n    chords:\n");
        for _ in 0..21 {
            yaml.push_str("      - { root: \"C\", quality: \"\" }\n");
        }
        assert_eq!(
            PresetCatalog::from_yaml(&yaml),
            Err(TransposeError::Preset(
                "preset 'long' has 21 chords (maximum 20)".to_string()
            ))
        );
    }

    #[test]
    fn test_quality_defaults_to_major() {
        let catalog = PresetCatalog::from_yaml(
            r#"
presets:
  - id: two
    category: basic
    chords:
      - { root: "Eb" }
      - { root: "Bb", quality: "sus2" }
"#,
        )
        .unwrap();
        assert_eq!(catalog.get("two").unwrap().summary(), "Eb Bbsus2");
    }

    #[test]
    fn test_merge_overrides_and_appends() {
        let mut catalog = PresetCatalog::builtin().unwrap();
        let user = PresetCatalog::from_yaml(
            r#"
presets:
  - id: pop1
    category: pop
    chords: [{ root: "E", quality: "m" }]
  - id: mine
    category: custom
    chords: [{ root: "Db", quality: "maj9" }]
"#,
        )
        .unwrap();

        catalog.merge(user);
        assert_eq!(catalog.len(), 72);
        assert_eq!(catalog.ids()[0], "pop1");
        assert_eq!(catalog.get("pop1").unwrap().summary(), "Em");
        assert_eq!(catalog.get("mine").unwrap().category, "custom");
        assert_eq!(catalog.categories().last(), Some(&"custom"));
    }
}
