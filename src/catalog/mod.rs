// SPDX-License-Identifier: MPL-2.0
//! Product variants offered by the configurator.
//!
//! Each variant owns a frame set rooted at `/{id}/` under the asset root.
//! A `catalog.toml` placed in the asset root replaces the built-in catalog:
//!
//! ```toml
//! model_name = "2025 S1000RR"
//!
//! [[variants]]
//! id = "black-matte"
//! name = "Black Storm Metallic"
//! price = "19,680.00"
//! add_price = "0.00"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// File name looked up in the asset root.
pub const CATALOG_FILE: &str = "catalog.toml";

/// One selectable color or package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Directory name of the variant's frames.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Total price, already formatted.
    pub price: String,
    /// Price of the option on top of the base model, already formatted.
    #[serde(default)]
    pub add_price: String,
}

impl Variant {
    /// Base path of the variant's frame set.
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("/{}/", self.id)
    }

    /// True when the option costs nothing on top of the base model.
    #[must_use]
    pub fn is_included(&self) -> bool {
        self.add_price
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| matches!(c, '0' | '.' | ','))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub model_name: String,
    pub variants: Vec<Variant>,
}

impl Catalog {
    /// Checks that the catalog can drive the configurator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when there are no variants, or when a
    /// variant id is empty, contains a path separator, or is duplicated.
    pub fn validate(&self) -> Result<()> {
        if self.variants.is_empty() {
            return Err(Error::Config("catalog has no variants".into()));
        }
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if variant.id.is_empty() || variant.id.contains(['/', '\\']) {
                return Err(Error::Config(format!(
                    "invalid variant id: {:?}",
                    variant.id
                )));
            }
            if !seen.insert(variant.id.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate variant id: {}",
                    variant.id
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            model_name: "2025 S1000RR".into(),
            variants: vec![
                Variant {
                    id: "black-matte".into(),
                    name: "Black Storm Metallic".into(),
                    description: "The Blackstorm metallic paintwork underlines the powerful \
                        character of the bike. The dark look is rounded off by the rear wheel \
                        swingarm, wheels and brake calipers in Black."
                        .into(),
                    price: "19,680.00".into(),
                    add_price: "0.00".into(),
                },
                Variant {
                    id: "m-package".into(),
                    name: "M Package".into(),
                    description: "Light white/M Motorsport paintwork, M brake calipers in \
                        blue, M footrests, the M Sport seat and weight-optimized M Carbon \
                        wheels."
                        .into(),
                    price: "24,675.00".into(),
                    add_price: "4,995.00".into(),
                },
                Variant {
                    id: "style-sport".into(),
                    name: "Style Sport".into(),
                    description: String::new(),
                    price: "20,075.00".into(),
                    add_price: "395.00".into(),
                },
            ],
        }
    }
}

/// Loads the catalog from `asset_root`, falling back to the built-in one.
///
/// Returns the catalog and an i18n key describing why the file was ignored,
/// if it was.
pub fn load(asset_root: &Path) -> (Catalog, Option<&'static str>) {
    let path = asset_root.join(CATALOG_FILE);
    if !path.exists() {
        return (Catalog::default(), None);
    }

    match load_from_path(&path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), variants = catalog.variants.len(), "loaded catalog");
            (catalog, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring catalog file");
            (Catalog::default(), Some("notification-catalog-load-error"))
        }
    }
}

/// Reads and validates a catalog file.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid TOML, or does not pass
/// [`Catalog::validate`].
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = toml::from_str(&content)?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.variants.len(), 3);
        assert_eq!(catalog.variants[0].base_path(), "/black-matte/");
        assert_eq!(catalog.variants[1].price, "24,675.00");
    }

    #[test]
    fn zero_or_missing_add_price_is_included() {
        let catalog = Catalog::default();
        assert!(catalog.variants[0].is_included());
        assert!(!catalog.variants[1].is_included());

        let mut variant = catalog.variants[2].clone();
        variant.add_price = String::new();
        assert!(variant.is_included());
    }

    #[test]
    fn position_finds_variant_by_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.position("style-sport"), Some(2));
        assert_eq!(catalog.position("unknown"), None);
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let (catalog, warning) = load(dir.path());
        assert_eq!(catalog, Catalog::default());
        assert!(warning.is_none());
    }

    #[test]
    fn catalog_file_overrides_default() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(
            dir.path().join(CATALOG_FILE),
            r#"
model_name = "Roadster"

[[variants]]
id = "racing-red"
name = "Racing Red"
price = "17,000.00"
"#,
        )
        .expect("failed to write catalog");

        let (catalog, warning) = load(dir.path());
        assert!(warning.is_none());
        assert_eq!(catalog.model_name, "Roadster");
        assert_eq!(catalog.variants[0].add_price, "");
        assert_eq!(catalog.variants[0].base_path(), "/racing-red/");
    }

    #[test]
    fn invalid_catalog_falls_back_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(CATALOG_FILE), "model_name = \"x\"\nvariants = []\n")
            .expect("failed to write catalog");

        let (catalog, warning) = load(dir.path());
        assert_eq!(catalog, Catalog::default());
        assert_eq!(warning, Some("notification-catalog-load-error"));
    }

    #[test]
    fn duplicate_and_nested_ids_are_rejected() {
        let mut catalog = Catalog::default();
        catalog.variants[1].id = "black-matte".into();
        assert!(matches!(catalog.validate(), Err(Error::Config(_))));

        let mut catalog = Catalog::default();
        catalog.variants[0].id = "a/b".into();
        assert!(catalog.validate().is_err());
    }
}
