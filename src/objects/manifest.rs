//! TOML object manifests.
//!
//! A manifest lists the objects a scenario needs. Footpaths and path additions
//! carry their decoded visual data inline; any other category is loaded as an
//! opaque chunk so that its slot and descriptor are still reserved.

use std::path::Path;

use serde::Deserialize;

use super::assets::{FootpathEntry, LoadedObject, PathAdditionEntry};
use super::category::ObjectCategory;
use super::entry::{ObjectEntry, SourceGame};
use super::registry::ObjectRegistry;
use crate::core::error::{ParkError, Result};

fn default_source() -> u8 {
    SourceGame::RCT2.0
}

/// Descriptor fields shared by every manifest row
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestIdentity {
    pub name: String,
    /// Explicit slot; the first free slot is used when absent
    #[serde(default)]
    pub slot: Option<usize>,
    #[serde(default = "default_source")]
    pub source: u8,
    #[serde(default)]
    pub checksum: u32,
}

impl ManifestIdentity {
    fn entry(&self, category: ObjectCategory) -> Result<ObjectEntry> {
        if self.name.is_empty() || self.name.len() > 8 || !self.name.is_ascii() {
            return Err(ParkError::Manifest(format!(
                "object name '{}' must be 1 to 8 ASCII characters",
                self.name
            )));
        }
        if self.source > 0x0F {
            return Err(ParkError::Manifest(format!(
                "object '{}' has source tag {} outside 0..=15",
                self.name, self.source
            )));
        }
        Ok(ObjectEntry::named(
            &self.name,
            category,
            SourceGame(self.source),
            self.checksum,
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FootpathRow {
    #[serde(flatten)]
    pub identity: ManifestIdentity,
    #[serde(flatten)]
    pub entry: FootpathEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathAdditionRow {
    #[serde(flatten)]
    pub identity: ManifestIdentity,
    #[serde(flatten)]
    pub entry: PathAdditionEntry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpaqueRow {
    #[serde(flatten)]
    pub identity: ManifestIdentity,
    pub category: ObjectCategory,
}

/// Parsed object manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectManifest {
    #[serde(default)]
    pub footpath: Vec<FootpathRow>,
    #[serde(default)]
    pub path_addition: Vec<PathAdditionRow>,
    #[serde(default)]
    pub object: Vec<OpaqueRow>,
}

impl ObjectManifest {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| ParkError::Manifest(format!("{}: {}", path.display(), e)))
    }

    pub fn len(&self) -> usize {
        self.footpath.len() + self.path_addition.len() + self.object.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn load_row(
    registry: &mut ObjectRegistry,
    identity: &ManifestIdentity,
    category: ObjectCategory,
    object: LoadedObject,
) -> Result<()> {
    let entry = identity.entry(category)?;
    match identity.slot {
        Some(slot) => {
            registry.load(category, slot, entry, object)?;
        }
        None => {
            registry.load_next_free(entry, object)?;
        }
    }
    Ok(())
}

/// Load every manifest row into the registry, returning how many objects were loaded.
///
/// Rows are staged on a copy of the registry. If any row fails, the error is
/// returned and `registry` is left exactly as it was.
pub fn load_manifest(registry: &mut ObjectRegistry, manifest: &ObjectManifest) -> Result<usize> {
    let mut staged = registry.clone();
    stage_rows(&mut staged, manifest)?;
    *registry = staged;

    tracing::info!("Loaded {} objects from manifest", manifest.len());
    Ok(manifest.len())
}

fn stage_rows(registry: &mut ObjectRegistry, manifest: &ObjectManifest) -> Result<()> {
    for row in &manifest.footpath {
        load_row(
            registry,
            &row.identity,
            ObjectCategory::Footpath,
            LoadedObject::Footpath(row.entry.clone()),
        )?;
    }
    for row in &manifest.path_addition {
        load_row(
            registry,
            &row.identity,
            ObjectCategory::PathAddition,
            LoadedObject::PathAddition(row.entry.clone()),
        )?;
    }
    for row in &manifest.object {
        if row.category.has_typed_payload() {
            return Err(ParkError::Manifest(format!(
                "object '{}' must be declared as a [[{}]] row",
                row.identity.name,
                if row.category == ObjectCategory::Footpath {
                    "footpath"
                } else {
                    "path_addition"
                }
            )));
        }
        load_row(
            registry,
            &row.identity,
            row.category,
            LoadedObject::Opaque {
                category: row.category,
                data: Vec::new(),
            },
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::assets::{AdditionDrawType, SupportType};

    const MANIFEST: &str = r#"
        [[footpath]]
        name = "TARMAC"
        image = 1000
        bridge_image = 2000
        support_type = "pole"
        has_base_sprite = true
        scrolling_mode = 22

        [[path_addition]]
        name = "LAMP1"
        slot = 4
        image = 3000
        draw_type = "lights"
        lamp = true

        [[object]]
        name = "WOODCOAS"
        category = "ride"
        source = 0
        checksum = 305419896
    "#;

    #[test]
    fn test_parse_manifest() {
        let manifest = ObjectManifest::from_toml_str(MANIFEST).unwrap();
        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.footpath[0].entry.support_type, SupportType::Pole);
        assert_eq!(manifest.path_addition[0].entry.draw_type, AdditionDrawType::Lights);
        assert_eq!(manifest.path_addition[0].identity.slot, Some(4));
        assert_eq!(manifest.object[0].category, ObjectCategory::Ride);
    }

    #[test]
    fn test_load_manifest_into_registry() {
        let manifest = ObjectManifest::from_toml_str(MANIFEST).unwrap();
        let mut registry = ObjectRegistry::new();
        assert_eq!(load_manifest(&mut registry, &manifest).unwrap(), 3);

        assert_eq!(registry.footpath_entry(0).map(|f| f.scrolling_mode), Some(22));
        assert!(registry.path_addition_entry(4).map_or(false, |a| a.lamp));

        let ride = registry.entry(ObjectCategory::Ride, 0).unwrap();
        assert_eq!(ride.source_game(), SourceGame::CUSTOM);
        assert_eq!(ride.checksum, 0x1234_5678);
    }

    #[test]
    fn test_rejects_long_names() {
        let manifest = ObjectManifest::from_toml_str(
            r#"
            [[object]]
            name = "FAR TOO LONG"
            category = "water"
            "#,
        )
        .unwrap();
        let mut registry = ObjectRegistry::new();
        assert!(matches!(
            load_manifest(&mut registry, &manifest),
            Err(ParkError::Manifest(_))
        ));
    }

    #[test]
    fn test_rejects_typed_categories_as_opaque() {
        let manifest = ObjectManifest::from_toml_str(
            r#"
            [[object]]
            name = "TARMAC"
            category = "footpath"
            "#,
        )
        .unwrap();
        let mut registry = ObjectRegistry::new();
        assert!(load_manifest(&mut registry, &manifest).is_err());
    }

    #[test]
    fn test_failed_manifest_leaves_registry_untouched() {
        let manifest = ObjectManifest::from_toml_str(
            r#"
            [[footpath]]
            name = "TARMAC"
            image = 1000
            bridge_image = 2000

            [[object]]
            name = "WTRCYAN"
            category = "water"

            [[object]]
            name = "WTRGREEN"
            category = "water"
            "#,
        )
        .unwrap();
        let mut registry = ObjectRegistry::new();
        let ride = ObjectEntry::named("SWINGS", ObjectCategory::Ride, SourceGame::RCT2, 0);
        let chunk = LoadedObject::Opaque {
            category: ObjectCategory::Ride,
            data: Vec::new(),
        };
        registry.load(ObjectCategory::Ride, 0, ride, chunk).unwrap();

        assert!(matches!(
            load_manifest(&mut registry, &manifest),
            Err(ParkError::CategoryFull(ObjectCategory::Water))
        ));
        assert_eq!(registry.loaded_count(), 1);
        assert!(registry.footpath_entry(0).is_none());
        assert!(registry.object(ObjectCategory::Water, 0).is_none());
        assert_eq!(
            registry.find_object_in_entry_group(&ride),
            Some((ObjectCategory::Ride, 0))
        );
    }
}
