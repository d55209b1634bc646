//! Fixed-capacity registry of loaded objects.
//!
//! Every category owns a pair of parallel slot arrays: the descriptor an object
//! was loaded from and the decoded object itself. A slot holds an object exactly
//! when its descriptor is non-empty.

use std::sync::Arc;

use super::assets::{FootpathEntry, LoadedObject, PathAdditionEntry};
use super::category::{ObjectCategory, TOTAL_OBJECT_CAPACITY};
use super::entry::ObjectEntry;
use crate::core::error::{ParkError, Result};

/// Slot arrays for one category
#[derive(Debug, Clone)]
struct CategorySlots {
    entries: Vec<ObjectEntry>,
    objects: Vec<Option<Arc<LoadedObject>>>,
}

impl CategorySlots {
    fn new(capacity: usize) -> Self {
        Self {
            entries: vec![ObjectEntry::EMPTY; capacity],
            objects: vec![None; capacity],
        }
    }
}

/// Split a flat global index into its category and local slot
pub fn resolve_global_index(index: usize) -> Result<(ObjectCategory, usize)> {
    let mut remaining = index;
    for category in ObjectCategory::ALL {
        if remaining < category.capacity() {
            return Ok((category, remaining));
        }
        remaining -= category.capacity();
    }
    Err(ParkError::IndexOutOfRange {
        index,
        capacity: TOTAL_OBJECT_CAPACITY,
    })
}

/// Flat global index of a category slot
pub fn global_index(category: ObjectCategory, slot: usize) -> Result<usize> {
    if slot >= category.capacity() {
        return Err(ParkError::SlotOutOfRange { category, slot });
    }
    Ok(category.first_global_index() + slot)
}

/// Registry of every loaded object, grouped by category
#[derive(Debug, Clone)]
pub struct ObjectRegistry {
    groups: [CategorySlots; ObjectCategory::COUNT],
}

impl ObjectRegistry {
    /// Create a registry with every slot empty
    pub fn new() -> Self {
        Self {
            groups: std::array::from_fn(|i| CategorySlots::new(ObjectCategory::ALL[i].capacity())),
        }
    }

    fn group(&self, category: ObjectCategory) -> &CategorySlots {
        &self.groups[category as usize]
    }

    fn group_mut(&mut self, category: ObjectCategory) -> &mut CategorySlots {
        &mut self.groups[category as usize]
    }

    /// Locate a loaded object by descriptor.
    ///
    /// The category comes from the descriptor's flag nibble; unloaded slots are skipped.
    pub fn find_object_in_entry_group(&self, entry: &ObjectEntry) -> Option<(ObjectCategory, usize)> {
        let category = entry.category()?;
        let group = self.group(category);
        group
            .entries
            .iter()
            .zip(&group.objects)
            .position(|(stored, object)| object.is_some() && stored.matches(entry))
            .map(|slot| (category, slot))
    }

    /// Descriptor stored at a global index (empty if the slot is unused)
    pub fn get_loaded_object_entry(&self, index: usize) -> Result<&ObjectEntry> {
        let (category, slot) = resolve_global_index(index)?;
        Ok(&self.group(category).entries[slot])
    }

    /// Object loaded at a global index, `None` if the slot is unused
    pub fn get_loaded_object_chunk(&self, index: usize) -> Result<Option<&Arc<LoadedObject>>> {
        let (category, slot) = resolve_global_index(index)?;
        Ok(self.group(category).objects[slot].as_ref())
    }

    /// Descriptor stored in a category slot
    pub fn entry(&self, category: ObjectCategory, slot: usize) -> Option<&ObjectEntry> {
        self.group(category).entries.get(slot)
    }

    /// Object loaded in a category slot
    pub fn object(&self, category: ObjectCategory, slot: usize) -> Option<&Arc<LoadedObject>> {
        self.group(category).objects.get(slot)?.as_ref()
    }

    pub fn footpath_entry(&self, slot: usize) -> Option<&FootpathEntry> {
        self.object(ObjectCategory::Footpath, slot)?.as_footpath()
    }

    pub fn path_addition_entry(&self, slot: usize) -> Option<&PathAdditionEntry> {
        self.object(ObjectCategory::PathAddition, slot)?.as_path_addition()
    }

    /// Store an object in a specific slot
    pub fn load(
        &mut self,
        category: ObjectCategory,
        slot: usize,
        entry: ObjectEntry,
        object: LoadedObject,
    ) -> Result<Arc<LoadedObject>> {
        if slot >= category.capacity() {
            return Err(ParkError::SlotOutOfRange { category, slot });
        }
        if entry.is_empty() {
            return Err(ParkError::EmptyDescriptor);
        }
        if entry.category() != Some(category) {
            return Err(ParkError::CategoryMismatch {
                category,
                object: "descriptor",
            });
        }
        let untyped = matches!(object, LoadedObject::Opaque { .. });
        if object.category() != category || (untyped && category.has_typed_payload()) {
            return Err(ParkError::CategoryMismatch {
                category,
                object: object.kind(),
            });
        }

        let group = self.group_mut(category);
        if group.objects[slot].is_some() {
            return Err(ParkError::SlotOccupied { category, slot });
        }

        let object = Arc::new(object);
        group.entries[slot] = entry;
        group.objects[slot] = Some(Arc::clone(&object));

        tracing::debug!(
            "Loaded {} {} into slot {} ({:?} chunk)",
            category.name(),
            entry.identifier_name(),
            slot,
            category.encoding()
        );
        Ok(object)
    }

    /// Store an object in the first free slot of its descriptor's category
    pub fn load_next_free(
        &mut self,
        entry: ObjectEntry,
        object: LoadedObject,
    ) -> Result<(ObjectCategory, usize)> {
        let category = entry
            .category()
            .ok_or(ParkError::UnknownCategory(entry.category_index()))?;
        let slot = self
            .group(category)
            .objects
            .iter()
            .position(Option::is_none)
            .ok_or(ParkError::CategoryFull(category))?;
        self.load(category, slot, entry, object)?;
        Ok((category, slot))
    }

    /// Release a slot, returning the object that occupied it
    pub fn unload(&mut self, category: ObjectCategory, slot: usize) -> Option<Arc<LoadedObject>> {
        let group = self.group_mut(category);
        let object = group.objects.get_mut(slot)?.take()?;
        let entry = std::mem::replace(&mut group.entries[slot], ObjectEntry::EMPTY);

        tracing::debug!(
            "Unloaded {} {} from slot {}",
            category.name(),
            entry.identifier_name(),
            slot
        );
        Some(object)
    }

    /// Release every slot
    pub fn clear(&mut self) {
        let released = self.loaded_count();
        for (i, group) in self.groups.iter_mut().enumerate() {
            *group = CategorySlots::new(ObjectCategory::ALL[i].capacity());
        }
        tracing::debug!("Cleared object registry ({} objects released)", released);
    }

    /// Loaded slots in global index order
    pub fn loaded(&self) -> impl Iterator<Item = (usize, &ObjectEntry, &Arc<LoadedObject>)> + '_ {
        ObjectCategory::ALL.into_iter().flat_map(move |category| {
            let group = self.group(category);
            let start = category.first_global_index();
            group
                .entries
                .iter()
                .zip(&group.objects)
                .enumerate()
                .filter_map(move |(slot, (entry, object))| {
                    object.as_ref().map(|object| (start + slot, entry, object))
                })
        })
    }

    pub fn loaded_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.objects.iter().filter(|o| o.is_some()).count())
            .sum()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
