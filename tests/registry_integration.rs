//! Object registry integration tests
//!
//! Covers descriptor lookup, global index resolution, slot lifecycle and
//! loading the bundled object manifest.

use std::path::Path;
use std::sync::Arc;

use parkway::core::ParkError;
use parkway::objects::*;

fn ride_entry(name: &str, source: SourceGame, checksum: u32) -> ObjectEntry {
    ObjectEntry::named(name, ObjectCategory::Ride, source, checksum)
}

fn opaque(category: ObjectCategory) -> LoadedObject {
    LoadedObject::Opaque {
        category,
        data: vec![0xAB; 4],
    }
}

#[test]
fn test_ride_in_slot_three_end_to_end() {
    let mut registry = ObjectRegistry::new();
    let entry = ride_entry("WOODCOAS", SourceGame::RCT2, 0x1234_5678);
    let stored = registry
        .load(ObjectCategory::Ride, 3, entry, opaque(ObjectCategory::Ride))
        .unwrap();

    assert_eq!(
        registry.find_object_in_entry_group(&entry),
        Some((ObjectCategory::Ride, 3))
    );

    let chunk = registry.get_loaded_object_chunk(3).unwrap().unwrap();
    assert!(Arc::ptr_eq(chunk, &stored));
    assert_eq!(registry.get_loaded_object_entry(3).unwrap(), &entry);

    // Neighbouring slots are empty
    assert!(registry.get_loaded_object_chunk(2).unwrap().is_none());
    assert!(registry.get_loaded_object_entry(4).unwrap().is_empty());
}

#[test]
fn test_invalid_category_nibble_is_not_found() {
    let mut registry = ObjectRegistry::new();
    let entry = ride_entry("WOODCOAS", SourceGame::RCT2, 0);
    registry
        .load(ObjectCategory::Ride, 0, entry, opaque(ObjectCategory::Ride))
        .unwrap();

    let mut bogus = entry;
    bogus.flags = (bogus.flags & !0x0F) | 11;
    assert_eq!(registry.find_object_in_entry_group(&bogus), None);

    bogus.flags = (bogus.flags & !0x0F) | 15;
    assert_eq!(registry.find_object_in_entry_group(&bogus), None);
}

#[test]
fn test_custom_objects_match_on_checksum() {
    let mut registry = ObjectRegistry::new();
    let custom = ride_entry("MYRIDE", SourceGame::CUSTOM, 0xAAAA);
    registry
        .load(ObjectCategory::Ride, 0, custom, opaque(ObjectCategory::Ride))
        .unwrap();

    let other_build = ride_entry("MYRIDE", SourceGame::CUSTOM, 0xBBBB);
    assert_eq!(registry.find_object_in_entry_group(&other_build), None);
    assert_eq!(
        registry.find_object_in_entry_group(&custom),
        Some((ObjectCategory::Ride, 0))
    );

    // A shipped descriptor only needs category and name
    let shipped = ride_entry("MYRIDE", SourceGame::RCT2, 0xBBBB);
    assert_eq!(
        registry.find_object_in_entry_group(&shipped),
        Some((ObjectCategory::Ride, 0))
    );
}

#[test]
fn test_global_indices_across_categories() {
    let mut registry = ObjectRegistry::new();
    let footpath = ObjectEntry::named("TARMAC", ObjectCategory::Footpath, SourceGame::RCT2, 0);
    let tarmac = LoadedObject::Footpath(FootpathEntry {
        image: 3000,
        bridge_image: 3200,
        support_type: SupportType::Box,
        has_base_sprite: false,
        scrolling_mode: 22,
    });
    registry
        .load(ObjectCategory::Footpath, 0, footpath, tarmac)
        .unwrap();

    assert_eq!(ObjectCategory::Footpath.first_global_index(), 668);
    assert_eq!(ObjectCategory::PathAddition.first_global_index(), 684);
    assert_eq!(resolve_global_index(668).unwrap(), (ObjectCategory::Footpath, 0));
    assert_eq!(global_index(ObjectCategory::Footpath, 0).unwrap(), 668);
    assert_eq!(registry.get_loaded_object_entry(668).unwrap(), &footpath);

    assert_eq!(
        resolve_global_index(TOTAL_OBJECT_CAPACITY - 1).unwrap(),
        (ObjectCategory::ScenarioText, 0)
    );
    assert!(matches!(
        registry.get_loaded_object_chunk(TOTAL_OBJECT_CAPACITY),
        Err(ParkError::IndexOutOfRange { index: 721, capacity: 721 })
    ));
}

#[test]
fn test_unload_and_reload() {
    let mut registry = ObjectRegistry::new();
    let entry = ride_entry("SWINGS", SourceGame::RCT2, 7);
    registry
        .load(ObjectCategory::Ride, 5, entry, opaque(ObjectCategory::Ride))
        .unwrap();
    assert!(matches!(
        registry.load(ObjectCategory::Ride, 5, entry, opaque(ObjectCategory::Ride)),
        Err(ParkError::SlotOccupied { slot: 5, .. })
    ));

    let released = registry.unload(ObjectCategory::Ride, 5).unwrap();
    assert_eq!(released.category(), ObjectCategory::Ride);
    assert_eq!(registry.find_object_in_entry_group(&entry), None);
    assert!(registry.get_loaded_object_chunk(5).unwrap().is_none());
    assert!(registry.get_loaded_object_entry(5).unwrap().is_empty());

    let (category, slot) = registry
        .load_next_free(entry, opaque(ObjectCategory::Ride))
        .unwrap();
    assert_eq!((category, slot), (ObjectCategory::Ride, 0));

    registry.clear();
    assert_eq!(registry.loaded_count(), 0);
}

#[test]
fn test_typed_categories_reject_opaque_chunks() {
    let mut registry = ObjectRegistry::new();
    let lamp = ObjectEntry::named("LAMP1", ObjectCategory::PathAddition, SourceGame::RCT2, 0);
    let chunk = opaque(ObjectCategory::PathAddition);
    assert!(matches!(
        registry.load(ObjectCategory::PathAddition, 0, lamp, chunk),
        Err(ParkError::CategoryMismatch { category: ObjectCategory::PathAddition, .. })
    ));
    assert!(registry.path_addition_entry(0).is_none());
    assert_eq!(registry.loaded_count(), 0);

    // Untyped categories take opaque chunks
    let group = ObjectEntry::named("SCGPATHX", ObjectCategory::SceneryGroup, SourceGame::RCT2, 0);
    registry
        .load(ObjectCategory::SceneryGroup, 0, group, opaque(ObjectCategory::SceneryGroup))
        .unwrap();
    assert_eq!(registry.get_loaded_object_entry(699).unwrap(), &group);
}

#[test]
fn test_category_fills_up() {
    let mut registry = ObjectRegistry::new();
    let water = ObjectEntry::named("WTRCYAN", ObjectCategory::Water, SourceGame::RCT2, 0);
    registry
        .load_next_free(water, opaque(ObjectCategory::Water))
        .unwrap();

    let another = ObjectEntry::named("WTRGREEN", ObjectCategory::Water, SourceGame::RCT2, 0);
    assert!(matches!(
        registry.load_next_free(another, opaque(ObjectCategory::Water)),
        Err(ParkError::CategoryFull(ObjectCategory::Water))
    ));
}

#[test]
fn test_extract_fixed_name_buffers() {
    let entry = ride_entry("WOODCOAS", SourceGame::RCT2, 0);

    let mut small = [0xEEu8; 4];
    entry.extract_fixed_name(&mut small);
    assert_eq!(&small, b"WOO\0");

    let mut large = [0xEEu8; 12];
    entry.extract_fixed_name(&mut large);
    assert_eq!(&large[..9], b"WOODCOAS\0");
    assert_eq!(&large[9..], &[0xEE; 3]);
}

#[test]
fn test_identifier_name_format() {
    let entry = ObjectEntry::named("TARMAC", ObjectCategory::Footpath, SourceGame::RCT2, 0x1F);
    assert_eq!(entry.identifier_name(), "TARMAC  /  85  1F");
}

#[test]
fn test_descriptor_bytes_are_little_endian() {
    let bytes: [u8; OBJECT_ENTRY_SIZE] = [
        b'W', b'O', b'O', b'D', b'C', b'O', b'A', b'S', // name
        0x80, 0x00, 0x00, 0x00, // flags: ride, shipped
        0x78, 0x56, 0x34, 0x12, // checksum
    ];
    let entry = ObjectEntry::from_bytes(&bytes);
    assert_eq!(entry.category(), Some(ObjectCategory::Ride));
    assert_eq!(entry.source_game(), SourceGame::RCT2);
    assert_eq!(entry.checksum, 0x1234_5678);
    assert_eq!(entry.to_bytes(), bytes);
}

#[test]
fn test_bundled_manifest_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/objects.toml");
    let manifest = ObjectManifest::load(&path).unwrap();
    let mut registry = ObjectRegistry::new();

    let loaded = load_manifest(&mut registry, &manifest).unwrap();
    assert_eq!(loaded, manifest.len());
    assert_eq!(registry.loaded_count(), loaded);

    assert_eq!(registry.footpath_entry(0).map(|f| f.image), Some(3000));
    assert_eq!(
        registry.footpath_entry(1).map(|f| f.support_type),
        Some(SupportType::Pole)
    );
    assert_eq!(
        registry.path_addition_entry(3).map(|a| a.draw_type),
        Some(AdditionDrawType::JumpingFountains)
    );

    let globals: Vec<usize> = registry.loaded().map(|(index, _, _)| index).collect();
    let mut sorted = globals.clone();
    sorted.sort_unstable();
    assert_eq!(globals, sorted);
    assert_eq!(globals.first(), Some(&668));
}
