// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

fn entry(device_name: &str, file_name: &str, checksum: &str) -> FileEntry {
    FileEntry {
        device_name: device_name.into(),
        file_name: file_name.into(),
        checksum: checksum.into(),
    }
}

#[test]
fn insert_original_and_lower_case_keys() {
    let lookup: ChecksumLookup = [entry("Pixel 8", "Shiba-Beta.zip", "aa")].into_iter().collect();
    assert_eq!(2, lookup.len());
    let original = lookup.get("Shiba-Beta.zip").unwrap();
    let lower_case = lookup.get("shiba-beta.zip").unwrap();
    assert_eq!(original, lower_case);
    assert_eq!("Pixel 8", original.device_name);
    assert_eq!("aa", original.checksum);
}

#[test]
fn lower_case_file_names_are_stored_once() {
    let lookup: ChecksumLookup = [entry("Pixel 8", "shiba.zip", "aa")].into_iter().collect();
    assert_eq!(1, lookup.len());
}

#[test]
fn last_write_wins() {
    let lookup: ChecksumLookup = [
        entry("Pixel 8", "same.zip", "aa"),
        entry("Pixel 8 Pro", "same.zip", "bb"),
    ]
    .into_iter()
    .collect();
    assert_eq!(1, lookup.len());
    let info = lookup.get("same.zip").unwrap();
    assert_eq!("Pixel 8 Pro", info.device_name);
    assert_eq!("bb", info.checksum);
}

#[test]
fn find_ignores_case() {
    let lookup: ChecksumLookup = [entry("Pixel 9", "Tokay.ZIP", "cc")].into_iter().collect();
    assert_eq!("cc", lookup.find("Tokay.ZIP").unwrap().checksum);
    assert_eq!("cc", lookup.find("tokay.zip").unwrap().checksum);
    assert_eq!("cc", lookup.find("TOKAY.zip").unwrap().checksum);
    assert!(lookup.find("caiman.zip").is_none());
}

#[test]
fn resolve_unknown_file() {
    let lookup = ChecksumLookup::new();
    let info = lookup.resolve("anything.zip");
    assert_eq!(UNKNOWN_DEVICE, info.device_name);
    assert_eq!(CHECKSUM_NOT_FOUND, info.checksum);
    assert!(!info.has_checksum());
    assert_eq!(FileInfo::default(), *info);
}

#[test]
fn resolve_borrows_known_file() {
    let lookup: ChecksumLookup = [entry("Pixel 9", "tokay.zip", "cc")].into_iter().collect();
    assert!(matches!(lookup.resolve("TOKAY.ZIP"), Cow::Borrowed(_)));
    assert!(lookup.resolve("tokay.zip").has_checksum());
}

#[test]
fn serialize_as_map() {
    let lookup: ChecksumLookup = [entry("Pixel 9", "tokay.zip", "cc")].into_iter().collect();
    assert_eq!(
        r#"{"tokay.zip":{"deviceName":"Pixel 9","checksum":"cc"}}"#,
        serde_json::to_string(&lookup).unwrap()
    );
}

#[test]
fn empty_and_non_empty_lookups() {
    let mut lookup = ChecksumLookup::new();
    assert!(lookup.is_empty());
    assert_eq!(0, lookup.len());
    lookup.insert(entry("Pixel 8", "Shiba.zip", "aa"));
    assert!(!lookup.is_empty());
    assert_eq!(2, lookup.len());
    assert_eq!(2, lookup.entries().count());
}
