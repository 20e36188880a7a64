// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

fn hex(digit: char) -> String {
    std::iter::repeat_n(digit, SHA256_HEX_LEN).collect()
}

#[test]
fn window_is_clamped_to_bounds() {
    let lines: Vec<&str> = (0..20).map(|_| "").collect();
    assert_eq!(5, window(&lines, 0).len());
    assert_eq!(9, window(&lines, 10).len());
    assert_eq!(5, window(&lines, 19).len());
    assert_eq!(1, window(&lines[..1], 0).len());
    assert!(window(&[], 3).is_empty());
}

#[test]
fn window_index_beyond_the_last_line() {
    let lines = ["a", "b", "c"];
    assert_eq!(["c"].as_slice(), window(&lines, 6));
    assert!(window(&lines, 7).is_empty());
}

#[test]
fn prefer_hash_on_keyword_line() {
    let commit = hex('c');
    let sha = hex('a');
    let lines = [
        format!("Commit: {commit}"),
        "File name: shiba.zip".to_owned(),
        format!("SHA-256: {sha}"),
    ];
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    assert_eq!(Some(sha.as_str()), locate(&lines, 1));
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let sha = hex('d');
    for label in ["sha256sum", "Sha256", "SHA-256", "File hash", "filehash"] {
        let other = hex('e');
        let lines = [
            other.clone(),
            "husky.zip".to_owned(),
            format!("{label}: {sha}"),
        ];
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        assert_eq!(Some(sha.as_str()), locate(&lines, 1), "{label}");
    }
}

#[test]
fn fall_back_to_any_hash_in_window() {
    let sha = hex('b');
    let lines = ["husky-beta.zip".to_owned(), format!("Hash: {sha}")];
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    assert_eq!(Some(sha.as_str()), locate(&lines, 0));
}

#[test]
fn ignore_hashes_outside_of_window() {
    let sha = hex('f');
    let hash_line = format!("sha256: {sha}");
    let mut lines = vec!["file.zip"];
    lines.extend(std::iter::repeat_n("", WINDOW_RADIUS));
    lines.push(&hash_line);
    assert_eq!(None, locate(&lines, 0));
    assert_eq!(Some(sha.as_str()), locate(&lines, 1));
}

#[test]
fn short_hex_strings_are_not_checksums() {
    let short = &hex('a')[..SHA256_HEX_LEN - 1];
    let line = format!("sha256: {short}");
    assert_eq!(None, locate(&[line.as_str()], 0));
}

#[test]
fn longer_hex_runs_yield_their_first_64_digits() {
    let long = format!("{}{}", hex('a'), "bb");
    let line = format!("sha512: {long}");
    assert_eq!(Some(hex('a').as_str()), locate(&[line.as_str()], 0));
}
