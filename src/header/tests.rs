// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

const TWO_DEVICES: &str = "Intro text\nPixel 8 (shiba)\nFile: a.zip\n\n## Pixel 8 Pro (husky)  \nFile: b.zip\n";

#[test]
fn find_headers_in_document_order() {
    let headers = find_headers(TWO_DEVICES);
    assert_eq!(2, headers.len());
    assert_eq!("Pixel 8", headers[0].raw_label);
    assert_eq!("shiba", headers[0].codename);
    assert_eq!(TWO_DEVICES.find("Pixel 8 (").unwrap(), headers[0].offset);
    assert_eq!("## Pixel 8 Pro", headers[1].raw_label);
    assert_eq!("husky", headers[1].codename);
    assert_eq!("Pixel 8 Pro", headers[1].device_name());
}

#[test]
fn find_headers_with_crlf_line_breaks() {
    let headers = find_headers("Pixel 9 (tokay)\r\nFile: c.zip\r\n");
    assert_eq!(1, headers.len());
    assert_eq!("Pixel 9", headers[0].raw_label);
    assert_eq!("tokay", headers[0].codename);
}

#[test]
fn parentheses_must_end_the_line() {
    assert!(find_headers("Pixel 8 (shiba) is supported\n").is_empty());
    assert!(find_headers("no headers at all").is_empty());
    assert!(find_headers("").is_empty());
}

#[test]
fn segment_without_headers_yields_implicit_chunk() {
    let body = "device-update.img\n";
    let chunks = segment(body, &find_headers(body));
    assert_eq!(1, chunks.len());
    assert!(chunks[0].header.is_none());
    assert_eq!(body, chunks[0].text);
    assert_eq!(UNKNOWN_DEVICE, chunks[0].device_name());
}

#[test]
fn segment_spans_from_header_to_next_header() {
    let chunks = segment(TWO_DEVICES, &find_headers(TWO_DEVICES));
    assert_eq!(2, chunks.len());
    assert_eq!("Pixel 8 (shiba)\nFile: a.zip\n\n", chunks[0].text);
    assert_eq!("## Pixel 8 Pro (husky)  \nFile: b.zip\n", chunks[1].text);
    assert_eq!("Pixel 8", chunks[0].device_name());
    assert_eq!("Pixel 8 Pro", chunks[1].device_name());
}
