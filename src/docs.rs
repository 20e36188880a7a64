// SPDX-FileCopyrightText: The release-checksums authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation of the recognized release note formats

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret code blocks, e.g. release notes.
#![doc = include_str!("../README.md")]
