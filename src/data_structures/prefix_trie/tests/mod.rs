// Copyright (c) 2025 Gosh Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the prefix trie.

mod unit_tests;

use std::collections::BTreeSet;

/// Collects suggestions into a set so assertions ignore traversal order.
pub(super) fn as_set<I>(words: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}
