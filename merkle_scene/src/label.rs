// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node label shortening.

use std::borrow::Cow;

use crate::config::LabelConfig;

/// Text for the always-visible label of a node.
///
/// Labels longer than `max_chars` characters keep their first `keep_chars` characters
/// followed by the ellipsis marker. Counting is by `char`, so multi-byte labels are never
/// split inside a code point.
pub fn main_label<'t>(text: &'t str, config: &LabelConfig) -> Cow<'t, str> {
    if text.chars().count() <= config.max_chars {
        return Cow::Borrowed(text);
    }
    let mut short: String = text.chars().take(config.keep_chars).collect();
    short.push_str(&config.ellipsis);
    Cow::Owned(short)
}
