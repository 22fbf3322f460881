// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Canonicalization: strip separators, cap to the kind's length

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kind::MaskKind;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static pattern"));
static NON_BASE36: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Z]").expect("static pattern"));

/// Reduce a raw keystroke string to the characters meaningful to `kind`.
///
/// Digits only for every kind except [`MaskKind::CnpjAlphanumeric`],
/// which is uppercased first and keeps `A–Z` as well. The result is
/// truncated (never rounded, never an error) to the kind's canonical
/// cap. Total over any input string.
pub fn canonicalize(raw: &str, kind: MaskKind) -> String {
    let stripped = if kind.accepts_letters() {
        let upper = raw.to_ascii_uppercase();
        NON_BASE36.replace_all(&upper, "").into_owned()
    } else {
        NON_DIGIT.replace_all(raw, "").into_owned()
    };

    // Stripped content is pure ASCII, so byte slicing is char-safe.
    match kind.max_canonical_len() {
        Some(max) if stripped.len() > max => stripped[..max].to_string(),
        _ => stripped,
    }
}
