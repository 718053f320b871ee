/*
 * escape.rs
 * Copyright (c) 2025 Posit, PBC
 */

use once_cell::sync::Lazy;
use regex::Regex;

// Underscore joins the class so that existing underscore runs collapse
// the same way as any other separator run.
static NON_WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\W_]+").expect("static regex"));

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Escape a target name into an identifier-safe anchor.
///
/// Every maximal run of non-word characters collapses to a single
/// underscore, so "Section 1: Intro!" becomes "Section_1_Intro_" rather
/// than "Section_1__Intro_".
pub fn escape_anchor(name: &str) -> String {
    NON_WORD_RUN.replace_all(name, "_").into_owned()
}
