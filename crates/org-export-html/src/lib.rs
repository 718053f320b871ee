/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML export engine for org document trees.
 *
 * The engine consumes a read-only tree built elsewhere (org-export-types)
 * and an immutable per-call configuration, and produces one HTML string
 * plus a list of diagnostics. It performs no parsing and no I/O of its
 * own; reading source documents and writing output belongs to callers
 * such as the org-export CLI.
 */

pub mod filter;
pub mod options;
pub mod utils;
pub mod writers;

pub use options::ExportConfig;
pub use utils::diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind};
pub use writers::html::{HtmlOutput, render, write_with_config};
