/*
 * diagnostics.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * DiagnosticCollector - collects render diagnostics for the caller.
 *
 * The engine has no ambient logging; everything it wants to report about
 * a render call lands here and travels back with the output string.
 */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Warning,
    Error,
}

/// A single diagnostic produced during a render call.
///
/// The tree carries no source locations (it arrives pre-parsed), so a
/// diagnostic is just a severity and a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Warning => write!(f, "Warning: {}", self.message),
            DiagnosticKind::Error => write!(f, "Error: {}", self.message),
        }
    }
}

/// Collector for diagnostic messages
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new diagnostic collector
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Add a diagnostic message
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Helper: Add a warning message
    pub fn warn(&mut self, message: impl Into<String>) {
        self.add(Diagnostic {
            kind: DiagnosticKind::Warning,
            message: message.into(),
        });
    }

    /// Helper: Add an error message
    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Diagnostic {
            kind: DiagnosticKind::Error,
            message: message.into(),
        });
    }

    /// Check if any errors were collected (warnings don't count)
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get a reference to the collected diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Render all diagnostics to text strings
    pub fn to_text(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    /// Consume the collector and return the diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector() {
        let collector = DiagnosticCollector::new();
        assert!(collector.is_empty());
        assert!(!collector.has_errors());
    }

    #[test]
    fn test_warn_helper() {
        let mut collector = DiagnosticCollector::new();
        collector.warn("Be careful");

        assert_eq!(collector.diagnostics().len(), 1);
        assert!(!collector.has_errors()); // Warnings don't count as errors
    }

    #[test]
    fn test_error_helper() {
        let mut collector = DiagnosticCollector::new();
        collector.warn("Warning");
        collector.error("Error");

        assert!(collector.has_errors());
    }

    #[test]
    fn test_to_text() {
        let mut collector = DiagnosticCollector::new();
        collector.error("Test error");
        collector.warn("Test warning");

        let messages = collector.to_text();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("Error"));
        assert!(messages[0].contains("Test error"));
        assert!(messages[1].contains("Warning"));
        assert!(messages[1].contains("Test warning"));
    }

    #[test]
    fn test_into_diagnostics() {
        let mut collector = DiagnosticCollector::new();
        collector.warn("one");
        collector.warn("two");

        let diagnostics = collector.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "one");
    }
}
