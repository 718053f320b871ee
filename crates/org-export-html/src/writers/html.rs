/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::filter::{self, Disposition};
use crate::options::ExportConfig;
use crate::utils::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::utils::escape::{escape_anchor, escape_html};
use chrono::Local;
use once_cell::sync::Lazy;
use org_export_types::{
    Block, Comment, Document, Headline, Link, List, ListItem, ListKind, Node, ShortExample, Table,
    TableCell, TableRow, Text, TextStyle, TimeRange, Timestamp,
};
use regex::Regex;
use std::io::{self, Write};

// =============================================================================
// Context
// =============================================================================

/// Context threaded through HTML writer functions.
///
/// This struct is generic over the writer type and implements `Write`
/// itself, so `write!` and `writeln!` macros can be used directly on the
/// context.
pub struct HtmlWriterContext<'a, W: Write> {
    /// The underlying writer
    writer: W,
    /// Configuration for this export call
    config: &'a ExportConfig,
    /// Diagnostics produced during the walk
    diagnostics: DiagnosticCollector,
    /// True inside a subtree whose root matched an include tag; the
    /// include filter is inert there.
    include_satisfied: bool,
}

impl<'a, W: Write> Write for HtmlWriterContext<'a, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<'a, W: Write> HtmlWriterContext<'a, W> {
    pub fn new(writer: W, config: &'a ExportConfig) -> Self {
        Self {
            writer,
            config,
            diagnostics: DiagnosticCollector::new(),
            include_satisfied: false,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_diagnostics()
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// A link target with a URL scheme is an absolute external reference;
/// anything else names an in-document anchor.
static ABSOLUTE_TARGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+:").expect("static regex"));

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n){2,}").expect("static regex"));

/// Replace every run of two or more line breaks with the paragraph-break
/// marker. Runs on already-escaped text; escaping never introduces line
/// breaks.
fn mark_paragraph_breaks(escaped: &str) -> String {
    PARAGRAPH_BREAK.replace_all(escaped, "\n<p>\n").into_owned()
}

fn style_wrapper(style: TextStyle) -> (&'static str, &'static str) {
    match style {
        TextStyle::None => ("", ""),
        TextStyle::Bold => ("<strong>", "</strong>"),
        TextStyle::Italic => ("<em>", "</em>"),
        TextStyle::Underline => ("<u>", "</u>"),
        TextStyle::Strike => ("<del>", "</del>"),
        TextStyle::Code => ("<code>", "</code>"),
        TextStyle::Verbatim => ("<code class=\"verbatim\">", "</code>"),
    }
}

// =============================================================================
// Node renderers
// =============================================================================

/// Write a single node, dispatching on its kind.
fn write_node<W: Write>(node: &Node, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    match node {
        // A nested document node contributes its children only; the
        // envelope belongs to the assembler.
        Node::Document(document) => write_nodes(&document.children, ctx)?,
        Node::Headline(headline) => write_headline(headline, ctx)?,
        Node::Text(text) => write_text(text, ctx)?,
        Node::Link(link) => write_link(link, ctx)?,
        Node::Target(target) => {
            write!(ctx, "<a name=\"{}\"></a>", escape_anchor(&target.name))?;
        }
        Node::List(list) => write_list(list, ctx)?,
        Node::ListItem(item) => write_list_item(item, ctx)?,
        Node::Table(table) => write_table(table, ctx)?,
        Node::TableRow(row) => write_table_row(row, ctx)?,
        Node::TableCell(cell) => write_table_cell(cell, ctx)?,
        Node::Block(block) => write_block(block, ctx)?,
        Node::ShortExample(example) => write_short_example(example, ctx)?,
        Node::Comment(comment) => write_comment(comment, ctx)?,
        Node::Timestamp(timestamp) => write_timestamp(timestamp, ctx)?,
        Node::TimeRange(range) => write_time_range(range, ctx)?,
        // Not representable in the output format; deliberately empty
        // rather than unhandled.
        Node::Drawer(_)
        | Node::Footnote(_)
        | Node::RadioTarget(_)
        | Node::Setting(_)
        | Node::TableVLine => {}
        Node::Custom(custom) => {
            ctx.diagnostics.warn(format!(
                "no HTML renderer for node kind `{}`; rendering its children only",
                custom.kind
            ));
            write_nodes(&custom.children, ctx)?;
        }
    }
    Ok(())
}

/// Write a sequence of nodes
fn write_nodes<W: Write>(nodes: &[Node], ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    for node in nodes {
        write_node(node, ctx)?;
    }
    Ok(())
}

/// Write a headline, consulting the tag filter.
fn write_headline<W: Write>(
    headline: &Headline,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    let config = ctx.config;
    match filter::classify(headline, config, ctx.include_satisfied) {
        Disposition::Skip => Ok(()),
        Disposition::Full { satisfies_include } => {
            write_heading(headline, ctx)?;
            let was_satisfied = ctx.include_satisfied;
            ctx.include_satisfied = was_satisfied || satisfies_include;
            write_nodes(&headline.children, ctx)?;
            ctx.include_satisfied = was_satisfied;
            Ok(())
        }
        Disposition::Skeleton => {
            // Title only; the body is replaced by the direct headline
            // children whose own subtree contains a selected tag, each
            // re-evaluated under the same rules.
            write_heading(headline, ctx)?;
            if let Some(include) = config.include_tags() {
                for child in &headline.children {
                    if let Node::Headline(child_headline) = child {
                        if filter::headline_selects(child_headline, include) {
                            write_headline(child_headline, ctx)?;
                        }
                    }
                }
            }
            Ok(())
        }
    }
}

/// Write the heading element itself, without the body.
fn write_heading<W: Write>(
    headline: &Headline,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    write!(ctx, "<h{}>", headline.level)?;
    write_node(&headline.title, ctx)?;
    writeln!(ctx, "</h{}>", headline.level)
}

/// Write styled text: wrapper open, escaped text with paragraph-break
/// markers, nested inline children, wrapper close.
fn write_text<W: Write>(text: &Text, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    let (open, close) = style_wrapper(text.style);
    write!(ctx, "{}", open)?;
    write!(ctx, "{}", mark_paragraph_breaks(&escape_html(&text.text)))?;
    write_nodes(&text.children, ctx)?;
    write!(ctx, "{}", close)
}

fn write_link<W: Write>(link: &Link, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    if ABSOLUTE_TARGET.is_match(&link.target) {
        write!(ctx, "<a href=\"{}\">", link.target)?;
    } else {
        write!(ctx, "<a href=\"#{}\">", escape_anchor(&link.target))?;
    }
    match &link.description {
        Some(description) => write_node(description, ctx)?,
        // The raw target string, not entity-escaped: legacy behavior
        // callers rely on.
        None => write!(ctx, "{}", link.target)?,
    }
    write!(ctx, "</a>")
}

fn write_list<W: Write>(list: &List, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    let (open, close) = match list.kind {
        ListKind::Description => ("<dl>", "</dl>"),
        ListKind::Ordered => ("<ol>", "</ol>"),
        ListKind::Unordered => ("<ul>", "</ul>"),
    };
    writeln!(ctx, "{}", open)?;
    write_nodes(&list.children, ctx)?;
    writeln!(ctx, "{}", close)
}

fn write_list_item<W: Write>(item: &ListItem, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    match &item.term {
        Some(term) => {
            write!(ctx, "<dt>")?;
            write_check_state(item, ctx)?;
            write_node(term, ctx)?;
            writeln!(ctx, "</dt>")?;
            write!(ctx, "<dd>")?;
            write_nodes(&item.children, ctx)?;
            writeln!(ctx, "</dd>")
        }
        None => {
            write!(ctx, "<li>")?;
            write_check_state(item, ctx)?;
            write_nodes(&item.children, ctx)?;
            writeln!(ctx, "</li>")
        }
    }
}

fn write_check_state<W: Write>(
    item: &ListItem,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    if let Some(state) = &item.check_state {
        write!(ctx, "<strong>[{}]</strong> ", escape_html(state))?;
    }
    Ok(())
}

fn write_table<W: Write>(table: &Table, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    writeln!(ctx, "<table border=\"1\">")?;
    write_nodes(&table.children, ctx)?;
    writeln!(ctx, "</table>")
}

fn write_table_row<W: Write>(
    row: &TableRow,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    write!(ctx, "<tr>")?;
    write_nodes(&row.children, ctx)?;
    writeln!(ctx, "</tr>")
}

fn write_table_cell<W: Write>(
    cell: &TableCell,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    write!(ctx, "<td>")?;
    write_nodes(&cell.children, ctx)?;
    write!(ctx, "</td>")
}

/// Named blocks keep their content verbatim; no inline parsing.
fn write_block<W: Write>(block: &Block, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    writeln!(
        ctx,
        "<pre class=\"{}\">{}</pre>",
        escape_html(&block.name.to_lowercase()),
        escape_html(&block.raw_content)
    )
}

fn write_short_example<W: Write>(
    example: &ShortExample,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    writeln!(
        ctx,
        "<pre class=\"example\">{}</pre>",
        escape_html(&example.example)
    )
}

fn write_comment<W: Write>(comment: &Comment, ctx: &mut HtmlWriterContext<'_, W>) -> io::Result<()> {
    writeln!(ctx, "<!-- {} -->", escape_html(&comment.content))
}

fn write_timestamp<W: Write>(
    timestamp: &Timestamp,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    write!(
        ctx,
        "<span class=\"timestamp\">{}</span>",
        escape_html(&timestamp.value)
    )
}

fn write_time_range<W: Write>(
    range: &TimeRange,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    write!(
        ctx,
        "<span class=\"timestamp\">{}</span>",
        escape_html(&range.value)
    )
}

// =============================================================================
// Document assembler
// =============================================================================

/// Write a whole document: the dispatched body, wrapped in the document
/// envelope unless the configuration asks for naked output.
pub fn write_document<W: Write>(
    document: &Document,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> io::Result<()> {
    if ctx.config.naked {
        return write_nodes(&document.children, ctx);
    }

    let config = ctx.config;
    writeln!(ctx, "<!DOCTYPE html>")?;
    writeln!(ctx, "<html>")?;
    writeln!(ctx, "<head>")?;
    let title = config.title.as_deref().unwrap_or("Untitled");
    writeln!(ctx, "<title>{}</title>", escape_html(title))?;
    if let Some(url) = &config.stylesheet_url {
        writeln!(
            ctx,
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\" />",
            escape_html(url)
        )?;
    }
    writeln!(
        ctx,
        "<!-- Generated by org-export at {} -->",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(ctx, "</head>")?;
    writeln!(ctx, "<body>")?;
    write_nodes(&document.children, ctx)?;
    writeln!(ctx, "</body>")?;
    writeln!(ctx, "</html>")
}

// =============================================================================
// Public API
// =============================================================================

/// Write a document to HTML with configuration, returning the collected
/// diagnostics.
pub fn write_with_config<W: Write>(
    document: &Document,
    writer: W,
    config: &ExportConfig,
) -> io::Result<Vec<Diagnostic>> {
    let mut ctx = HtmlWriterContext::new(writer, config);
    write_document(document, &mut ctx)?;
    Ok(ctx.into_diagnostics())
}

/// The result of an in-memory render: the HTML string and whatever the
/// walk had to report.
#[derive(Debug, Clone)]
pub struct HtmlOutput {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Render a document to an in-memory HTML string.
pub fn render(document: &Document, config: &ExportConfig) -> io::Result<HtmlOutput> {
    let mut buf = Vec::new();
    let diagnostics = write_with_config(document, &mut buf, config)?;
    let html =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(HtmlOutput { html, diagnostics })
}
