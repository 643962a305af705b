//! Incremental Markdown document builder
//!
//! A [`MarkdownDocument`] accumulates a body and a table of contents through a
//! linear sequence of `add_*` calls and renders the final text on demand with
//! [`MarkdownDocument::assemble`]. Headings register anchors so that the table
//! of contents can link into the body and each heading can link back to its
//! parent.
//!
//! Text inputs are used verbatim; nothing is escaped.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Deepest heading level Markdown supports
pub const MAX_HEADING_LEVEL: usize = 6;

/// Line prefix emitted once per blockquote level
const QUOTE_MARKER: &str = "> ";

/// Errors that can occur while building or saving a document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Heading level outside 1..=6
    #[error("Invalid heading level - {0} (expected 1 to 6)")]
    InvalidHeadingLevel(usize),

    /// Table of contents depth decremented at 0
    #[error("toc depth already at 0")]
    TocDepthUnderflow,

    /// Quote depth decremented at 0
    #[error("quote depth already at 0")]
    QuoteDepthUnderflow,

    /// Writing the assembled document failed
    #[error("Failed to write document to {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of [`DocumentError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted range
    InvalidArgument,
    /// The call is not valid in the document's current state
    InvalidState,
    /// Filesystem failure
    Io,
}

impl DocumentError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHeadingLevel(_) => ErrorKind::InvalidArgument,
            Self::TocDepthUnderflow | Self::QuoteDepthUnderflow => ErrorKind::InvalidState,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

/// An addressable position in the document, rendered as `mark<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Anchor(usize);

impl Anchor {
    /// Numeric identifier of the anchor
    pub fn id(self) -> usize {
        self.0
    }

    /// Inline HTML tag that places this anchor
    pub fn tag(self) -> String {
        format!("<a name=\"{}\"></a>", self)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mark{}", self.0)
    }
}

/// An image embedded below the slogan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Alt text shown inside the brackets
    pub caption: String,
    /// Path or URL of the image
    pub source: String,
}

/// How footnote definitions are rendered at the end of the document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FootnoteLayout {
    /// Definitions concatenated directly after the body, `[^1]: a.[^2]: b.`
    #[default]
    Inline,
    /// A heading followed by one definition per line
    Section {
        /// Heading text, e.g. `Notes:`
        title: String,
        /// Heading level, 1..=6
        level: usize,
    },
}

/// Per-heading rendering options for [`MarkdownDocument::add_heading_with`]
#[derive(Debug, Clone, Copy)]
pub struct HeadingOptions<'a> {
    /// Register a table of contents entry for the heading
    pub add_toc: bool,
    /// Text appended after the heading (and its anchor, if any)
    pub end: &'a str,
}

impl Default for HeadingOptions<'_> {
    fn default() -> Self {
        Self {
            add_toc: true,
            end: "\n",
        }
    }
}

/// Markdown document under construction
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    title: Option<String>,
    slogan: Option<String>,
    images: Vec<Image>,
    body: String,
    quote_depth: usize,

    footnotes: Vec<String>,
    footnote_layout: FootnoteLayout,

    numbered_toc: bool,
    toc: String,
    toc_depth: usize,
    /// Running entry counter per toc depth, created on first use
    toc_counters: BTreeMap<usize, usize>,
    /// Anchor that entries at each depth link back to
    parent_anchors: BTreeMap<usize, Anchor>,

    next_anchor: usize,
    home: Anchor,
    last_anchor: Anchor,
}

impl Default for MarkdownDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownDocument {
    /// Create an empty document without a title
    ///
    /// The home anchor (`mark0`) is allocated immediately, so the first
    /// heading receives `mark1`.
    pub fn new() -> Self {
        let home = Anchor(0);
        let mut parent_anchors = BTreeMap::new();
        parent_anchors.insert(0, home);
        parent_anchors.insert(1, home);

        Self {
            title: None,
            slogan: None,
            images: Vec::new(),
            body: String::new(),
            quote_depth: 0,
            footnotes: Vec::new(),
            footnote_layout: FootnoteLayout::default(),
            numbered_toc: false,
            toc: String::new(),
            toc_depth: 0,
            toc_counters: BTreeMap::new(),
            parent_anchors,
            next_anchor: 1,
            home,
            last_anchor: home,
        }
    }

    /// Create an empty document with the given title
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut doc = Self::new();
        doc.set_title(title);
        doc
    }

    /// Number table of contents entries with per-depth counters instead of
    /// `-` bullets
    pub fn numbered_toc(mut self, numbered: bool) -> Self {
        self.numbered_toc = numbered;
        self
    }

    /// Choose how footnote definitions are rendered
    ///
    /// # Returns
    /// * `Err(DocumentError::InvalidHeadingLevel)` - a section layout with a level outside 1..=6
    pub fn footnote_layout(mut self, layout: FootnoteLayout) -> Result<Self, DocumentError> {
        if let FootnoteLayout::Section { level, .. } = &layout {
            validate_heading_level(*level)?;
        }
        self.footnote_layout = layout;
        Ok(self)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_slogan(&mut self, slogan: impl Into<String>) {
        self.slogan = Some(slogan.into());
    }

    pub fn add_image(&mut self, caption: impl Into<String>, source: impl Into<String>) {
        self.images.push(Image {
            caption: caption.into(),
            source: source.into(),
        });
    }

    /// The anchor placed at the top of the document
    pub fn home_anchor(&self) -> Anchor {
        self.home
    }

    /// The most recently allocated heading anchor, or home if none yet
    pub fn last_anchor(&self) -> Anchor {
        self.last_anchor
    }

    pub fn toc_depth(&self) -> usize {
        self.toc_depth
    }

    pub fn quote_depth(&self) -> usize {
        self.quote_depth
    }

    pub fn footnote_count(&self) -> usize {
        self.footnotes.len()
    }

    /// Body text accumulated so far
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Table of contents accumulated so far
    pub fn toc(&self) -> &str {
        &self.toc
    }

    /// Line prefix for the current quote depth
    pub fn prefix(&self) -> String {
        QUOTE_MARKER.repeat(self.quote_depth)
    }

    fn allocate_anchor(&mut self) -> Anchor {
        let anchor = Anchor(self.next_anchor);
        self.next_anchor += 1;
        anchor
    }

    /// Nest subsequent table of contents entries one level deeper
    ///
    /// Entries at the new depth link back to the most recent anchor.
    pub fn increase_toc_depth(&mut self) {
        self.toc_depth += 1;
        self.parent_anchors.insert(self.toc_depth, self.last_anchor);
    }

    /// Return to the parent table of contents level
    pub fn decrease_toc_depth(&mut self) -> Result<(), DocumentError> {
        if self.toc_depth == 0 {
            return Err(DocumentError::TocDepthUnderflow);
        }
        self.toc_depth -= 1;
        Ok(())
    }

    /// Allocate an anchor for `title` and register it in the table of contents
    ///
    /// Appends the anchor tag and a `[^]` backlink to the parent anchor to the
    /// body, followed by a newline.
    pub fn add_toc_entry(&mut self, title: &str) -> Anchor {
        let anchor = self.allocate_anchor();
        self.last_anchor = anchor;

        let parent = self
            .parent_anchors
            .get(&self.toc_depth)
            .copied()
            .unwrap_or(self.home);
        self.body
            .push_str(&format!("{}[^](#{})\n", anchor.tag(), parent));

        let counter = self.toc_counters.entry(self.toc_depth).or_insert(0);
        let bullet = if self.numbered_toc {
            counter.to_string()
        } else {
            "-".to_string()
        };
        *counter += 1;

        self.toc.push_str(&format!(
            "{}{} [{}](#{})\n",
            "\t".repeat(self.toc_depth),
            bullet,
            title,
            anchor
        ));

        log::debug!("Registered toc entry '{}' as {}", title, anchor);
        anchor
    }

    /// Add a heading that is registered in the table of contents
    pub fn add_heading(&mut self, text: &str, level: usize) -> Result<(), DocumentError> {
        self.add_heading_with(text, level, HeadingOptions::default())
    }

    /// Add a heading with explicit options
    ///
    /// # Returns
    /// * `Err(DocumentError::InvalidHeadingLevel)` - `level` is outside 1..=6; the document is unchanged
    pub fn add_heading_with(
        &mut self,
        text: &str,
        level: usize,
        options: HeadingOptions<'_>,
    ) -> Result<(), DocumentError> {
        validate_heading_level(level)?;

        let prefix = self.prefix();
        self.body
            .push_str(&format!("{}{} {}", prefix, "#".repeat(level), text));
        if options.add_toc {
            self.add_toc_entry(text);
        }
        self.body.push_str(options.end);
        Ok(())
    }

    pub fn add_paragraph(&mut self, text: &str) {
        self.add_paragraph_with_end(text, "\n\n");
    }

    pub fn add_paragraph_with_end(&mut self, text: &str, end: &str) {
        let prefix = self.prefix();
        self.body.push_str(&format!("{}{}{}", prefix, text, end));
    }

    pub fn add_bold(&mut self, text: &str) {
        self.body.push_str(&format!("**{}**\n\n", text));
    }

    pub fn add_italic(&mut self, text: &str) {
        self.body.push_str(&format!("*{}*\n", text));
    }

    pub fn add_bold_italic(&mut self, text: &str) {
        self.body.push_str(&format!("***{}***\n", text));
    }

    pub fn add_break(&mut self) {
        self.body.push_str("<br>");
    }

    pub fn increase_quote_depth(&mut self) {
        self.quote_depth += 1;
    }

    pub fn decrease_quote_depth(&mut self) -> Result<(), DocumentError> {
        if self.quote_depth == 0 {
            return Err(DocumentError::QuoteDepthUnderflow);
        }
        self.quote_depth -= 1;
        Ok(())
    }

    /// Run `f` one quote level deeper, restoring the depth afterwards
    pub fn quoted<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.quote_depth;
        self.quote_depth += 1;
        let result = f(self);
        self.quote_depth = depth;
        result
    }

    pub fn add_blockquote(&mut self, text: &str) {
        self.add_blockquote_with_end(text, "\n\n");
    }

    fn add_blockquote_with_end(&mut self, text: &str, end: &str) {
        self.quoted(|doc| doc.add_paragraph_with_end(text, end));
    }

    /// Add several blockquote paragraphs joined by bare `>` lines
    pub fn add_multi_blockquote<S: AsRef<str>>(&mut self, texts: &[S]) {
        for (i, text) in texts.iter().enumerate() {
            self.add_blockquote_with_end(text.as_ref(), "\n");
            if i + 1 != texts.len() {
                self.body.push_str(">\n");
            }
        }
    }

    pub fn add_unordered_list<S: AsRef<str>>(&mut self, items: &[S], indent: usize) {
        let indent = "\t".repeat(indent);
        for item in items {
            self.body
                .push_str(&format!("{}- {}\n", indent, item.as_ref()));
        }
    }

    pub fn add_ordered_list<S: AsRef<str>>(&mut self, items: &[S], indent: usize) {
        let indent = "\t".repeat(indent);
        for (i, item) in items.iter().enumerate() {
            self.body
                .push_str(&format!("{}{}. {}\n", indent, i + 1, item.as_ref()));
        }
    }

    /// Add a fenced code block
    ///
    /// Both fences carry the quote prefix; `text` is used as given, so callers
    /// inside a blockquote prefix its lines themselves.
    pub fn add_code_block(&mut self, text: &str, language: &str) {
        let prefix = self.prefix();
        self.body.push_str(&format!(
            "{}```{}\n{}\n{}```\n",
            prefix, language, text, prefix
        ));
    }

    pub fn add_horizontal_rule(&mut self) {
        let prefix = self.prefix();
        self.body.push_str(&format!("{}---\n\n", prefix));
    }

    /// Add an inline link, using `url` as the text when none is given
    pub fn add_link(&mut self, url: &str, text: Option<&str>, tooltip: Option<&str>) {
        let text = text.filter(|t| !t.is_empty()).unwrap_or(url);
        match tooltip.filter(|t| !t.is_empty()) {
            Some(tooltip) => self
                .body
                .push_str(&format!("[{}]({} \"{}\")", text, url, tooltip)),
            None => self.body.push_str(&format!("[{}]({})", text, url)),
        }
    }

    /// Insert a `[^n]` reference and queue its definition
    ///
    /// # Returns
    /// * `usize` - the 1-based footnote index
    pub fn insert_footnote(&mut self, text: &str) -> usize {
        self.footnotes.push(text.to_string());
        let index = self.footnotes.len();
        self.body.push_str(&format!("[^{}]", index));
        index
    }

    /// Render the complete document
    pub fn assemble(&self) -> String {
        let mut output = String::new();

        if let Some(title) = &self.title {
            output.push_str(&format!("# {}", title));
        }
        output.push_str(&self.home.tag());
        output.push_str("\n\n");

        if let Some(slogan) = &self.slogan {
            output.push_str(&format!("***{}***\n\n", slogan));
        }
        for image in &self.images {
            output.push_str(&format!("![{}]({})\n\n", image.caption, image.source));
        }

        output.push_str("---\n\n");
        if !self.toc.is_empty() {
            output.push_str(&self.toc);
            output.push('\n');
        }
        output.push_str("---\n\n");
        output.push_str(&self.body);

        self.write_footnotes(&mut output);
        output
    }

    fn write_footnotes(&self, output: &mut String) {
        if self.footnotes.is_empty() {
            return;
        }

        match &self.footnote_layout {
            FootnoteLayout::Inline => {
                for (i, text) in self.footnotes.iter().enumerate() {
                    output.push_str(&format!("[^{}]: {}.", i + 1, text));
                }
            }
            FootnoteLayout::Section { title, level } => {
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                output.push_str(&format!("\n{} {}\n\n", "#".repeat(*level), title));
                for (i, text) in self.footnotes.iter().enumerate() {
                    output.push_str(&format!("[^{}]: {}\n", i + 1, text));
                }
            }
        }
    }

    /// Write the assembled document to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = self.assemble();
        fs::write(path, &content).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}

fn validate_heading_level(level: usize) -> Result<(), DocumentError> {
    if (1..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(DocumentError::InvalidHeadingLevel(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

    #[test]
    fn test_heading_levels_emit_matching_markers() {
        for level in 1..=MAX_HEADING_LEVEL {
            let mut doc = MarkdownDocument::new();
            doc.add_heading_with(
                "Title",
                level,
                HeadingOptions {
                    add_toc: false,
                    end: "\n",
                },
            )
            .unwrap();
            assert_eq!(doc.body(), format!("{} Title\n", "#".repeat(level)));
        }
    }

    #[test]
    fn test_invalid_heading_level_leaves_document_unchanged() {
        for level in [0, 7, 100] {
            let mut doc = MarkdownDocument::new();
            let err = doc.add_heading("Nope", level).unwrap_err();
            assert!(matches!(err, DocumentError::InvalidHeadingLevel(l) if l == level));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(doc.body().is_empty());
            assert!(doc.toc().is_empty());
            assert_eq!(doc.last_anchor(), doc.home_anchor());
        }
    }

    #[test]
    fn test_decrease_toc_depth_at_zero_fails() {
        let mut doc = MarkdownDocument::new();
        let err = doc.decrease_toc_depth().unwrap_err();
        assert!(matches!(err, DocumentError::TocDepthUnderflow));
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(doc.toc_depth(), 0);
    }

    #[test]
    fn test_decrease_toc_depth_after_increase() {
        let mut doc = MarkdownDocument::new();
        doc.increase_toc_depth();
        doc.increase_toc_depth();
        doc.decrease_toc_depth().unwrap();
        assert_eq!(doc.toc_depth(), 1);
    }

    #[test]
    fn test_heading_links_back_to_parent_anchor() {
        let mut doc = MarkdownDocument::new();
        doc.add_heading("Usage", 1).unwrap();
        doc.increase_toc_depth();
        doc.add_heading("History", 3).unwrap();
        doc.add_heading("Historic", 3).unwrap();

        assert!(doc
            .body()
            .contains("# Usage<a name=\"mark1\"></a>[^](#mark0)\n\n"));
        assert!(doc
            .body()
            .contains("### History<a name=\"mark2\"></a>[^](#mark1)\n\n"));
        assert!(doc
            .body()
            .contains("### Historic<a name=\"mark3\"></a>[^](#mark1)\n\n"));
        assert_eq!(
            doc.toc(),
            "- [Usage](#mark1)\n\t- [History](#mark2)\n\t- [Historic](#mark3)\n"
        );
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut doc = MarkdownDocument::new();
        let ids: Vec<usize> = (0..5).map(|i| doc.add_toc_entry(&i.to_string()).id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_numbered_toc_counts_per_depth() {
        let mut doc = MarkdownDocument::new().numbered_toc(true);
        doc.add_toc_entry("A");
        doc.increase_toc_depth();
        doc.add_toc_entry("B");
        doc.decrease_toc_depth().unwrap();
        doc.add_toc_entry("C");
        doc.increase_toc_depth();
        doc.add_toc_entry("D");

        assert_eq!(
            doc.toc(),
            "0 [A](#mark1)\n\t0 [B](#mark2)\n1 [C](#mark3)\n\t1 [D](#mark4)\n"
        );
    }

    #[test]
    fn test_footnotes_are_numbered_in_call_order() {
        let mut doc = MarkdownDocument::new();
        doc.add_paragraph_with_end("See", "");
        assert_eq!(doc.insert_footnote("first"), 1);
        doc.add_paragraph("and");
        assert_eq!(doc.insert_footnote("second"), 2);
        assert_eq!(doc.footnote_count(), 2);

        let out = doc.assemble();
        assert!(out.contains("See[^1]and"));
        assert!(out.contains("[^2]"));
        assert!(out.ends_with("[^1]: first.[^2]: second."));
    }

    #[test]
    fn test_footnote_section_layout() {
        let mut doc = MarkdownDocument::new()
            .footnote_layout(FootnoteLayout::Section {
                title: "Notes:".to_string(),
                level: 3,
            })
            .unwrap();
        doc.add_paragraph_with_end("Body", "");
        doc.insert_footnote("first");
        doc.insert_footnote("second");

        let out = doc.assemble();
        assert!(out.ends_with("Body[^1][^2]\n\n### Notes:\n\n[^1]: first\n[^2]: second\n"));
    }

    #[test]
    fn test_footnote_section_rejects_bad_level() {
        let result = MarkdownDocument::new().footnote_layout(FootnoteLayout::Section {
            title: "Notes:".to_string(),
            level: 0,
        });
        assert!(matches!(result, Err(DocumentError::InvalidHeadingLevel(0))));
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let mut doc = MarkdownDocument::with_title("Demo 1.0");
        doc.add_heading("About", 1).unwrap();
        doc.insert_footnote("note");
        assert_eq!(doc.assemble(), doc.assemble());
    }

    #[test]
    fn test_assemble_end_to_end() {
        let mut doc = MarkdownDocument::with_title("Demo 1.0");
        doc.add_heading("About", 1).unwrap();
        doc.add_paragraph("hello");

        let out = doc.assemble();
        assert_eq!(
            out,
            "# Demo 1.0<a name=\"mark0\"></a>\n\n\
             ---\n\n\
             - [About](#mark1)\n\n\
             ---\n\n\
             # About<a name=\"mark1\"></a>[^](#mark0)\n\n\
             hello\n\n"
        );
    }

    #[test]
    fn test_assemble_parses_as_markdown() {
        let mut doc = MarkdownDocument::with_title("Demo 1.0");
        doc.set_slogan("Tagline");
        doc.add_image("logo", "logo.png");
        doc.add_heading("About", 1).unwrap();
        doc.add_paragraph("hello");

        let out = doc.assemble();
        let h1_count = Parser::new(&out)
            .filter(|event| {
                matches!(
                    event,
                    Event::Start(Tag::Heading {
                        level: HeadingLevel::H1,
                        ..
                    })
                )
            })
            .count();
        assert_eq!(h1_count, 2);
        assert!(out.contains("***Tagline***\n\n![logo](logo.png)\n\n---"));
    }

    #[test]
    fn test_assemble_without_title_or_toc() {
        let doc = MarkdownDocument::new();
        assert_eq!(doc.assemble(), "<a name=\"mark0\"></a>\n\n---\n\n---\n\n");
    }

    #[test]
    fn test_blockquote_restores_depth() {
        let mut doc = MarkdownDocument::new();
        doc.add_blockquote("quoted");
        assert_eq!(doc.body(), "> quoted\n\n");
        assert_eq!(doc.quote_depth(), 0);
    }

    #[test]
    fn test_multi_blockquote_separators() {
        let mut doc = MarkdownDocument::new();
        doc.add_multi_blockquote(&["one", "two", "three"]);
        assert_eq!(doc.body(), "> one\n>\n> two\n>\n> three\n");
    }

    #[test]
    fn test_quoted_prefixes_nested_content() {
        let mut doc = MarkdownDocument::new();
        doc.quoted(|doc| {
            doc.add_heading_with(
                "Inner",
                2,
                HeadingOptions {
                    add_toc: false,
                    end: "\n",
                },
            )
            .unwrap();
            doc.add_blockquote("deeper");
            doc.add_horizontal_rule();
        });
        assert_eq!(doc.body(), "> ## Inner\n> > deeper\n\n> ---\n\n");
        assert_eq!(doc.quote_depth(), 0);
    }

    #[test]
    fn test_decrease_quote_depth_at_zero_fails() {
        let mut doc = MarkdownDocument::new();
        assert!(matches!(
            doc.decrease_quote_depth(),
            Err(DocumentError::QuoteDepthUnderflow)
        ));
        doc.increase_quote_depth();
        doc.decrease_quote_depth().unwrap();
        assert_eq!(doc.quote_depth(), 0);
    }

    #[test]
    fn test_lists() {
        let mut doc = MarkdownDocument::new();
        doc.add_unordered_list(&["a", "b"], 0);
        doc.add_ordered_list(&["x", "y"], 1);
        assert_eq!(doc.body(), "- a\n- b\n\t1. x\n\t2. y\n");
    }

    #[test]
    fn test_code_block_fences_carry_prefix() {
        let mut doc = MarkdownDocument::new();
        doc.increase_quote_depth();
        doc.add_code_block("> let x = 1;", "rust");
        assert_eq!(doc.body(), "> ```rust\n> let x = 1;\n> ```\n");
    }

    #[test]
    fn test_inline_formatting() {
        let mut doc = MarkdownDocument::new();
        doc.add_bold("b");
        doc.add_italic("i");
        doc.add_bold_italic("bi");
        doc.add_break();
        assert_eq!(doc.body(), "**b**\n\n*i*\n***bi***\n<br>");
    }

    #[test]
    fn test_links() {
        let mut doc = MarkdownDocument::new();
        doc.add_link("https://example.com", None, None);
        doc.add_link("https://example.com", Some("site"), Some("tip"));
        doc.add_link("https://example.com", Some(""), None);
        assert_eq!(
            doc.body(),
            "[https://example.com](https://example.com)\
             [site](https://example.com \"tip\")\
             [https://example.com](https://example.com)"
        );
    }

    #[test]
    fn test_save_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "stale").unwrap();

        let mut doc = MarkdownDocument::with_title("Demo");
        doc.add_paragraph("fresh");
        doc.save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.assemble());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("README.md");

        let err = MarkdownDocument::new().save(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("README.md"));
    }
}
