//! README generation
//!
//! Drives a [`MarkdownDocument`] from the project configuration: title and
//! slogan, the About/Installation/Usage sections, one quoted entry per
//! documented type or function, and the usage example.

use crate::api_item::{ApiFunction, ApiType};
use crate::markdown_document::{DocumentError, HeadingOptions, MarkdownDocument};
use crate::project_config::ProjectConfig;
use itertools::Itertools;

/// Heading level of each documented item
const ITEM_HEADING_LEVEL: usize = 3;

/// Options that override the configuration at generation time
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadmeOptions {
    /// Force numbered table of contents entries
    pub numbered_toc: bool,
}

/// Build the README document for a project
///
/// # Returns
/// * `Ok(MarkdownDocument)` - the populated document, ready to assemble or save
/// * `Err(DocumentError)` - a configured heading level is out of range
pub fn generate(
    config: &ProjectConfig,
    options: ReadmeOptions,
) -> Result<MarkdownDocument, DocumentError> {
    let readme = &config.readme;
    log::info!("Generating README for {}", config.title());

    let mut doc = MarkdownDocument::with_title(config.title())
        .numbered_toc(readme.numbered_toc || options.numbered_toc)
        .footnote_layout(readme.footnote_layout())?;

    if let Some(slogan) = &readme.slogan {
        doc.set_slogan(slogan);
    }
    for image in &readme.images {
        doc.add_image(&image.caption, &image.source);
    }

    doc.add_heading("About", 1)?;
    doc.add_paragraph(&readme.about);

    doc.add_heading("Installation", 1)?;
    doc.add_paragraph(&readme.installation);

    doc.add_heading("Usage", 1)?;
    doc.increase_toc_depth();
    add_type_list(&mut doc, &readme.types)?;
    add_function_list(&mut doc, &readme.functions)?;
    doc.decrease_toc_depth()?;

    if let Some(example) = &readme.example {
        doc.add_heading("Example", ITEM_HEADING_LEVEL)?;
        doc.quoted(|doc| {
            let code = prefix_lines(&doc.prefix(), example);
            doc.add_code_block(&code, "rust");
        });
    }

    log::debug!(
        "README has {} toc lines and {} body bytes",
        doc.toc().lines().count(),
        doc.body().len()
    );
    Ok(doc)
}

/// Heading for a documented item: registered in the toc, no blank line after
fn add_item_heading(doc: &mut MarkdownDocument, name: &str) -> Result<(), DocumentError> {
    doc.add_heading_with(
        name,
        ITEM_HEADING_LEVEL,
        HeadingOptions {
            add_toc: true,
            end: "",
        },
    )
}

/// Bold summary line followed by an empty quoted line
fn add_summary(doc: &mut MarkdownDocument, summary: &str) {
    let end = format!("\n{}\n", doc.prefix());
    doc.add_paragraph_with_end(&format!("**{}**", summary), &end);
}

fn add_type_list(doc: &mut MarkdownDocument, types: &[ApiType]) -> Result<(), DocumentError> {
    for ty in types {
        log::debug!("Documenting type {}", ty.name);
        add_item_heading(doc, &ty.name)?;
        doc.quoted(|doc| {
            if let Some(summary) = &ty.doc {
                add_summary(doc, summary);
            }
            if let Some(description) = &ty.description {
                doc.add_paragraph_with_end(description, "\n");
            }
            let code = prefix_lines(&doc.prefix(), &ty.render_outline());
            doc.add_code_block(&code, "rust");
        });
    }
    Ok(())
}

fn add_function_list(
    doc: &mut MarkdownDocument,
    functions: &[ApiFunction],
) -> Result<(), DocumentError> {
    for function in functions {
        log::debug!("Documenting function {}", function.name);
        add_item_heading(doc, &function.name)?;
        doc.quoted(|doc| {
            if let Some(summary) = &function.doc {
                add_summary(doc, summary);
            }
            let code = prefix_lines(&doc.prefix(), &function.render_outline());
            doc.add_code_block(&code, "rust");
        });
    }
    Ok(())
}

/// Prefix every line of `text` so a code block stays inside the blockquote
fn prefix_lines(prefix: &str, text: &str) -> String {
    text.trim_end()
        .lines()
        .map(|line| format!("{}{}", prefix, line))
        .join("\n")
}
