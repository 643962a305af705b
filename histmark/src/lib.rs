//! histmark - history tracking plus README and manifest generation
//!
//! [`history`] provides undo/redo state tracking. [`markdown_document`] is
//! the incremental Markdown builder the README generator in [`readme`] is
//! written against, and [`manifest`] renders the packaging manifest.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::enum_variant_names)]

pub mod api_item;
pub mod history;
pub mod manifest;
pub mod markdown_document;
pub mod project_config;
pub mod readme;
pub mod templates;
