//! designkb Core Library
//!
//! Corpus loading, partition selection, tokenization and relevance ranking
//! for the designkb design knowledge search tool.

pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod search;
pub mod selector;
pub mod text;
