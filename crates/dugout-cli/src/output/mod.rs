//! Response rendering for the console.
//!
//! Handlers never write to the output stream directly; they hand records and
//! projections to a [`Renderer`], which owns the format decision.

mod render;
mod table;

pub use render::Renderer;

use clap::ValueEnum;

/// Supported response encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text tables and one-line confirmations.
    Text,
    /// One JSON document per response.
    Json,
}
