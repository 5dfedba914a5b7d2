//! Source adapters: typed clients for the eight upstream record services
//! plus the per-patient fan-out that joins them into a normalized feed.

mod client;
mod fetch;

pub use client::*;
pub use fetch::*;

use thiserror::Error;

/// Failure taxonomy at the adapter boundary. Every variant degrades to an
/// empty contribution during assembly; none of them aborts the fan-out.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}")]
    Status { status: u16 },

    #[error("unexpected payload: {0}")]
    Malformed(String),
}
