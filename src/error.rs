//! Error types for the temporal resolve core.
//!
//! This module provides a unified error type [`TaaError`] and a convenient [`Result`] alias.

use std::fmt;

/// Main error type for the resolve core.
///
/// The only runtime failure the core can hit is the host refusing to hand out
/// a history or scratch buffer; everything else is pure arithmetic or an
/// ordinary state transition.
#[derive(Debug)]
pub enum TaaError {
    /// The host could not allocate a 2D buffer of the requested dimensions.
    ResourceExhaustion(String),
}

impl fmt::Display for TaaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ResourceExhaustion(msg) => write!(f, "Resource exhaustion: {msg}"),
        }
    }
}

impl std::error::Error for TaaError {}

/// Convenient Result type alias for resolve operations.
pub type Result<T> = std::result::Result<T, TaaError>;
