//! Response body compression.
//!
//! Only gzip is offered. The whole payload is in memory, so the encoder
//! writes into a `Vec` and is finished in one go.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("gzip compression failed: {0}")]
    Compression(#[from] io::Error),
}

/// Gzip-compresses `content`.
///
/// The gzip header carries no timestamp, so equal input always yields
/// equal output.
pub fn gzip(content: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let buffer = Vec::with_capacity(content.len() / 2 + 32);
    let mut encoder = GzEncoder::new(buffer, Compression::default());
    encoder.write_all(content).map_err(|err| {
        tracing::trace!("error writing gzip payload: {}", err);
        err
    })?;
    Ok(encoder.finish()?)
}
