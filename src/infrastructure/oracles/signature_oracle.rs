//! Built-in signature oracle
//!
//! Identifies content in-process from the first bytes of a file, without
//! spawning a helper program.

use super::signatures::all_signatures;
use crate::domain::entities::{DetectionResult, FileSignature};
use crate::domain::repositories::{ContentTypeOracle, DetectionError};
use crate::domain::services::SignatureRegistry;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected per file
pub const HEADER_LEN: usize = 512;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const HTML_MARKERS: [&[u8]; 5] = [b"<!doctype html", b"<html", b"<head", b"<body", b"<title"];

/// Oracle matching magic bytes against a [`SignatureRegistry`]
///
/// Falls back to `text/html`, `text/plain` or `application/octet-stream`
/// when no signature matches.
#[derive(Debug)]
pub struct SignatureOracle {
    registry: SignatureRegistry,
}

impl SignatureOracle {
    /// Creates an oracle with the default signature set
    pub fn new() -> Self {
        Self::with_signatures(all_signatures())
    }

    /// Creates an oracle with a custom signature set
    pub fn with_signatures(signatures: impl IntoIterator<Item = FileSignature>) -> Self {
        Self {
            registry: SignatureRegistry::with_signatures(signatures),
        }
    }

    /// Identifies a file from its leading bytes
    pub fn identify(&self, header: &[u8]) -> DetectionResult {
        if header.is_empty() {
            return DetectionResult::Empty;
        }
        if let Some(sig) = self.registry.identify(header) {
            return DetectionResult::Mime(sig.mime().to_string());
        }
        let mime = if looks_like_html(header) {
            "text/html"
        } else if looks_like_text(header) {
            "text/plain"
        } else {
            "application/octet-stream"
        };
        DetectionResult::Mime(mime.to_string())
    }
}

impl Default for SignatureOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentTypeOracle for SignatureOracle {
    fn detect(&self, path: &Path) -> Result<DetectionResult, DetectionError> {
        let mut header = Vec::with_capacity(HEADER_LEN);
        File::open(path)?
            .take(HEADER_LEN as u64)
            .read_to_end(&mut header)?;
        Ok(self.identify(&header))
    }

    fn name(&self) -> &'static str {
        "built-in signatures"
    }
}

fn looks_like_html(header: &[u8]) -> bool {
    let body = header.strip_prefix(UTF8_BOM).unwrap_or(header);
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    let body = &body[start..];

    HTML_MARKERS.iter().any(|marker| {
        body.get(..marker.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(marker))
    })
}

fn looks_like_text(header: &[u8]) -> bool {
    let valid = match std::str::from_utf8(header) {
        Ok(_) => header,
        // A multi-byte character cut off by the header limit is fine
        Err(e) if e.error_len().is_none() => &header[..e.valid_up_to()],
        Err(_) => return false,
    };
    valid
        .iter()
        .all(|&b| b >= 0x20 || matches!(b, b'\t' | b'\n' | b'\r' | 0x0C | 0x1B))
        && !valid.contains(&0x7F)
}
