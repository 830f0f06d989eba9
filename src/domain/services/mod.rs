//! Domain services
//!
//! Pure logic operating on domain entities.

mod classifier;
mod signature_registry;

pub use classifier::{classify, file_extension, normalize_extension};
pub use signature_registry::SignatureRegistry;
