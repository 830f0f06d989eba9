//! Repository traits (interfaces)
//!
//! Contracts for the external capabilities the domain relies on.

mod content_oracle;

pub use content_oracle::{ContentTypeOracle, DetectionError};
