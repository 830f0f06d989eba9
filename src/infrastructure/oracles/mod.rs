//! Content-type oracle adapters

mod file_command;
mod signature_oracle;
pub mod signatures;

pub use file_command::FileCommandOracle;
pub use signature_oracle::{SignatureOracle, HEADER_LEN};
