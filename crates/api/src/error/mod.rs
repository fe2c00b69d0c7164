//! Error handling for the edkeys ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
