// Public modules
pub mod batch;
pub mod config;
pub mod defaults;
pub mod error;
pub mod paths;
pub mod slug;
pub mod slugify;

// Re-export common types for convenience
pub use batch::{slugify_batch, BatchItem, BatchItemError, BatchOutcome, BatchSummary};
pub use error::{Error, ErrorCode, Result};
pub use slug::Slug;
pub use slugify::{slugify, SlugOptions, Slugifier, UnicodePolicy};
