//! Shared data model, error taxonomy and file persistence for the postdigest
//! pipeline.

pub mod error;
pub mod persist;
pub mod post;
pub mod summary;
pub mod words;

pub use error::{DigestError, Result};
pub use post::{Columns, Dataset, Post};
pub use summary::{ParseSummaryError, Summary};
