pub mod error;
pub mod schedule;
pub mod types;

#[cfg(feature = "origination")]
pub mod model;

#[cfg(feature = "origination")]
pub mod store;

#[cfg(feature = "origination")]
pub mod validation;

pub use error::LendWiseError;
pub use types::*;

/// Standard result type for all lendwise operations
pub type LendWiseResult<T> = Result<T, LendWiseError>;
