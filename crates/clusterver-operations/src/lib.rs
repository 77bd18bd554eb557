mod error;
mod log;
pub mod operations;
pub mod providers;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod mocks;

pub use error::{OperationError, Result};
pub use log::{ResolutionEvent, ResolutionLog};
