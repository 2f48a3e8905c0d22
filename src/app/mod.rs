pub mod context;
pub mod error;
pub mod loader;

pub use context::AppContext;
pub use error::{ErrorKind, GnError, Result};
