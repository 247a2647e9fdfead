//! CPI backend handle construction
//!
//! A CPI is an external executable; this module only constructs the handle
//! that binds a director to one (executable path, director uuid, properties).
//! Invoking the executable and managing its lifetime are host concerns.

mod error;
mod external;
mod mock;
mod traits;

pub use error::{CpiError, CpiResult};
pub use external::{ExternalCpi, ExternalCpiFactory};
pub use mock::{MockCpiFactory, RecordedConstruction};
pub use traits::CpiFactory;
