//! Types downstream embedders interact with.

pub mod errors;
pub mod events;

pub use errors::{Result, RuntimeError};
pub use events::ActionEvent;
