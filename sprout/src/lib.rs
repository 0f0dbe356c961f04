pub mod error;
pub mod license;
pub mod output;
pub mod process;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod tools;
pub mod validation;

pub use error::{Result, ScaffoldError};
