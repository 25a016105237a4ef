pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::SimConfig;
pub use constants::*;
pub use error::{Error, Result};
pub use types::*;
