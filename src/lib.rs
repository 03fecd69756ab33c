pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FormatProfile;
pub use core::{join, join_with, FormatOptions};
pub use utils::error::{JoinError, Result};
