pub mod joiner;

pub use crate::utils::error::Result;
pub use joiner::{join, join_with, FormatOptions};
