pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod notice;
pub mod ui;
pub mod version;

pub use error::{BumpChangelogError, Result};
