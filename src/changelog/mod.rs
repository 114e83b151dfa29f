//! Changelog rewriting - pure text transformation independent of file I/O

pub mod format;
pub mod locate;
pub mod transform;

pub use format::ChangelogFormat;
pub use locate::{SectionLocator, TextLocator};
pub use transform::{ChangelogTransformer, Release};
