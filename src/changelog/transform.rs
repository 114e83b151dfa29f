//! Release rewrite of a changelog document
//!
//! Given the changelog text and the version being released, the transformer:
//! - dates the pending section (`Release Date: TBA` becomes today's date)
//! - inserts a fresh pending section for the next version above it
//!
//! Every precondition is checked before the text is touched, so a rejected
//! document never yields partial output.

use chrono::NaiveDate;

use super::format::ChangelogFormat;
use super::locate::{SectionLocator, TextLocator};
use crate::error::{BumpChangelogError, Result};
use crate::version::{next_version, VersionType};

/// Number of newlines between the new pending section and the released one.
const SECTION_GAP: usize = 4;

/// Outcome of a successful rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    /// The rewritten changelog
    pub content: String,
    /// Version of the newly inserted pending section
    pub next_version: String,
    /// Line that replaced the pending date sentinel
    pub release_date_line: String,
}

/// Rewrites a changelog for a release.
#[derive(Debug, Clone)]
pub struct ChangelogTransformer<L = TextLocator> {
    format: ChangelogFormat,
    release_date: NaiveDate,
    bump: VersionType,
    locator: L,
}

impl ChangelogTransformer<TextLocator> {
    /// Create a transformer that dates releases with `release_date` and
    /// opens the next section at the following patch version.
    pub fn new(format: ChangelogFormat, release_date: NaiveDate) -> Self {
        ChangelogTransformer {
            format,
            release_date,
            bump: VersionType::Patch,
            locator: TextLocator,
        }
    }
}

impl<L: SectionLocator> ChangelogTransformer<L> {
    /// Select which component the next section's version increments.
    pub fn with_bump(mut self, bump: VersionType) -> Self {
        self.bump = bump;
        self
    }

    /// Swap the strategy used to find sections in the document.
    pub fn with_locator<M: SectionLocator>(self, locator: M) -> ChangelogTransformer<M> {
        ChangelogTransformer {
            format: self.format,
            release_date: self.release_date,
            bump: self.bump,
            locator,
        }
    }

    /// Produce the released changelog for `version`.
    ///
    /// See [`ChangelogTransformer::release`] for the failure cases.
    pub fn transform(&self, content: &str, version: &str) -> Result<String> {
        self.release(content, version).map(|release| release.content)
    }

    /// Produce the released changelog for `version`, along with the version
    /// and date line written into it.
    ///
    /// # Errors
    /// * `MultiplePendingReleases` - the pending date sentinel is not present exactly once
    /// * `MissingVersionSection` - no single header exists for `version`
    /// * `DuplicateNextSection` - a header for the next version already exists
    /// * `PendingSectionOutOfOrder` - the pending date sits above the first header
    /// * `VersionFormat` / `ComponentIndex` - `version` cannot be bumped
    /// * `Config` - the markers or date format are unusable
    pub fn release(&self, content: &str, version: &str) -> Result<Release> {
        self.format.validate()?;

        let next = next_version(version, self.bump)?;
        let current_header = self.format.header(version);
        let next_header = self.format.header(&next);
        let pending = self.format.pending_date.as_str();

        let pending_count = self.locator.count(content, pending);
        if pending_count != 1 {
            return Err(BumpChangelogError::MultiplePendingReleases {
                count: pending_count,
            });
        }
        if self.locator.count(content, &current_header) != 1 {
            return Err(BumpChangelogError::MissingVersionSection {
                version: version.to_string(),
            });
        }
        if self.locator.count(content, &next_header) != 0 {
            return Err(BumpChangelogError::DuplicateNextSection { version: next });
        }

        // current_header holds the banner, so a banner is always found here
        let banner = self.format.banner.as_str();
        let insertion = self.locator.insertion_point(content, banner).ok_or_else(|| {
            BumpChangelogError::MissingVersionSection {
                version: version.to_string(),
            }
        })?;
        let pending_at = self
            .locator
            .insertion_point(content, pending)
            .ok_or(BumpChangelogError::MultiplePendingReleases { count: 0 })?;
        if pending_at < insertion {
            return Err(BumpChangelogError::PendingSectionOutOfOrder);
        }

        let release_date_line = self.format.release_date_line(self.release_date)?;
        let released = content.replace(pending, &release_date_line);
        let split = self
            .locator
            .insertion_point(&released, banner)
            .ok_or(BumpChangelogError::PendingSectionOutOfOrder)?;
        let (head, tail) = released.split_at(split);

        let mut output = String::with_capacity(released.len() + 2 * next_header.len() + 32);
        output.push_str(head);
        output.push_str(&next_header);
        output.push('\n');
        output.push_str(&ChangelogFormat::underline(&next_header));
        output.push('\n');
        output.push_str(pending);
        output.push_str(&"\n".repeat(SECTION_GAP));
        output.push_str(tail);

        Ok(Release {
            content: output,
            next_version: next,
            release_date_line,
        })
    }
}
