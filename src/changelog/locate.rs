/// Finds structural markers in a changelog.
///
/// The rewrite only needs two questions answered: how often a marker occurs,
/// and where the first release section starts.
pub trait SectionLocator {
    /// Number of non-overlapping occurrences of `marker` in `content`.
    fn count(&self, content: &str, marker: &str) -> usize;

    /// Byte offset of the first release header introduced by `banner`.
    fn insertion_point(&self, content: &str, banner: &str) -> Option<usize>;
}

/// Plain substring search over the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLocator;

impl SectionLocator for TextLocator {
    fn count(&self, content: &str, marker: &str) -> usize {
        content.matches(marker).count()
    }

    fn insertion_point(&self, content: &str, banner: &str) -> Option<usize> {
        content.find(banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        let content = "Release Date: TBA\nRelease Date: 2021-01-01\nRelease Date: TBA\n";
        assert_eq!(TextLocator.count(content, "Release Date: TBA"), 2);
        assert_eq!(TextLocator.count(content, "What's New"), 0);
    }

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(TextLocator.count("aaaa", "aa"), 2);
    }

    #[test]
    fn test_insertion_point_is_first_banner() {
        let content = "Intro\n\nWhat's New in x 1.1?\n\nWhat's New in x 1.0?\n";
        assert_eq!(TextLocator.insertion_point(content, "What's New"), Some(7));
        assert_eq!(TextLocator.insertion_point(content, "Missing"), None);
    }
}
