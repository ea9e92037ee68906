//! Classification tag parsing and rendering

/// Ordered set of classification tags attached to submissions
///
/// Each raw argument may itself be a comma-separated list. Sub-tokens are
/// trimmed and empty ones dropped; survivors keep their first-seen order
/// and are not deduplicated, so the rendered header matches what the
/// caller spelled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw tag arguments into a tag set
    ///
    /// Garbage input (empty strings, whitespace, stray commas) never
    /// fails; it just yields an empty set.
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Vec::new();
        for raw_tag in raw {
            for sub_tag in raw_tag.as_ref().split(',') {
                let sub_tag = sub_tag.trim();
                if !sub_tag.is_empty() {
                    tags.push(sub_tag.to_string());
                }
            }
        }
        Self { tags }
    }

    /// True when no tags are set
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Parsed tags in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Render the tag header value
    ///
    /// `None` when the set is empty; the service treats a missing header
    /// as "no tags", which is not the same as an empty header value.
    pub fn header(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.join(","))
        }
    }
}
