//! Keyword filter for task listings.

use super::Task;

/// Case-insensitive substring filter over task titles and descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskKeyword {
    raw: String,
    folded: String,
}

impl TaskKeyword {
    /// Parses a keyword from a query value.
    ///
    /// Blank input means "no filter" and yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_owned(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// Returns the keyword as entered (trimmed).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` when the title or description contains the keyword,
    /// ignoring case.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let in_title = task.title().as_str().to_lowercase().contains(&self.folded);
        in_title
            || task
                .description()
                .is_some_and(|text| text.to_lowercase().contains(&self.folded))
    }

    /// Returns a `LIKE` pattern matching the keyword anywhere, with `%`, `_`
    /// and `\` escaped so they match literally.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.raw.len() + 2);
        pattern.push('%');
        for ch in self.raw.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}
