//! Keyword-indexed FAQ answers.

/// One keyword and the canned answer it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub keyword: String,
    pub answer: String,
}

/// Read-only FAQ table, scanned in declaration order.
///
/// Keywords are stored lowercased. Lookups return the answer of the first
/// keyword contained in the question; later matches are ignored even when
/// they are more specific.
#[derive(Debug, Clone, Default)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    pub fn new<K, A>(entries: impl IntoIterator<Item = (K, A)>) -> Self
    where
        K: Into<String>,
        A: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(keyword, answer)| FaqEntry {
                keyword: keyword.into().to_lowercase(),
                answer: answer.into(),
            })
            .filter(|entry| !entry.keyword.is_empty())
            .collect();

        Self { entries }
    }

    /// The built-in RCPIT answers.
    pub fn rcpit() -> Self {
        Self::new([
            (
                "courses",
                "RCPIT offers B.Tech, M.Tech, and Ph.D. programs in various streams.",
            ),
            (
                "fees",
                "The annual fees for Computer Engineering is approx ₹95,000.",
            ),
            (
                "hostel",
                "Yes, RCPIT provides hostel facilities for both boys and girls.",
            ),
            (
                "placement",
                "The Training & Placement Cell at RCPIT has tie-ups with leading companies.",
            ),
        ])
    }

    /// Find the answer for a question that is already lowercased.
    pub fn lookup(&self, normalized_question: &str) -> Option<&FaqEntry> {
        self.entries
            .iter()
            .find(|entry| normalized_question.contains(entry.keyword.as_str()))
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_keyword_as_substring() {
        let table = FaqTable::rcpit();
        let entry = table.lookup("what are the hostel rules?").unwrap();
        assert_eq!(entry.keyword, "hostel");
    }

    #[test]
    fn no_match_returns_none() {
        let table = FaqTable::rcpit();
        assert!(table.lookup("hello").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn first_declared_keyword_wins() {
        let table = FaqTable::rcpit();
        let entry = table.lookup("placement fees and courses").unwrap();
        assert_eq!(entry.keyword, "courses");
    }

    #[test]
    fn keywords_are_lowercased_on_construction() {
        let table = FaqTable::new([("Library", "Open 9 to 5."), ("", "ignored")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].keyword, "library");
        assert!(table.lookup("where is the library").is_some());
    }
}
