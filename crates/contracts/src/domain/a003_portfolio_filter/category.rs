/// Parsed `data-cats` list: trimmed, lowercased, empties dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet(Vec<String>);

impl CategorySet {
    /// Parse a comma-separated list. A missing attribute is an empty set.
    pub fn parse(raw: Option<&str>) -> Self {
        let tokens = raw
            .unwrap_or_default()
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();
        Self(tokens)
    }

    /// Exact membership. `token` is expected to be lowercase already.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let set = CategorySet::parse(Some(" Photo, EVENT ,,  ,video"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["photo", "event", "video"]);
        assert!(set.contains("event"));
        assert!(!set.contains("Event"));
    }

    #[test]
    fn test_missing_or_blank_is_empty() {
        assert!(CategorySet::parse(None).is_empty());
        assert!(CategorySet::parse(Some("")).is_empty());
        assert!(CategorySet::parse(Some(" , ,")).is_empty());
        assert!(!CategorySet::parse(None).contains(""));
    }
}
