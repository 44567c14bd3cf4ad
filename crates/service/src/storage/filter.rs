/// Tokens of a comma-separated filter such as `available,pending`.
///
/// Tokens are compared verbatim: no trimming and no case folding. Empty tokens
/// (from `""`, `",,"` or a trailing comma) are dropped, so an empty filter matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTokens {
    tokens: Vec<String>,
}

impl FilterTokens {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Exact match against any token.
    pub fn matches(&self, value: &str) -> bool {
        self.tokens.iter().any(|t| t == value)
    }

    /// True when at least one of `values` equals some token.
    pub fn matches_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        values.into_iter().any(|v| self.matches(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_on_commas() {
        let f = FilterTokens::parse("available,pending");
        assert_eq!(f.tokens(), ["available".to_string(), "pending".to_string()]);
        assert!(f.matches("pending"));
        assert!(!f.matches("sold"));
    }

    #[test]
    fn empty_and_blank_segments_are_dropped() {
        assert!(FilterTokens::parse("").is_empty());
        assert!(FilterTokens::parse(",,,").is_empty());
        assert_eq!(FilterTokens::parse("sold,").tokens().len(), 1);
    }

    #[test]
    fn no_normalization() {
        let f = FilterTokens::parse("Available, pending");
        assert!(!f.matches("available"));
        assert!(!f.matches("pending"));
        assert!(f.matches(" pending"));
    }

    #[test]
    fn matches_any_is_containment() {
        let f = FilterTokens::parse("tag1,tag2");
        let tags = vec!["tag3".to_string(), "tag2".to_string()];
        assert!(f.matches_any(&tags));
        let other = vec!["tag3".to_string()];
        assert!(!f.matches_any(&other));
        assert!(!f.matches_any(&Vec::<String>::new()));
    }

    proptest! {
        #[test]
        fn every_listed_token_matches(tokens in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
            let f = FilterTokens::parse(&tokens.join(","));
            for t in &tokens {
                prop_assert!(f.matches(t));
            }
        }

        #[test]
        fn tokens_never_contain_commas_or_empties(raw in "[a-z,]{0,24}") {
            let f = FilterTokens::parse(&raw);
            for t in f.tokens() {
                prop_assert!(!t.is_empty());
                prop_assert!(!t.contains(','));
            }
        }
    }
}
