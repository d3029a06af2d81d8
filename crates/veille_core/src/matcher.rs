/// Case-insensitive substring matcher over a fixed keyword watchlist.
///
/// Matching is plain containment, so `ia` also hits `media`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let matcher = KeywordMatcher::new(["Ransomware", "zero trust"]);
        assert!(matcher.matches("Nouvelle faille RANSOMWARE détectée"));
        assert!(matcher.matches("Le modèle Zero Trust s'impose"));
        assert!(!matcher.matches("Recette de cuisine aucun rapport"));
    }

    #[test]
    fn test_substring_inside_word() {
        let matcher = KeywordMatcher::new(["ia"]);
        assert!(matcher.matches("Les médias en parlent"));
    }

    #[test]
    fn test_accented_keyword() {
        let matcher = KeywordMatcher::new(["cybersécurité"]);
        assert!(matcher.matches("CYBERSÉCURITÉ : les annonces du jour"));
    }

    #[test]
    fn test_empty_text_never_matches() {
        let matcher = KeywordMatcher::new(["cloud", "aws"]);
        assert!(!matcher.matches(""));
        assert!(!matcher.matches(" "));
    }

    #[test]
    fn test_empty_watchlist_never_matches() {
        let matcher = KeywordMatcher::new(Vec::<String>::new());
        assert!(!matcher.matches("cloud"));
    }
}
