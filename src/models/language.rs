use serde::{Deserialize, Serialize};

/// Script a post is written in.
///
/// The API stores this as a free-form tag; anything it sends that is not
/// `devanagari` is shown as English.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Devanagari,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Devanagari];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Devanagari => "devanagari",
        }
    }

    /// Label shown on badges and filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Devanagari => "देवनागरी",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Self::English),
            "devanagari" => Ok(Self::Devanagari),
            _ => Err(format!("invalid language: {}", s)),
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("english".parse::<Language>(), Ok(Language::English));
        assert_eq!("Devanagari".parse::<Language>(), Ok(Language::Devanagari));
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_unknown_tag_deserializes_as_english() {
        let language: Language = serde_json::from_str("\"hindi\"").unwrap();
        assert_eq!(language, Language::English);
    }

    #[test]
    fn test_language_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Language::Devanagari).unwrap(),
            "\"devanagari\""
        );
    }
}
