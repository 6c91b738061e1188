use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Lookup tables the scorers consult, kept outside the matching logic so they
/// can be tuned per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub stopwords: Vec<String>,
    pub eligibility_sentinels: Vec<String>,
    /// Ordered lowest to highest.
    pub education_levels: Vec<EducationLevel>,
    pub related_fields: BTreeMap<String, Vec<String>>,
}

/// Named rung of the degree hierarchy and the phrases that identify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationLevel {
    pub name: String,
    pub keywords: Vec<String>,
}

impl EducationLevel {
    fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        let stopwords = ["the", "and", "for", "with", "from", "into", "that", "this"]
            .iter()
            .map(|word| word.to_string())
            .collect();

        let eligibility_sentinels = ["none", "not required", "n/a"]
            .iter()
            .map(|phrase| phrase.to_string())
            .collect();

        let education_levels = vec![
            EducationLevel::new("elementary", &["elementary", "primary school"]),
            EducationLevel::new("secondary", &["secondary", "high school"]),
            EducationLevel::new("vocational", &["vocational", "technical course", "tesda"]),
            EducationLevel::new("bachelor", &["bachelor", "baccalaureate", "college degree"]),
            EducationLevel::new("master", &["master"]),
            EducationLevel::new("doctoral", &["doctor", "doctoral", "phd", "ph.d"]),
            EducationLevel::new(
                "graduate studies",
                &["graduate studies", "post-graduate", "postgraduate"],
            ),
        ];

        let mut related_fields = BTreeMap::new();
        related_fields.insert(
            "information technology".to_string(),
            vec![
                "computer science".to_string(),
                "software engineering".to_string(),
                "information systems".to_string(),
                "computer engineering".to_string(),
            ],
        );
        related_fields.insert(
            "computer science".to_string(),
            vec![
                "information technology".to_string(),
                "software engineering".to_string(),
                "information systems".to_string(),
            ],
        );
        related_fields.insert(
            "civil engineering".to_string(),
            vec![
                "structural engineering".to_string(),
                "construction engineering".to_string(),
                "geodetic engineering".to_string(),
            ],
        );
        related_fields.insert(
            "nursing".to_string(),
            vec![
                "midwifery".to_string(),
                "health sciences".to_string(),
                "public health".to_string(),
            ],
        );

        Self {
            stopwords,
            eligibility_sentinels,
            education_levels,
            related_fields,
        }
    }
}

impl ScoringPolicy {
    /// Load a policy from a JSON document; keys left out keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, PolicyError> {
        serde_json::from_str(raw).map_err(PolicyError::Parse)
    }

    /// Index of the highest level whose keyword appears in `text`.
    pub fn education_level(&self, text: &str) -> Option<usize> {
        let lowered = text.to_lowercase();
        self.education_levels
            .iter()
            .enumerate()
            .rev()
            .find(|(_, level)| {
                level
                    .keywords
                    .iter()
                    .any(|keyword| lowered.contains(keyword.as_str()))
            })
            .map(|(index, _)| index)
    }

    pub(crate) fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.iter().any(|word| word == token)
    }

    pub(crate) fn is_eligibility_sentinel(&self, entry: &str) -> bool {
        let lowered = entry.to_lowercase();
        self.eligibility_sentinels
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }
}

/// Failure to load a scoring policy document.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read scoring policy {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scoring policy: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_highest_stated_level() {
        let policy = ScoringPolicy::default();
        assert_eq!(
            policy.education_level("Bachelor of Science in Nursing"),
            Some(3)
        );
        assert_eq!(
            policy.education_level("Master in Public Administration"),
            Some(4)
        );
        assert_eq!(policy.education_level("High School Diploma"), Some(1));
        assert_eq!(
            policy.education_level("Completed Graduate Studies in Law"),
            Some(6)
        );
        assert_eq!(policy.education_level("Self-taught"), None);
    }

    #[test]
    fn partial_json_keeps_default_tables() {
        let policy = ScoringPolicy::from_json(r#"{ "stopwords": ["using"] }"#)
            .expect("policy parses");
        assert_eq!(policy.stopwords, vec!["using".to_string()]);
        assert_eq!(policy.education_levels.len(), 7);
        assert!(policy.related_fields.contains_key("nursing"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ScoringPolicy::from_json("{ not json"),
            Err(PolicyError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ScoringPolicy::from_path("/nonexistent/policy.json").expect_err("missing file");
        assert!(err.to_string().contains("/nonexistent/policy.json"));
    }

    #[test]
    fn sentinels_match_case_insensitively() {
        let policy = ScoringPolicy::default();
        assert!(policy.is_eligibility_sentinel("None"));
        assert!(policy.is_eligibility_sentinel("Eligibility NOT REQUIRED"));
        assert!(!policy.is_eligibility_sentinel("Civil Service Professional"));
    }
}
