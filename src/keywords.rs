//! Keyword match analysis between a skills list and a job description.
//!
//! The hosting application asks its AI collaborator to extract the key
//! requirements from a job posting. [`parse_keywords`] ingests that
//! response and [`analyze_keywords`] classifies the keywords against the
//! skills the user actually lists, so the UI can show which requirements
//! the resume already covers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Job-description keywords partitioned by whether the user lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Keywords covered by the user's skills.
    pub matched: Vec<String>,
    /// Keywords absent from the user's skills.
    pub missing: Vec<String>,
}

impl KeywordAnalysis {
    /// Whether the analysis produced no keywords at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.missing.is_empty()
    }
}

/// Wire form of the keyword extraction response.
#[derive(Debug, Deserialize)]
struct KeywordPayload {
    #[serde(default)]
    keywords: Vec<String>,
}

/// Parse a keyword extraction payload.
///
/// The payload is a JSON object with a `keywords` array; a missing array
/// reads as empty, the same degradation the producer's schema allows.
pub fn parse_keywords(json: &str) -> Result<Vec<String>> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("empty keyword payload".to_string()));
    }
    let payload: KeywordPayload = serde_json::from_str(trimmed)?;
    Ok(payload.keywords)
}

/// Classify extracted job keywords against a comma-separated skills string.
///
/// Skills are split on commas, trimmed, and lowercased into a set; empty
/// entries are dropped. A keyword matches when its lowercased form is in
/// that set. Keyword order is preserved in both output lists.
#[must_use]
pub fn analyze_keywords(skills: &str, keywords: &[String]) -> KeywordAnalysis {
    let skill_set: HashSet<String> = skills
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();

    let mut analysis = KeywordAnalysis::default();
    for keyword in keywords {
        if skill_set.contains(&keyword.to_lowercase()) {
            analysis.matched.push(keyword.clone());
        } else {
            analysis.missing.push(keyword.clone());
        }
    }
    analysis
}
