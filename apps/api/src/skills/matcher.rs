//! Keyword Skill Matcher — deterministic skill extraction over the fixed taxonomy.
//!
//! This is the fallback whenever the model collaborator returns nothing usable.
//! Output order follows the taxonomy (category, then keyword), not the text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::skills::taxonomy::KEYWORD_PATTERNS;

/// Confidence attached to every keyword match.
pub const KEYWORD_CONFIDENCE: f32 = 0.9;

/// Characters inspected on each side of a keyword when inferring proficiency.
const CONTEXT_WINDOW: usize = 50;

const ADVANCED_SIGNALS: &[&str] = &["expert", "advanced", "senior", "lead", "5+ years", "6+ years"];
const BEGINNER_SIGNALS: &[&str] = &["beginner", "learning", "basic", "familiar", "exposure"];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Coarse skill level inferred from the words around a skill mention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Proficiency {
    /// Lenient parse for labels coming back from the model. Unknown labels are `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Some(Proficiency::Beginner),
            "intermediate" => Some(Proficiency::Intermediate),
            "advanced" => Some(Proficiency::Advanced),
            _ => None,
        }
    }
}

/// A single skill found in resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: String,
    pub proficiency: Proficiency,
    pub confidence: f32, // 0.0 – 1.0
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Scans `text` for every taxonomy keyword and returns one skill per matched keyword.
pub fn match_skills(text: &str) -> Vec<ExtractedSkill> {
    let text_lower = text.to_lowercase();
    if text_lower.trim().is_empty() {
        return vec![];
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for entry in KEYWORD_PATTERNS.iter() {
        if !entry.pattern.is_match(&text_lower) || !seen.insert(entry.keyword) {
            continue;
        }

        found.push(ExtractedSkill {
            name: display_name(entry.keyword),
            category: entry.category.to_string(),
            proficiency: infer_proficiency(&text_lower, entry.keyword),
            confidence: KEYWORD_CONFIDENCE,
        });
    }

    found
}

/// Acronym-length keywords are upper-cased ("sql" → "SQL"), the rest title-cased.
pub fn display_name(keyword: &str) -> String {
    if keyword.chars().count() <= 3 {
        keyword.to_uppercase()
    } else {
        title_case(keyword)
    }
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest,
/// so "node.js" becomes "Node.Js" and "machine learning" becomes "Machine Learning".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Looks at the window around the first plain occurrence of `keyword`.
/// Advanced signals win over beginner signals; no signal means intermediate.
fn infer_proficiency(text_lower: &str, keyword: &str) -> Proficiency {
    let Some(byte_idx) = text_lower.find(keyword) else {
        return Proficiency::Intermediate;
    };

    let context = context_window(text_lower, byte_idx, CONTEXT_WINDOW);

    if ADVANCED_SIGNALS.iter().any(|w| context.contains(w)) {
        Proficiency::Advanced
    } else if BEGINNER_SIGNALS.iter().any(|w| context.contains(w)) {
        Proficiency::Beginner
    } else {
        Proficiency::Intermediate
    }
}

/// Returns up to `radius` characters before and after the character at `byte_idx`.
fn context_window(text: &str, byte_idx: usize, radius: usize) -> String {
    let char_idx = text[..byte_idx].chars().count();
    let start = char_idx.saturating_sub(radius);
    text.chars().skip(start).take(char_idx + radius - start).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(skills: &'a [ExtractedSkill], name: &str) -> Option<&'a ExtractedSkill> {
        skills.iter().find(|s| s.name == name)
    }

    #[test]
    fn test_senior_react_developer_is_advanced() {
        let skills = match_skills("Senior React developer with 5+ years of experience");
        let react = find(&skills, "React").expect("React should be extracted");
        assert_eq!(react.category, "framework");
        assert_eq!(react.proficiency, Proficiency::Advanced);
        assert!((react.confidence - KEYWORD_CONFIDENCE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_javascript_does_not_match_c() {
        let skills = match_skills("javascript");
        assert!(find(&skills, "C").is_none());
        assert!(find(&skills, "Javascript").is_some());
        // "java" is not a whole word inside "javascript"
        assert!(find(&skills, "Java").is_none());
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(match_skills("").is_empty());
        assert!(match_skills("   \n\t").is_empty());
    }

    #[test]
    fn test_matching_is_idempotent() {
        let text = "Learning Python and SQL; familiar with Docker, Git and AWS.";
        assert_eq!(match_skills(text), match_skills(text));
    }

    #[test]
    fn test_output_follows_taxonomy_order_not_text_order() {
        let skills = match_skills("docker then python");
        let names: Vec<_> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_short_keywords_are_uppercased() {
        let skills = match_skills("Built dashboards with SQL on AWS");
        assert!(find(&skills, "SQL").is_some());
        assert!(find(&skills, "AWS").is_some());
    }

    #[test]
    fn test_multiword_keywords_are_title_cased() {
        let skills = match_skills("strong background in machine learning and node.js");
        assert_eq!(
            find(&skills, "Machine Learning").map(|s| s.category.as_str()),
            Some("concept")
        );
        assert!(find(&skills, "Node.Js").is_some());
    }

    #[test]
    fn test_beginner_signal_detected() {
        let skills = match_skills("Currently learning kotlin on weekends");
        let kotlin = find(&skills, "Kotlin").unwrap();
        assert_eq!(kotlin.proficiency, Proficiency::Beginner);
    }

    #[test]
    fn test_advanced_signal_beats_beginner_signal() {
        let skills = match_skills("expert in haskell, learning basic lua");
        assert_eq!(find(&skills, "Haskell").unwrap().proficiency, Proficiency::Advanced);
    }

    #[test]
    fn test_no_signal_is_intermediate() {
        let skills = match_skills("I have used terraform at work");
        assert_eq!(
            find(&skills, "Terraform").unwrap().proficiency,
            Proficiency::Intermediate
        );
    }

    #[test]
    fn test_signal_outside_window_is_ignored() {
        let padding = "x".repeat(80);
        let text = format!("senior {padding} terraform");
        let skills = match_skills(&text);
        assert_eq!(
            find(&skills, "Terraform").unwrap().proficiency,
            Proficiency::Intermediate
        );
    }

    #[test]
    fn test_keyword_reported_once() {
        let skills = match_skills("python python python");
        assert_eq!(skills.iter().filter(|s| s.name == "Python").count(), 1);
    }

    #[test]
    fn test_context_window_handles_multibyte_text() {
        let text = "développeur senior — rust";
        let idx = text.find("rust").unwrap();
        let window = context_window(text, idx, 50);
        assert!(window.contains("senior"));
        assert!(window.ends_with("rust"));
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(display_name("c++"), "C++");
        assert_eq!(display_name("k8s"), "K8S");
        assert_eq!(display_name("scikit-learn"), "Scikit-Learn");
        assert_eq!(display_name("vs code"), "Vs Code");
    }

    #[test]
    fn test_proficiency_from_label() {
        assert_eq!(Proficiency::from_label(" Advanced "), Some(Proficiency::Advanced));
        assert_eq!(Proficiency::from_label("guru"), None);
    }
}
