//! Resource Catalog — curated free learning resources per skill family.

use serde::{Deserialize, Serialize};

/// A learning resource attached to a roadmap week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Static catalog record; converted to an owned [`Resource`] on lookup.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub kind: &'static str,
}

impl From<&CatalogEntry> for Resource {
    fn from(entry: &CatalogEntry) -> Self {
        Resource {
            title: entry.title.to_string(),
            url: entry.url.to_string(),
            kind: entry.kind.to_string(),
        }
    }
}

const fn entry(title: &'static str, url: &'static str, kind: &'static str) -> CatalogEntry {
    CatalogEntry { title, url, kind }
}

/// Skill family → resources, in lookup order.
pub const FREE_RESOURCES: &[(&str, &[CatalogEntry])] = &[
    (
        "Python",
        &[
            entry("Python.org Official Docs", "https://docs.python.org/3/tutorial/", "docs"),
            entry(
                "freeCodeCamp Python",
                "https://www.freecodecamp.org/learn/scientific-computing-with-python/",
                "course",
            ),
            entry("CS50P – Python", "https://cs50.harvard.edu/python/", "course"),
        ],
    ),
    (
        "JavaScript",
        &[
            entry(
                "MDN Web Docs",
                "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide",
                "docs",
            ),
            entry("The Odin Project", "https://www.theodinproject.com/", "course"),
            entry("JavaScript.info", "https://javascript.info/", "tutorial"),
        ],
    ),
    (
        "SQL",
        &[
            entry("SQLZoo", "https://sqlzoo.net/", "interactive"),
            entry("Mode SQL Tutorial", "https://mode.com/sql-tutorial/", "tutorial"),
            entry("W3Schools SQL", "https://www.w3schools.com/sql/", "tutorial"),
        ],
    ),
    (
        "Git",
        &[
            entry("Git Official Docs", "https://git-scm.com/doc", "docs"),
            entry("Learn Git Branching", "https://learngitbranching.js.org/", "interactive"),
            entry("GitHub Skills", "https://skills.github.com/", "course"),
        ],
    ),
    (
        "DSA",
        &[
            entry(
                "GeeksForGeeks DSA",
                "https://www.geeksforgeeks.org/data-structures/",
                "tutorial",
            ),
            entry("LeetCode", "https://leetcode.com/", "practice"),
            entry("Visualgo", "https://visualgo.net/", "interactive"),
        ],
    ),
    (
        "Machine Learning",
        &[
            entry(
                "Google ML Crash Course",
                "https://developers.google.com/machine-learning/crash-course",
                "course",
            ),
            entry("fast.ai", "https://www.fast.ai/", "course"),
            entry("Kaggle Learn", "https://www.kaggle.com/learn", "course"),
        ],
    ),
];

/// Returned when no catalog key matches.
pub const DEFAULT_RESOURCES: &[CatalogEntry] = &[
    entry("freeCodeCamp", "https://www.freecodecamp.org/", "course"),
    entry("Khan Academy", "https://www.khanacademy.org/computing", "course"),
    entry("YouTube", "https://www.youtube.com/", "video"),
];

/// Returns the resources of the first catalog key that contains, or is
/// contained in, `skill` (case-insensitive). Short keys over-match on purpose.
pub fn resources_for_skill(skill: &str) -> &'static [CatalogEntry] {
    let skill_lower = skill.to_lowercase();
    FREE_RESOURCES
        .iter()
        .find(|(key, _)| {
            let key_lower = key.to_lowercase();
            skill_lower.contains(&key_lower) || key_lower.contains(&skill_lower)
        })
        .map(|(_, resources)| *resources)
        .unwrap_or(DEFAULT_RESOURCES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_title(skill: &str) -> &'static str {
        resources_for_skill(skill)[0].title
    }

    #[test]
    fn test_exact_family_name() {
        assert_eq!(first_title("Python"), "Python.org Official Docs");
    }

    #[test]
    fn test_key_contained_in_skill() {
        // "sql" is a substring of "postgresql"
        assert_eq!(first_title("PostgreSQL"), "SQLZoo");
        assert_eq!(first_title("Advanced Machine Learning"), "Google ML Crash Course");
    }

    #[test]
    fn test_skill_contained_in_key() {
        // "java" is a substring of "javascript"
        assert_eq!(first_title("Java"), "MDN Web Docs");
    }

    #[test]
    fn test_react_js_has_no_family_and_gets_defaults() {
        // Neither "react.js" ⊆ key nor key ⊆ "react.js" for any catalog key.
        assert_eq!(first_title("React.js"), "freeCodeCamp");
    }

    #[test]
    fn test_first_declared_key_wins() {
        // Both "Python" and "SQL" are contained; Python is declared first.
        assert_eq!(first_title("Python and SQL"), "Python.org Official Docs");
    }

    #[test]
    fn test_unknown_skill_gets_defaults() {
        assert_eq!(resources_for_skill("Underwater Basket Weaving").len(), 3);
        assert_eq!(first_title("Underwater Basket Weaving"), "freeCodeCamp");
    }

    #[test]
    fn test_resource_serializes_type_field() {
        let resource = Resource::from(&DEFAULT_RESOURCES[2]);
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "video");
    }
}
