//! Question Bank Selector — canned interview questions per role.
//!
//! The only randomized component in the service. The RNG is passed in so
//! callers (and tests) control the permutation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Difficulty label attached to every canned question.
pub const DEFAULT_DIFFICULTY: &str = "medium";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Technical,
    Behavioral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: QuestionCategory,
    pub difficulty: String,
}

/// Technical and behavioral questions for one role.
pub struct RoleBank {
    pub role: &'static str,
    pub technical: &'static [&'static str],
    pub behavioral: &'static [&'static str],
}

pub const QUESTION_BANK: &[RoleBank] = &[
    RoleBank {
        role: "Software Engineer",
        technical: &[
            "Explain the difference between a stack and a queue.",
            "What is object-oriented programming? Explain its four pillars.",
            "What is the time complexity of binary search?",
            "Explain what REST API means and its key principles.",
            "What is the difference between SQL and NoSQL databases?",
            "How does Git branching work? Explain merge vs rebase.",
            "What is a deadlock in operating systems?",
            "Explain the concept of recursion with an example.",
        ],
        behavioral: &[
            "Tell me about a time you solved a difficult technical problem.",
            "How do you handle tight deadlines?",
            "Describe a situation where you had to learn a new technology quickly.",
            "How do you approach debugging a complex issue?",
        ],
    },
    RoleBank {
        role: "Data Analyst",
        technical: &[
            "What is the difference between mean, median, and mode?",
            "Explain what a JOIN is in SQL and its types.",
            "What is data normalization?",
            "How would you handle missing data in a dataset?",
            "What is the difference between correlation and causation?",
        ],
        behavioral: &[
            "Describe a time you found a key insight from data.",
            "How do you present complex data to non-technical stakeholders?",
        ],
    },
    RoleBank {
        role: "Web Developer",
        technical: &[
            "What is the difference between HTML, CSS, and JavaScript?",
            "Explain the CSS box model.",
            "What is responsive design?",
            "What is the difference between GET and POST requests?",
            "Explain what an API is and how you've used one.",
        ],
        behavioral: &[
            "How do you ensure your code is maintainable?",
            "Describe a challenging UI/UX problem you solved.",
        ],
    },
];

/// Used for any role not listed in [`QUESTION_BANK`].
pub const DEFAULT_BANK: RoleBank = RoleBank {
    role: "default",
    technical: &[
        "What are your strongest technical skills?",
        "Describe a project you're most proud of.",
        "How do you stay updated with technology trends?",
    ],
    behavioral: &[
        "Tell me about yourself.",
        "Why do you want this role?",
        "Where do you see yourself in 5 years?",
        "What is your greatest strength and weakness?",
    ],
};

/// Exact, case-sensitive role lookup.
pub fn bank_for_role(role: &str) -> &'static RoleBank {
    QUESTION_BANK
        .iter()
        .find(|bank| bank.role == role)
        .unwrap_or(&DEFAULT_BANK)
}

/// Returns up to `count` questions for `role`, shuffled with `rng`.
pub fn pick_questions<R: Rng + ?Sized>(role: &str, count: usize, rng: &mut R) -> Vec<InterviewQuestion> {
    let bank = bank_for_role(role);

    let mut questions: Vec<InterviewQuestion> = bank
        .technical
        .iter()
        .map(|q| (q, QuestionCategory::Technical))
        .chain(bank.behavioral.iter().map(|q| (q, QuestionCategory::Behavioral)))
        .map(|(q, category)| InterviewQuestion {
            question: q.to_string(),
            category,
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        })
        .collect();

    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn in_bank(bank: &RoleBank, q: &InterviewQuestion) -> bool {
        match q.category {
            QuestionCategory::Technical => bank.technical.iter().any(|t| *t == q.question),
            QuestionCategory::Behavioral => bank.behavioral.iter().any(|b| *b == q.question),
        }
    }

    #[test]
    fn test_software_engineer_five_distinct_questions() {
        let mut rng = StdRng::seed_from_u64(7);
        let questions = pick_questions("Software Engineer", 5, &mut rng);
        assert_eq!(questions.len(), 5);

        let bank = bank_for_role("Software Engineer");
        assert!(questions.iter().all(|q| in_bank(bank, q)));

        let unique: HashSet<_> = questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(unique.len(), 5);
        assert!(questions.iter().all(|q| q.difficulty == DEFAULT_DIFFICULTY));
    }

    #[test]
    fn test_count_larger_than_bank_returns_whole_bank() {
        let mut rng = StdRng::seed_from_u64(1);
        let questions = pick_questions("Data Analyst", 50, &mut rng);
        assert_eq!(questions.len(), 7);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_questions("Web Developer", 0, &mut rng).is_empty());
    }

    #[test]
    fn test_unknown_role_uses_default_bank() {
        let mut rng = StdRng::seed_from_u64(3);
        let questions = pick_questions("Astronaut", 10, &mut rng);
        assert_eq!(questions.len(), 7);
        assert!(questions.iter().all(|q| in_bank(&DEFAULT_BANK, q)));
    }

    #[test]
    fn test_role_lookup_is_exact() {
        assert_eq!(bank_for_role("software engineer").role, "default");
        assert_eq!(bank_for_role("Web Developer").role, "Web Developer");
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = pick_questions("Software Engineer", 12, &mut StdRng::seed_from_u64(42));
        let b = pick_questions("Software Engineer", 12, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::Behavioral).unwrap();
        assert_eq!(json, "\"behavioral\"");
    }
}
