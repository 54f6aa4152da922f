//! Skill taxonomy: the fixed keyword tables used for resume text matching.
//!
//! Category order matters: the matcher walks categories in declaration order,
//! so a keyword listed under two categories is reported under the first.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python", "javascript", "java", "c++", "c#", "c", "typescript", "go", "rust",
    "kotlin", "swift", "php", "ruby", "scala", "r", "matlab", "dart", "perl",
    "haskell", "lua", "bash", "shell", "powershell", "sql", "html", "css",
];

pub const FRAMEWORKS_LIBRARIES: &[&str] = &[
    "react", "react.js", "reactjs", "angular", "vue", "vue.js", "next.js", "nextjs",
    "node.js", "nodejs", "express", "fastapi", "django", "flask", "spring", "laravel",
    "rails", "asp.net", "flutter", "react native", "tensorflow", "pytorch", "keras",
    "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn", "opencv", "nltk",
    "spacy", "hugging face", "langchain", "bootstrap", "tailwind", "tailwindcss",
    "jquery", "redux", "graphql", "rest api", "restful",
];

pub const DATABASES: &[&str] = &[
    "mysql", "postgresql", "postgres", "mongodb", "sqlite", "redis", "cassandra",
    "dynamodb", "firebase", "supabase", "oracle", "sql server", "elasticsearch",
    "neo4j", "influxdb",
];

pub const CLOUD_DEVOPS: &[&str] = &[
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "k8s",
    "terraform", "ansible", "jenkins", "github actions", "ci/cd", "linux",
    "nginx", "apache", "heroku", "vercel", "netlify", "render", "railway",
];

pub const TOOLS: &[&str] = &[
    "git", "github", "gitlab", "bitbucket", "jira", "confluence", "figma",
    "postman", "swagger", "vs code", "intellij", "eclipse", "xcode", "android studio",
    "tableau", "power bi", "excel", "canva", "photoshop", "illustrator",
    "jupyter", "colab", "notion", "slack", "trello", "asana",
];

pub const CS_CONCEPTS: &[&str] = &[
    "data structures", "algorithms", "dsa", "oop", "object oriented", "design patterns",
    "system design", "microservices", "api design", "agile", "scrum", "tdd",
    "unit testing", "machine learning", "deep learning", "nlp", "computer vision",
    "data science", "data analysis", "statistics", "linear algebra", "calculus",
    "networking", "cybersecurity", "cryptography", "blockchain", "cloud computing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "teamwork", "leadership", "problem solving", "critical thinking",
    "time management", "adaptability", "creativity", "collaboration", "presentation",
    "project management", "mentoring", "public speaking", "analytical thinking",
    "attention to detail", "multitasking", "decision making",
];

/// Category name → keyword list, in matching order.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("programming", PROGRAMMING_LANGUAGES),
    ("framework", FRAMEWORKS_LIBRARIES),
    ("database", DATABASES),
    ("cloud_devops", CLOUD_DEVOPS),
    ("tool", TOOLS),
    ("concept", CS_CONCEPTS),
    ("soft_skill", SOFT_SKILLS),
];

/// Category assigned when a name matches nothing in the taxonomy.
pub const GENERAL_CATEGORY: &str = "general";

/// One compiled taxonomy entry.
pub struct KeywordPattern {
    pub category: &'static str,
    pub keyword: &'static str,
    pub pattern: Regex,
}

/// Whole-word patterns for every taxonomy keyword, compiled on first use.
pub static KEYWORD_PATTERNS: Lazy<Vec<KeywordPattern>> = Lazy::new(|| {
    SKILL_CATEGORIES
        .iter()
        .flat_map(|&(category, keywords)| {
            keywords.iter().map(move |&keyword| KeywordPattern {
                category,
                keyword,
                pattern: Regex::new(&boundary_pattern(keyword))
                    .expect("escaped keyword is a valid pattern"),
            })
        })
        .collect()
});

/// Builds a word-boundary pattern for a keyword.
///
/// `\b` only asserts between a word and a non-word character, so it is placed
/// only on edges that end in a word character. "c++" then still matches in
/// "c++ and rust", while "c" never matches inside "javascript".
fn boundary_pattern(keyword: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let lead = keyword.chars().next().is_some_and(is_word);
    let trail = keyword.chars().last().is_some_and(is_word);

    format!(
        "{}{}{}",
        if lead { r"\b" } else { "" },
        regex::escape(keyword),
        if trail { r"\b" } else { "" }
    )
}

/// Returns the taxonomy category of an arbitrary skill name.
///
/// A category matches when one of its keywords contains the name or the name
/// contains the keyword. Anything else is "general".
pub fn categorize_skill(skill_name: &str) -> &'static str {
    let skill_lower = skill_name.trim().to_lowercase();
    if skill_lower.is_empty() {
        return GENERAL_CATEGORY;
    }

    SKILL_CATEGORIES
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|kw| skill_lower.contains(kw) || kw.contains(skill_lower.as_str()))
        })
        .map(|(category, _)| *category)
        .unwrap_or(GENERAL_CATEGORY)
}
