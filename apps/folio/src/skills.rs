//! Skill classification: buckets free-text skills into fixed categories.
//!
//! Rules are evaluated top-down per skill; the first rule whose keyword set
//! contains a substring of the lower-cased skill wins. Matching is plain
//! substring search, so overlaps are expected: "Django" contains `go` and
//! lands in Programming Languages. The keyword sets are public so these
//! cases stay auditable.

pub const PROGRAMMING_LANGUAGE_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "typescript",
];

pub const FRAMEWORK_KEYWORDS: &[&str] = &[
    "react", "vue", "angular", "node", "express", "django", "flask", "spring", "laravel",
    "rails", "next", "nuxt",
];

pub const TOOL_KEYWORDS: &[&str] = &["git", "docker", "aws", "sql", "mongodb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillCategory {
    ProgrammingLanguages,
    FrameworksAndLibraries,
    ToolsAndTechnologies,
    OtherSkills,
}

impl SkillCategory {
    /// Display order.
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::ProgrammingLanguages,
        SkillCategory::FrameworksAndLibraries,
        SkillCategory::ToolsAndTechnologies,
        SkillCategory::OtherSkills,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguages => "Programming Languages",
            SkillCategory::FrameworksAndLibraries => "Frameworks & Libraries",
            SkillCategory::ToolsAndTechnologies => "Tools & Technologies",
            SkillCategory::OtherSkills => "Other Skills",
        }
    }
}

struct CategoryRule {
    category: SkillCategory,
    keywords: &'static [&'static str],
}

/// Evaluated in order. Skills matching none fall through to Other Skills.
const RULES: &[CategoryRule] = &[
    CategoryRule {
        category: SkillCategory::ProgrammingLanguages,
        keywords: PROGRAMMING_LANGUAGE_KEYWORDS,
    },
    CategoryRule {
        category: SkillCategory::FrameworksAndLibraries,
        keywords: FRAMEWORK_KEYWORDS,
    },
    CategoryRule {
        category: SkillCategory::ToolsAndTechnologies,
        keywords: TOOL_KEYWORDS,
    },
];

/// A non-empty category with its skills in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

pub fn categorize(skill: &str) -> SkillCategory {
    let lower = skill.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map(|rule| rule.category)
        .unwrap_or(SkillCategory::OtherSkills)
}

/// Classifies every skill into exactly one category. Groups come back in
/// [`SkillCategory::ALL`] order and empty categories are omitted.
pub fn classify<S: AsRef<str>>(skills: &[S]) -> Vec<SkillGroup> {
    let mut buckets: [Vec<String>; 4] = Default::default();

    for skill in skills {
        let skill = skill.as_ref();
        let slot = categorize(skill) as usize;
        buckets[slot].push(skill.to_string());
    }

    SkillCategory::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(category, skills)| SkillGroup { category, skills })
        .collect()
}
