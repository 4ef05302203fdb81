use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Programming,
    Framework,
    Database,
    Tool,
    Soft,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::Framework,
        SkillCategory::Database,
        SkillCategory::Tool,
        SkillCategory::Soft,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::Soft => "soft",
            SkillCategory::Other => "other",
        }
    }

    /// Human-readable heading used by grouped listings.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming Languages",
            SkillCategory::Framework => "Frameworks",
            SkillCategory::Database => "Databases",
            SkillCategory::Tool => "Tools & Platforms",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    /// 0..=100
    pub proficiency_level: i32,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_PROFICIENCY: i32 = 50;

/// Raw admin input; `category` stays a string until validated.
#[derive(Debug, Clone)]
pub struct SkillInput {
    pub name: String,
    pub category: Option<String>,
    pub proficiency_level: i32,
    pub icon: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl Default for SkillInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: None,
            proficiency_level: DEFAULT_PROFICIENCY,
            icon: None,
            is_visible: true,
            order: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

/// Buckets an already ordered list by category, keeping the incoming order
/// both across and within groups.
pub fn group_by_category(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: SkillCategory) -> Skill {
        let now = Utc::now();
        Skill {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            proficiency_level: DEFAULT_PROFICIENCY,
            icon: None,
            is_visible: true,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(SkillCategory::parse("tool"), Some(SkillCategory::Tool));
        assert_eq!(SkillCategory::parse("Tool"), None);
        assert_eq!(SkillCategory::default().as_str(), "programming");
    }

    #[test]
    fn test_grouping_keeps_order() {
        let groups = group_by_category(vec![
            skill("Postgres", SkillCategory::Database),
            skill("Redis", SkillCategory::Database),
            skill("Actix", SkillCategory::Framework),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, SkillCategory::Database);
        let names: Vec<&str> = groups[0].skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Postgres", "Redis"]);
        assert_eq!(groups[1].skills[0].name, "Actix");
    }
}
