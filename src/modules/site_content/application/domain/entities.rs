use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::text::{split_comma, split_lines};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Singleton content
// ──────────────────────────────────────────────────────────
//

/// Editable payload of a singleton content table.
///
/// A table may hold many rows of `Self`, but at most one of them is active at
/// any time; that row is what public pages render.
pub trait ContentFields: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Short name used in logs and routes ("home", "about").
    const KIND: &'static str;

    /// Values written when the table has no active row yet.
    fn defaults() -> Self;

    /// Trims every field and checks length/format rules, collecting all
    /// failures before returning.
    fn validated(self) -> Result<Self, ValidationErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord<F> {
    pub id: Uuid,
    pub fields: F,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row about to be written. `id: None` inserts a new row.
#[derive(Debug, Clone)]
pub struct ContentDraft<F> {
    pub id: Option<Uuid>,
    pub fields: F,
    pub is_active: bool,
}

//
// ──────────────────────────────────────────────────────────
// Home page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeFields {
    pub profile_picture_url: Option<String>,
    pub name: String,
    pub title: String,
    pub education: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// About page
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipFields {
    pub company: Option<String>,
    pub position: Option<String>,
    pub date: Option<String>,
    /// One point per line
    pub description: Option<String>,
    pub tech: Option<String>,
}

impl InternshipFields {
    pub fn description_list(&self) -> Vec<String> {
        split_lines(self.description.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationFields {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub date: Option<String>,
    pub cgpa: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutFields {
    pub bio: Option<String>,
    pub skills_languages: Option<String>,
    pub skills_frameworks: Option<String>,
    pub skills_tools: Option<String>,
    pub skills_soft: Option<String>,
    pub internship_1: InternshipFields,
    pub internship_2: InternshipFields,
    /// One certificate per line
    pub certificates: Option<String>,
    pub education_1: EducationFields,
    pub education_2: EducationFields,
}

impl AboutFields {
    pub fn skills_languages_list(&self) -> Vec<String> {
        split_comma(self.skills_languages.as_deref())
    }

    pub fn skills_frameworks_list(&self) -> Vec<String> {
        split_comma(self.skills_frameworks.as_deref())
    }

    pub fn skills_tools_list(&self) -> Vec<String> {
        split_comma(self.skills_tools.as_deref())
    }

    pub fn skills_soft_list(&self) -> Vec<String> {
        split_comma(self.skills_soft.as_deref())
    }

    pub fn certificates_list(&self) -> Vec<String> {
        split_lines(self.certificates.as_deref())
    }
}
