use std::sync::OnceLock;

use regex::Regex;

use crate::modules::project::application::domain::entities::ProjectInput;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectFields;
use crate::shared::text::slugify;
use crate::shared::validation::{
    optional_text, optional_url, required_text, ValidationErrors,
};

pub const SLUG_TAKEN: &str = "This slug is already in use.";
pub const SLUG_INVALID: &str =
    "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.";
pub const SLUG_UNDERIVABLE: &str =
    "A slug could not be derived from the title; please provide one.";

const MAX_TITLE: usize = 200;
const MAX_SLUG: usize = 200;
const MAX_TECHNOLOGIES: usize = 500;
const MAX_CATEGORY: usize = 100;

/// Normalized project input: the explicit slug (if any) plus the other fields.
#[derive(Debug, Clone)]
pub struct ValidatedProject {
    pub slug: Option<String>,
    pub fields: ProjectFields,
}

impl ValidatedProject {
    /// Explicit slug, else one derived from the title.
    ///
    /// Only creation derives; an update with no slug keeps the stored one.
    pub fn slug_or_derived(&self) -> Result<String, ValidationErrors> {
        if let Some(slug) = &self.slug {
            return Ok(slug.clone());
        }

        let derived = slugify(&self.fields.title);
        if derived.is_empty() {
            return Err(ValidationErrors::single("slug", SLUG_UNDERIVABLE));
        }
        Ok(derived)
    }
}

/// Collects every field error before giving up.
pub fn validate_project(input: ProjectInput) -> Result<ValidatedProject, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = required_text(&mut errors, "title", &input.title, Some(MAX_TITLE));
    let slug = normalize_slug(&mut errors, input.slug);
    let description = required_text(&mut errors, "description", &input.description, None);
    let detailed_description =
        optional_text(&mut errors, "detailed_description", input.detailed_description, None);
    let image_url = optional_url(&mut errors, "image_url", input.image_url);
    let github_link = optional_url(&mut errors, "github_link", input.github_link);
    let live_link = optional_url(&mut errors, "live_link", input.live_link);
    let technologies = required_text(
        &mut errors,
        "technologies",
        &input.technologies,
        Some(MAX_TECHNOLOGIES),
    );
    let category = optional_text(&mut errors, "category", input.category, Some(MAX_CATEGORY));

    errors.into_result()?;

    Ok(ValidatedProject {
        slug,
        fields: ProjectFields {
            title,
            description,
            detailed_description,
            image_url,
            github_link,
            live_link,
            technologies,
            category,
            featured: input.featured,
            order: input.order,
            created: input.created,
        },
    })
}

fn normalize_slug(errors: &mut ValidationErrors, slug: Option<String>) -> Option<String> {
    let slug = slug
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())?;

    if slug.chars().count() > MAX_SLUG {
        errors.add(
            "slug",
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                MAX_SLUG,
                slug.chars().count()
            ),
        );
    } else if !slug_pattern().is_match(&slug) {
        errors.add("slug", SLUG_INVALID);
    }

    Some(slug)
}

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[-a-z0-9_]+$").expect("slug pattern compiles"))
}
