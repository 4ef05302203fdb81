use crate::modules::skill::application::domain::entities::{SkillCategory, SkillInput};
use crate::modules::skill::application::ports::outgoing::SkillFields;
use crate::shared::validation::{optional_text, required_text, ValidationErrors};

const MIN_PROFICIENCY: i32 = 0;
const MAX_PROFICIENCY: i32 = 100;

pub fn validate_skill(input: SkillInput) -> Result<SkillFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = required_text(&mut errors, "name", &input.name, Some(100));
    let icon = optional_text(&mut errors, "icon", input.icon, Some(50));

    let category = match input.category.as_deref().map(str::trim) {
        None | Some("") => SkillCategory::default(),
        Some(raw) => SkillCategory::parse(raw).unwrap_or_else(|| {
            errors.add(
                "category",
                format!("Select a valid choice. {} is not one of the available choices.", raw),
            );
            SkillCategory::default()
        }),
    };

    if input.proficiency_level < MIN_PROFICIENCY {
        errors.add(
            "proficiency_level",
            format!("Ensure this value is greater than or equal to {}.", MIN_PROFICIENCY),
        );
    } else if input.proficiency_level > MAX_PROFICIENCY {
        errors.add(
            "proficiency_level",
            format!("Ensure this value is less than or equal to {}.", MAX_PROFICIENCY),
        );
    }

    errors.into_result()?;

    Ok(SkillFields {
        name,
        category,
        proficiency_level: input.proficiency_level,
        icon,
        is_visible: input.is_visible,
        order: input.order,
    })
}
