use crate::modules::experience::application::domain::entities::ExperienceInput;
use crate::modules::experience::application::ports::outgoing::ExperienceFields;
use crate::shared::validation::{
    optional_text, optional_url, required_text, ValidationErrors, REQUIRED,
};

pub fn validate_experience(input: ExperienceInput) -> Result<ExperienceFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let company = required_text(&mut errors, "company", &input.company, Some(200));
    let position = required_text(&mut errors, "position", &input.position, Some(200));
    let location = optional_text(&mut errors, "location", input.location, Some(200));
    let description = optional_text(&mut errors, "description", input.description, None);
    let company_logo_url = optional_url(&mut errors, "company_logo_url", input.company_logo_url);
    let technologies = optional_text(&mut errors, "technologies", input.technologies, Some(500));

    if input.start_date.is_none() {
        errors.add("start_date", REQUIRED);
    }

    errors.into_result()?;

    match input.start_date {
        Some(start_date) => Ok(ExperienceFields {
            company,
            position,
            location,
            description,
            start_date,
            end_date: input.end_date,
            is_current: input.is_current,
            company_logo_url,
            technologies,
            order: input.order,
            is_visible: input.is_visible,
        }),
        None => Err(ValidationErrors::single("start_date", REQUIRED)),
    }
}
