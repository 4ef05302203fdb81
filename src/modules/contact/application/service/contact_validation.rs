use crate::modules::contact::application::domain::entities::{ClientInfo, ContactSubmission};
use crate::modules::contact::application::ports::outgoing::NewContactMessage;
use crate::shared::validation::{required_email, required_text, ValidationErrors};

pub fn validate_submission(
    submission: ContactSubmission,
    client: ClientInfo,
) -> Result<NewContactMessage, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = required_text(&mut errors, "name", &submission.name, Some(200));
    let email = required_email(&mut errors, "email", &submission.email);
    let subject = required_text(&mut errors, "subject", &submission.subject, Some(300));
    let message = required_text(&mut errors, "message", &submission.message, None);

    errors.into_result()?;

    Ok(NewContactMessage {
        name,
        email,
        subject,
        message,
        client,
    })
}
