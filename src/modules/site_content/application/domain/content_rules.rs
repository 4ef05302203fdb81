use super::defaults::{default_about, default_home};
use super::entities::{AboutFields, ContentFields, EducationFields, HomeFields, InternshipFields};
use crate::shared::validation::{
    optional_email, optional_text, optional_url, required_text, ValidationErrors,
};

impl ContentFields for HomeFields {
    const KIND: &'static str = "home";

    fn defaults() -> Self {
        default_home()
    }

    fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fields = HomeFields {
            profile_picture_url: optional_url(
                &mut errors,
                "profile_picture_url",
                self.profile_picture_url,
            ),
            name: required_text(&mut errors, "name", &self.name, Some(200)),
            title: required_text(&mut errors, "title", &self.title, Some(500)),
            education: required_text(&mut errors, "education", &self.education, Some(300)),
            email: optional_email(&mut errors, "email", self.email),
            phone: optional_text(&mut errors, "phone", self.phone, Some(20)),
            github_url: optional_url(&mut errors, "github_url", self.github_url),
            linkedin_url: optional_url(&mut errors, "linkedin_url", self.linkedin_url),
        };

        errors.into_result().map(|_| fields)
    }
}

fn internship(errors: &mut ValidationErrors, n: u8, value: InternshipFields) -> InternshipFields {
    let key = |suffix: &str| format!("internship_{}_{}", n, suffix);
    InternshipFields {
        company: optional_text(errors, &key("company"), value.company, Some(200)),
        position: optional_text(errors, &key("position"), value.position, Some(200)),
        date: optional_text(errors, &key("date"), value.date, Some(100)),
        description: optional_text(errors, &key("description"), value.description, None),
        tech: optional_text(errors, &key("tech"), value.tech, Some(300)),
    }
}

fn education(errors: &mut ValidationErrors, n: u8, value: EducationFields) -> EducationFields {
    let key = |suffix: &str| format!("education_{}_{}", n, suffix);
    EducationFields {
        institution: optional_text(errors, &key("institution"), value.institution, Some(200)),
        degree: optional_text(errors, &key("degree"), value.degree, Some(200)),
        date: optional_text(errors, &key("date"), value.date, Some(100)),
        cgpa: optional_text(errors, &key("cgpa"), value.cgpa, Some(50)),
        location: optional_text(errors, &key("location"), value.location, Some(100)),
    }
}

impl ContentFields for AboutFields {
    const KIND: &'static str = "about";

    fn defaults() -> Self {
        default_about()
    }

    fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fields = AboutFields {
            bio: optional_text(&mut errors, "bio", self.bio, None),
            skills_languages: optional_text(&mut errors, "skills_languages", self.skills_languages, None),
            skills_frameworks: optional_text(
                &mut errors,
                "skills_frameworks",
                self.skills_frameworks,
                None,
            ),
            skills_tools: optional_text(&mut errors, "skills_tools", self.skills_tools, None),
            skills_soft: optional_text(&mut errors, "skills_soft", self.skills_soft, None),
            internship_1: internship(&mut errors, 1, self.internship_1),
            internship_2: internship(&mut errors, 2, self.internship_2),
            certificates: optional_text(&mut errors, "certificates", self.certificates, None),
            education_1: education(&mut errors, 1, self.education_1),
            education_2: education(&mut errors, 2, self.education_2),
        };

        errors.into_result().map(|_| fields)
    }
}
