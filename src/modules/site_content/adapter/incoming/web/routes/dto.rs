use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::site_content::application::domain::entities::{
    AboutFields, ContentRecord, EducationFields, HomeFields, InternshipFields,
};

//
// ──────────────────────────────────────────────────────────
// Home
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct HomeContentRequest {
    pub profile_picture_url: Option<String>,
    #[schema(example = "HARSHIT RAJ")]
    pub name: String,
    #[schema(example = "Full Stack Developer | Cybersecurity Enthusiast")]
    pub title: String,
    #[schema(example = "B.Tech CSE @ LPU")]
    pub education: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
}

impl From<HomeContentRequest> for HomeFields {
    fn from(req: HomeContentRequest) -> Self {
        HomeFields {
            profile_picture_url: req.profile_picture_url,
            name: req.name,
            title: req.title,
            education: req.education,
            email: req.email,
            phone: req.phone,
            github_url: req.github_url,
            linkedin_url: req.linkedin_url,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHomeContentRequest {
    #[serde(flatten)]
    pub content: HomeContentRequest,
    /// Activating the new row deactivates the current one.
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeContentResponse {
    pub id: Uuid,
    pub profile_picture_url: Option<String>,
    pub name: String,
    pub title: String,
    pub education: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentRecord<HomeFields>> for HomeContentResponse {
    fn from(record: ContentRecord<HomeFields>) -> Self {
        let f = record.fields;
        HomeContentResponse {
            id: record.id,
            profile_picture_url: f.profile_picture_url,
            name: f.name,
            title: f.title,
            education: f.education,
            email: f.email,
            phone: f.phone,
            github_url: f.github_url,
            linkedin_url: f.linkedin_url,
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

/// Flat form of the about page; numbered groups mirror the stored columns.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct AboutContentRequest {
    pub bio: Option<String>,
    /// Comma-separated
    pub skills_languages: Option<String>,
    pub skills_frameworks: Option<String>,
    pub skills_tools: Option<String>,
    pub skills_soft: Option<String>,

    pub internship_1_company: Option<String>,
    pub internship_1_position: Option<String>,
    pub internship_1_date: Option<String>,
    /// One point per line
    pub internship_1_description: Option<String>,
    pub internship_1_tech: Option<String>,

    pub internship_2_company: Option<String>,
    pub internship_2_position: Option<String>,
    pub internship_2_date: Option<String>,
    pub internship_2_description: Option<String>,
    pub internship_2_tech: Option<String>,

    /// One certificate per line
    pub certificates: Option<String>,

    pub education_1_institution: Option<String>,
    pub education_1_degree: Option<String>,
    pub education_1_date: Option<String>,
    pub education_1_cgpa: Option<String>,
    pub education_1_location: Option<String>,

    pub education_2_institution: Option<String>,
    pub education_2_degree: Option<String>,
    pub education_2_date: Option<String>,
    pub education_2_cgpa: Option<String>,
    pub education_2_location: Option<String>,
}

impl From<AboutContentRequest> for AboutFields {
    fn from(r: AboutContentRequest) -> Self {
        AboutFields {
            bio: r.bio,
            skills_languages: r.skills_languages,
            skills_frameworks: r.skills_frameworks,
            skills_tools: r.skills_tools,
            skills_soft: r.skills_soft,
            internship_1: InternshipFields {
                company: r.internship_1_company,
                position: r.internship_1_position,
                date: r.internship_1_date,
                description: r.internship_1_description,
                tech: r.internship_1_tech,
            },
            internship_2: InternshipFields {
                company: r.internship_2_company,
                position: r.internship_2_position,
                date: r.internship_2_date,
                description: r.internship_2_description,
                tech: r.internship_2_tech,
            },
            certificates: r.certificates,
            education_1: EducationFields {
                institution: r.education_1_institution,
                degree: r.education_1_degree,
                date: r.education_1_date,
                cgpa: r.education_1_cgpa,
                location: r.education_1_location,
            },
            education_2: EducationFields {
                institution: r.education_2_institution,
                degree: r.education_2_degree,
                date: r.education_2_date,
                cgpa: r.education_2_cgpa,
                location: r.education_2_location,
            },
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAboutContentRequest {
    #[serde(flatten)]
    pub content: AboutContentRequest,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InternshipView {
    pub company: Option<String>,
    pub position: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub description_list: Vec<String>,
    pub tech: Option<String>,
}

impl From<InternshipFields> for InternshipView {
    fn from(f: InternshipFields) -> Self {
        let description_list = f.description_list();
        InternshipView {
            company: f.company,
            position: f.position,
            date: f.date,
            description: f.description,
            description_list,
            tech: f.tech,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EducationView {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub date: Option<String>,
    pub cgpa: Option<String>,
    pub location: Option<String>,
}

impl From<EducationFields> for EducationView {
    fn from(f: EducationFields) -> Self {
        EducationView {
            institution: f.institution,
            degree: f.degree,
            date: f.date,
            cgpa: f.cgpa,
            location: f.location,
        }
    }
}

/// Stored text plus the list projections the about page renders.
#[derive(Debug, Serialize, ToSchema)]
pub struct AboutContentResponse {
    pub id: Uuid,
    pub bio: Option<String>,
    pub skills_languages: Option<String>,
    pub skills_languages_list: Vec<String>,
    pub skills_frameworks: Option<String>,
    pub skills_frameworks_list: Vec<String>,
    pub skills_tools: Option<String>,
    pub skills_tools_list: Vec<String>,
    pub skills_soft: Option<String>,
    pub skills_soft_list: Vec<String>,
    pub internships: Vec<InternshipView>,
    pub certificates: Option<String>,
    pub certificates_list: Vec<String>,
    pub education: Vec<EducationView>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentRecord<AboutFields>> for AboutContentResponse {
    fn from(record: ContentRecord<AboutFields>) -> Self {
        let f = record.fields;
        AboutContentResponse {
            id: record.id,
            skills_languages_list: f.skills_languages_list(),
            skills_frameworks_list: f.skills_frameworks_list(),
            skills_tools_list: f.skills_tools_list(),
            skills_soft_list: f.skills_soft_list(),
            certificates_list: f.certificates_list(),
            bio: f.bio,
            skills_languages: f.skills_languages,
            skills_frameworks: f.skills_frameworks,
            skills_tools: f.skills_tools,
            skills_soft: f.skills_soft,
            internships: vec![f.internship_1.into(), f.internship_2.into()],
            certificates: f.certificates,
            education: vec![f.education_1.into(), f.education_2.into()],
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
