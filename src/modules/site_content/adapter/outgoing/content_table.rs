use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{about_contents, home_contents};
use crate::modules::site_content::application::domain::entities::{
    AboutFields, ContentFields, ContentRecord, EducationFields, HomeFields, InternshipFields,
};

/// Binds a sea-orm entity to the domain payload it stores, so that one
/// repository implementation serves every singleton table.
pub trait ContentTable: EntityTrait {
    type Fields: ContentFields;
    type Row: ActiveModelTrait<Entity = Self>
        + ActiveModelBehavior
        + From<Self::Model>
        + Send
        + Sync;

    fn id_column() -> Self::Column;
    fn is_active_column() -> Self::Column;
    fn created_at_column() -> Self::Column;

    fn to_record(model: Self::Model) -> ContentRecord<Self::Fields>;

    /// A fresh row; timestamps are left to `before_save`.
    fn new_row(id: Uuid, fields: Self::Fields, is_active: bool) -> Self::Row;

    fn write_fields(row: &mut Self::Row, fields: Self::Fields);

    fn set_active(row: &mut Self::Row, is_active: bool);
}

//
// ──────────────────────────────────────────────────────────
// home_contents
// ──────────────────────────────────────────────────────────
//

impl ContentTable for home_contents::Entity {
    type Fields = HomeFields;
    type Row = home_contents::ActiveModel;

    fn id_column() -> Self::Column {
        home_contents::Column::Id
    }

    fn is_active_column() -> Self::Column {
        home_contents::Column::IsActive
    }

    fn created_at_column() -> Self::Column {
        home_contents::Column::CreatedAt
    }

    fn to_record(model: home_contents::Model) -> ContentRecord<HomeFields> {
        ContentRecord {
            id: model.id,
            fields: HomeFields {
                profile_picture_url: model.profile_picture_url,
                name: model.name,
                title: model.title,
                education: model.education,
                email: model.email,
                phone: model.phone,
                github_url: model.github_url,
                linkedin_url: model.linkedin_url,
            },
            is_active: model.is_active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }

    fn new_row(id: Uuid, fields: HomeFields, is_active: bool) -> home_contents::ActiveModel {
        let mut row = home_contents::ActiveModel {
            id: Set(id),
            is_active: Set(is_active),
            ..Default::default()
        };
        Self::write_fields(&mut row, fields);
        row
    }

    fn write_fields(row: &mut home_contents::ActiveModel, fields: HomeFields) {
        row.profile_picture_url = Set(fields.profile_picture_url);
        row.name = Set(fields.name);
        row.title = Set(fields.title);
        row.education = Set(fields.education);
        row.email = Set(fields.email);
        row.phone = Set(fields.phone);
        row.github_url = Set(fields.github_url);
        row.linkedin_url = Set(fields.linkedin_url);
    }

    fn set_active(row: &mut home_contents::ActiveModel, is_active: bool) {
        row.is_active = Set(is_active);
    }
}

//
// ──────────────────────────────────────────────────────────
// about_contents
// ──────────────────────────────────────────────────────────
//

impl ContentTable for about_contents::Entity {
    type Fields = AboutFields;
    type Row = about_contents::ActiveModel;

    fn id_column() -> Self::Column {
        about_contents::Column::Id
    }

    fn is_active_column() -> Self::Column {
        about_contents::Column::IsActive
    }

    fn created_at_column() -> Self::Column {
        about_contents::Column::CreatedAt
    }

    fn to_record(m: about_contents::Model) -> ContentRecord<AboutFields> {
        ContentRecord {
            id: m.id,
            fields: AboutFields {
                bio: m.bio,
                skills_languages: m.skills_languages,
                skills_frameworks: m.skills_frameworks,
                skills_tools: m.skills_tools,
                skills_soft: m.skills_soft,
                internship_1: InternshipFields {
                    company: m.internship_1_company,
                    position: m.internship_1_position,
                    date: m.internship_1_date,
                    description: m.internship_1_description,
                    tech: m.internship_1_tech,
                },
                internship_2: InternshipFields {
                    company: m.internship_2_company,
                    position: m.internship_2_position,
                    date: m.internship_2_date,
                    description: m.internship_2_description,
                    tech: m.internship_2_tech,
                },
                certificates: m.certificates,
                education_1: EducationFields {
                    institution: m.education_1_institution,
                    degree: m.education_1_degree,
                    date: m.education_1_date,
                    cgpa: m.education_1_cgpa,
                    location: m.education_1_location,
                },
                education_2: EducationFields {
                    institution: m.education_2_institution,
                    degree: m.education_2_degree,
                    date: m.education_2_date,
                    cgpa: m.education_2_cgpa,
                    location: m.education_2_location,
                },
            },
            is_active: m.is_active,
            created_at: m.created_at.into(),
            updated_at: m.updated_at.into(),
        }
    }

    fn new_row(id: Uuid, fields: AboutFields, is_active: bool) -> about_contents::ActiveModel {
        let mut row = about_contents::ActiveModel {
            id: Set(id),
            is_active: Set(is_active),
            ..Default::default()
        };
        Self::write_fields(&mut row, fields);
        row
    }

    fn write_fields(row: &mut about_contents::ActiveModel, f: AboutFields) {
        row.bio = Set(f.bio);
        row.skills_languages = Set(f.skills_languages);
        row.skills_frameworks = Set(f.skills_frameworks);
        row.skills_tools = Set(f.skills_tools);
        row.skills_soft = Set(f.skills_soft);

        row.internship_1_company = Set(f.internship_1.company);
        row.internship_1_position = Set(f.internship_1.position);
        row.internship_1_date = Set(f.internship_1.date);
        row.internship_1_description = Set(f.internship_1.description);
        row.internship_1_tech = Set(f.internship_1.tech);

        row.internship_2_company = Set(f.internship_2.company);
        row.internship_2_position = Set(f.internship_2.position);
        row.internship_2_date = Set(f.internship_2.date);
        row.internship_2_description = Set(f.internship_2.description);
        row.internship_2_tech = Set(f.internship_2.tech);

        row.certificates = Set(f.certificates);

        row.education_1_institution = Set(f.education_1.institution);
        row.education_1_degree = Set(f.education_1.degree);
        row.education_1_date = Set(f.education_1.date);
        row.education_1_cgpa = Set(f.education_1.cgpa);
        row.education_1_location = Set(f.education_1.location);

        row.education_2_institution = Set(f.education_2.institution);
        row.education_2_degree = Set(f.education_2.degree);
        row.education_2_date = Set(f.education_2.date);
        row.education_2_cgpa = Set(f.education_2.cgpa);
        row.education_2_location = Set(f.education_2.location);
    }

    fn set_active(row: &mut about_contents::ActiveModel, is_active: bool) {
        row.is_active = Set(is_active);
    }
}
