use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    ContactFilter, ContactMessage, ContactSubmission,
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    #[schema(example = "Ann Example")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactRequest> for ContactSubmission {
    fn from(req: ContactRequest) -> Self {
        ContactSubmission {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

/// What the public sender gets back.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub message: String,
}

impl From<ContactMessage> for ContactReceipt {
    fn from(m: ContactMessage) -> Self {
        ContactReceipt {
            id: m.id,
            message: "Your message has been sent successfully! We will get back to you soon."
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactMessageResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub is_resolved: bool,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactMessage> for ContactMessageResponse {
    fn from(m: ContactMessage) -> Self {
        ContactMessageResponse {
            id: m.id,
            name: m.name,
            email: m.email,
            subject: m.subject,
            message: m.message,
            is_read: m.is_read,
            is_resolved: m.is_resolved,
            ip_address: m.ip_address,
            user_agent: m.user_agent,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactListQuery {
    pub is_read: Option<bool>,
    pub is_resolved: Option<bool>,
}

impl From<ContactListQuery> for ContactFilter {
    fn from(q: ContactListQuery) -> Self {
        ContactFilter {
            is_read: q.is_read,
            is_resolved: q.is_resolved,
        }
    }
}
