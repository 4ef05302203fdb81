use std::net::IpAddr;

use actix_web::{http::header, post, web, HttpRequest, Responder};
use tracing::error;

use super::dto::{ContactReceipt, ContactRequest};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::entities::ClientInfo;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// First `X-Forwarded-For` hop, else the socket peer. Values that do not
/// parse as an IP address are dropped.
pub(crate) fn client_info(req: &HttpRequest) -> ClientInfo {
    let forwarded = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let ip_address = forwarded
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
        .filter(|ip| ip.parse::<IpAddr>().is_ok());

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    ClientInfo {
        ip_address,
        user_agent,
    }
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactReceipt>)),
        (status = 400, description = "Invalid fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    body: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let client = client_info(&req);

    match data
        .contact
        .submit
        .submit(body.into_inner().into(), client)
        .await
    {
        Ok(stored) => ApiResponse::created(ContactReceipt::from(stored)),
        Err(SubmitContactError::Validation(errors)) => ApiResponse::validation_failed(&errors),
        Err(SubmitContactError::RepositoryError(e)) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
