//! Lead-ingestion webhook for the external marketing/CRM tool.
//!
//! The wire contract fixes the body of every branch, so responses are built
//! by hand here instead of going through `AppError`. The flow is strictly
//! linear: method check, content type, UTF-8 decode, JSON parse, required
//! fields, persist. No retries, no queuing, no idempotency key; duplicate
//! emails are left to the storage unique constraint and surface as 500.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::models::lead::NewLead;
use crate::state::AppState;

/// The three fields the webhook reads from the payload. Extra keys are
/// ignored; a wrong type for any of these fails the parse step.
#[derive(Debug, Deserialize)]
struct LeadPayload {
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

/// ANY /api/create-lead/ (only POST is accepted).
pub async fn create_lead(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        warn!("Method Not Allowed ({method}) for /api/create-lead/");
        return reply(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "error": format!("Method {method} Not Allowed for this endpoint. Use POST.") }),
        );
    }

    // Lossy decode so a header with non-ASCII bytes still shows up in the
    // 415 body instead of reading as absent.
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    let is_json = content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        let received = content_type.as_deref().unwrap_or("Not provided");
        let message =
            format!("Invalid Content-Type. Expected 'application/json', got '{received}'");
        warn!("{message}");
        return reply(StatusCode::UNSUPPORTED_MEDIA_TYPE, json!({ "error": message }));
    }

    let text = match std::str::from_utf8(&body) {
        Ok(text) => text,
        Err(e) => {
            error!("Request body is not valid UTF-8: {e}");
            return reply(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid character encoding in request body. Expected UTF-8." }),
            );
        }
    };

    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            error!("Invalid JSON payload: {e}");
            return reply(
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Invalid JSON format. Details: {e}") }),
            );
        }
    };
    let payload: LeadPayload = match serde_json::from_value(value.clone()) {
        Ok(payload) => payload,
        Err(e) => {
            error!("JSON payload has wrong shape: {e}");
            return reply(
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Invalid JSON format. Details: {e}") }),
            );
        }
    };

    // Absent and empty string both count as missing.
    let required = [
        ("name", &payload.full_name),
        ("email", &payload.email),
        ("phone", &payload.phone),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, v)| v.as_deref().map_or(true, str::is_empty))
        .map(|(label, _)| *label)
        .collect();
    if !missing.is_empty() {
        let received_keys: Vec<&String> = value
            .as_object()
            .map(|obj| obj.keys().collect())
            .unwrap_or_default();
        let message = format!("Missing required fields: {}.", missing.join(", "));
        warn!("{message} Received keys: {received_keys:?}");
        return reply(
            StatusCode::BAD_REQUEST,
            json!({ "error": message, "received_data_keys": received_keys }),
        );
    }

    let new = NewLead {
        name: payload.full_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
    };
    match state.leads.create(new).await {
        Ok(lead) => {
            info!("Lead created: id={} email={}", lead.id, lead.email);
            reply(
                StatusCode::CREATED,
                json!({ "message": "Lead created successfully", "lead_id": lead.id }),
            )
        }
        Err(e) => {
            error!("Database error while creating lead: {e}");
            reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": format!("Could not save lead due to a database issue. Details: {e}") }),
            )
        }
    }
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}
