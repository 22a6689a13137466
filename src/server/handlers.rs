//! HTTP handlers for the contacts API.
//!
//! Thin CRUD over the repository: the handlers translate repository results
//! into status codes and leave all collection logic below.

use crate::error::RepositoryError;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ContactRepository>,
}

/// Message envelope used by the save-all responses.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// GET /api/contacts
pub async fn list_contacts(State(state): State<AppState>) -> Response {
    match state.repository.get_all().await {
        Ok(contacts) => Json(contacts).into_response(),
        Err(e) => internal_error(e),
    }
}

/// GET /api/contacts/{id}
pub async fn get_contact(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.repository.get(id).await {
        Ok(contact) => Json(contact).into_response(),
        Err(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error(e),
    }
}

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    Json(contact): Json<Contact>,
) -> Response {
    if contact.first_name.trim().is_empty()
        || contact.last_name.trim().is_empty()
        || contact.phone.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            "FirstName, LastName and Phone are required",
        )
            .into_response();
    }

    match state.repository.add(contact).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => internal_error(e),
    }
}

/// PUT /api/contacts/{id}
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(contact): Json<Contact>,
) -> Response {
    match state.repository.update(id, contact).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error(e),
    }
}

/// DELETE /api/contacts/{id}
pub async fn delete_contact(State(state): State<AppState>, Path(id): Path<u32>) -> Response {
    match state.repository.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(RepositoryError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error(e),
    }
}

/// POST /api/contacts/save-all
pub async fn save_all(
    State(state): State<AppState>,
    Json(contacts): Json<Vec<Contact>>,
) -> Response {
    match state.repository.save_all(contacts).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageBody {
                message: "All contacts saved successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageBody {
                message: format!("Error saving contacts: {}", e),
            }),
        )
            .into_response(),
    }
}

fn internal_error(err: RepositoryError) -> Response {
    error!("repository error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
