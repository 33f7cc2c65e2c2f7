//! HTTP handlers mapping routes to contact store operations.
//!
//! There is no session or flash state: every handler returns a
//! request-scoped result. Rejected submissions re-render the form with the
//! submitted values echoed and the error message shown; successful
//! mutations redirect to `/` with a `saved` query marker so the list page
//! can show a one-shot notice.

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use crate::error::StoreError;
use crate::models::ContactForm;
use crate::server::router::AppState;
use crate::server::views;

/// Query parameters for the list page.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
    /// Set by the redirect after a successful mutation.
    saved: Option<String>,
}

/// Maps the `saved` marker to the notice shown on the list page.
fn notice_for(marker: &str) -> Option<&'static str> {
    match marker {
        "added" => Some("Contact added successfully"),
        "updated" => Some("Contact updated successfully"),
        "deleted" => Some("Contact deleted"),
        _ => None,
    }
}

/// `GET /` — list all contacts.
pub async fn index(State(state): State<AppState>, Query(params): Query<ListParams>) -> Response {
    match state.service.list().await {
        Ok(contacts) => {
            let notice = params.saved.as_deref().and_then(notice_for);
            Html(views::list_page(&contacts, notice)).into_response()
        }
        Err(e) => storage_failure(e),
    }
}

/// `GET /add` — empty add form.
pub async fn add_form() -> Html<String> {
    Html(views::add_page(&ContactForm::default(), None))
}

/// `POST /add` — create a contact or re-render the form with the error.
pub async fn add_submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match state.service.create(&form).await {
        Ok(_) => Redirect::to("/?saved=added").into_response(),
        Err(e) => match e.user_message() {
            Some(message) => {
                warn!(field_error = %e, "add rejected");
                Html(views::add_page(&form, Some(message))).into_response()
            }
            None => storage_failure(e),
        },
    }
}

/// `GET /edit/{id}` — edit form pre-filled from the stored contact.
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.service.get(id).await {
        Ok(contact) => {
            let form = ContactForm::from_contact(&contact);
            Html(views::edit_page(id, &form, None)).into_response()
        }
        Err(StoreError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Html(views::not_found_page(id))).into_response()
        }
        Err(e) => storage_failure(e),
    }
}

/// `POST /edit/{id}` — update a contact or re-render the form with the error.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ContactForm>,
) -> Response {
    match state.service.update(id, &form).await {
        Ok(_) => Redirect::to("/?saved=updated").into_response(),
        Err(StoreError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, Html(views::not_found_page(id))).into_response()
        }
        Err(e) => match e.user_message() {
            Some(message) => {
                warn!(id, field_error = %e, "edit rejected");
                Html(views::edit_page(id, &form, Some(message))).into_response()
            }
            None => storage_failure(e),
        },
    }
}

/// `GET /delete/{id}` — delete (idempotent) and redirect to the list.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.service.delete(id).await {
        Ok(()) => Redirect::to("/?saved=deleted").into_response(),
        Err(e) => storage_failure(e),
    }
}

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "contact-book"}))
}

/// 500 response for faults the user cannot correct.
fn storage_failure(e: StoreError) -> Response {
    error!(error = %e, "storage failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(views::server_error_page()),
    )
        .into_response()
}
