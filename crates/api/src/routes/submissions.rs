//! Intake form routes.
//!
//! Both forms run the same pipeline:
//! decode, validate, store attachment, render, dispatch, release.
//!
//! The pipeline runs on its own task. A client that disconnects drops only
//! the handler, and a started submission still runs to completion or failure.

use axum::{
    Router,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Response,
    routing::post,
};
use tracing::{debug, error, info, warn};

use formalogix_core::attachment::StoredAttachment;
use formalogix_core::render::render;
use formalogix_core::submission::{CONTACT_FORM, FormDescriptor, OFFER_REQUEST_FORM, validate};
use formalogix_shared::{AppError, AppResult};

use crate::AppState;
use crate::extractors::{DecodedForm, INVALID_FORM_MESSAGE, decode_form};
use crate::response::{failure, success};

/// Creates the intake routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact))
        .route("/offer-request", post(offer_request))
}

/// POST `/api/contact`
async fn contact(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    submit(&state, &CONTACT_FORM, multipart).await
}

/// POST `/api/offer-request`
async fn offer_request(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    submit(&state, &OFFER_REQUEST_FORM, multipart).await
}

async fn submit(
    state: &AppState,
    form: &'static FormDescriptor,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let task_state = state.clone();
    let outcome = tokio::spawn(async move { process(&task_state, form, multipart).await })
        .await
        .unwrap_or_else(|e| Err(AppError::Delivery(format!("submission task failed: {e}"))));

    match outcome {
        Ok(()) => {
            info!(form = form.kind.as_str(), "Submission delivered");
            success(form.success_message)
        }
        Err(err) if err.is_client_error() => {
            warn!(
                form = form.kind.as_str(),
                code = err.error_code(),
                error = %err,
                "Submission rejected"
            );
            failure(&err, form.failure_message)
        }
        Err(err) => {
            error!(
                form = form.kind.as_str(),
                code = err.error_code(),
                error = %err,
                "Submission failed"
            );
            failure(&err, form.failure_message)
        }
    }
}

async fn process(
    state: &AppState,
    form: &'static FormDescriptor,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<()> {
    let multipart = multipart.map_err(|e| {
        debug!(error = %e, "Request is not a multipart form");
        AppError::InvalidForm(INVALID_FORM_MESSAGE.to_string())
    })?;

    let DecodedForm { submission, upload } =
        decode_form(multipart, state.attachments.max_bytes()).await?;

    validate(form, &submission)?;

    let attachment = state.attachments.accept(upload, form.upload_prefix).await?;

    info!(
        form = form.kind.as_str(),
        attachment = attachment.is_some(),
        "Submission accepted"
    );

    let email = render(
        form,
        &submission,
        attachment.as_ref().map(StoredAttachment::to_ref),
    );
    let delivered = state.mailer.dispatch(&email).await;

    if let Some(attachment) = attachment {
        attachment.release();
    }

    delivered.map_err(AppError::from)
}

#[cfg(test)]
#[path = "submissions_tests.rs"]
mod tests;
