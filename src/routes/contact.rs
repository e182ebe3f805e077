use actix_web::{
    error::JsonPayloadError, http::StatusCode, post, web, HttpRequest, HttpResponse,
    ResponseError,
};
use anyhow::Context;

use crate::{
    domain::{Notification, Submission, SubmissionForm},
    email_client::EmailClient,
    routes::error_chain_fmt,
    startup::NotificationRecipient,
};

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("All fields are required")]
    ValidationError(String),
    #[error("Failed to send email")]
    UnreadableBody(String),
    #[error("Failed to send email")]
    DeliveryError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        match self {
            SendEmailError::ValidationError(detail) | SendEmailError::UnreadableBody(detail) => {
                writeln!(f, "Caused by:\n\t{}", detail)?;
            }
            SendEmailError::DeliveryError(_) => {}
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for SendEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            SendEmailError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SendEmailError::UnreadableBody(_) | SendEmailError::DeliveryError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Only the fixed message reaches the caller; causes stay in the logs.
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// A body that cannot be read as a submission fails like a delivery:
/// 500 with the generic message, cause logged only.
pub fn reject_malformed_submission(
    err: JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    tracing::error!(error.message = %err, "Failed to read the contact submission body");
    SendEmailError::UnreadableBody(err.to_string()).into()
}

#[post("/api/send-email")]
#[tracing::instrument(name = "Receiving a contact submission", skip(form, email_client, recipient))]
pub async fn send_email(
    form: web::Json<SubmissionForm>,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<NotificationRecipient>,
) -> Result<HttpResponse, SendEmailError> {
    dispatch(&email_client, &recipient.0, form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Email sent successfully"
    })))
}

/// Validates one submission, renders it and hands it to the mail API.
///
/// A single delivery attempt is made. Nothing is sent unless every field
/// is present.
#[tracing::instrument(
    name = "Dispatching a contact notification",
    skip(email_client, form),
    fields(
        submitter_name = tracing::field::Empty,
        submitter_email = tracing::field::Empty
    )
)]
pub async fn dispatch(
    email_client: &EmailClient,
    recipient: &str,
    form: SubmissionForm,
) -> Result<(), SendEmailError> {
    let submission: Submission = form.try_into().map_err(SendEmailError::ValidationError)?;
    let span = tracing::Span::current();
    span.record(
        "submitter_name",
        &tracing::field::display(submission.name.as_ref()),
    );
    span.record(
        "submitter_email",
        &tracing::field::display(submission.email.as_ref()),
    );

    let notification = Notification::render(&submission);
    email_client
        .send_email(
            recipient,
            &notification.subject,
            &notification.html_body,
            &notification.text_body,
        )
        .await
        .context("Failed to deliver the contact notification")
        .map_err(|e| {
            tracing::error!(error.cause_chain = ?e, "Contact notification was not delivered");
            SendEmailError::DeliveryError(e)
        })
}
