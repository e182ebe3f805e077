#[path = "routes/health_check.rs"]
mod health_check_route;
mod contact;

pub use contact::{dispatch, reject_malformed_submission, send_email, SendEmailError};
pub use health_check_route::health_check;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
