use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::{info, warn};

use crate::contact::form::{ContactForm, Submission};
use crate::errors::AppError;
use crate::extract::AppForm;
use crate::render::handlers::render_page;
use crate::render::ContactView;
use crate::state::AppState;

/// POST /contact
///
/// Always answers with the full page. A rejected submission is a soft,
/// in-place notice with the typed values kept; an accepted one is handed to
/// the contact sink and the form comes back empty.
pub async fn handle_contact(
    State(state): State<AppState>,
    AppForm(form): AppForm<ContactForm>,
) -> Result<Html<String>, AppError> {
    let submission = form.submit();

    match &submission {
        Submission::Rejected { form } => {
            warn!(missing = ?form.missing_fields(), "Contact form rejected");
        }
        Submission::Accepted { message } => {
            state.contact_sink.deliver(message).await?;
            info!(backend = state.contact_sink.backend(), "Contact form accepted");
        }
    }

    let view = ContactView {
        form: submission.form_after(),
        notification: Some(submission.notification()),
    };
    Ok(Html(render_page(&state, view).await))
}

/// GET /contact
///
/// The page URL after a submission. Reloading or bookmarking it lands on the
/// contact section instead of re-posting.
pub async fn handle_contact_redirect() -> Redirect {
    Redirect::to("/#contact")
}
