use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{ContactForm, FieldError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Form handler returned status {status}")]
    Server { status: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} required field(s) missing", .0.len())]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Delivers a validated contact form to wherever leads are collected.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(
        &self,
        form: &ContactForm,
    ) -> Result<(), SubmitError>;
}

/// Validates `form`, then hands it to `submitter`.
///
/// An invalid form never reaches the submitter.
pub async fn submit_contact(
    submitter: &dyn FormSubmitter,
    form: &ContactForm,
) -> Result<(), ContactError> {
    if let Err(errors) = form.validate() {
        warn!(missing = errors.len(), "Contact form failed validation");
        return Err(ContactError::Invalid(errors));
    }

    submitter.submit(form).await?;
    info!(name = %form.name, "Contact request submitted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    // ── stub submitter ───────────────────────────────────────────────────
    // Counts calls and replies with a canned result.
    struct StubSubmitter {
        calls: Arc<AtomicUsize>,
        reply: Result<(), SubmitError>,
    }

    impl StubSubmitter {
        fn new(reply: Result<(), SubmitError>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    calls: Arc::clone(&calls),
                    reply,
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl FormSubmitter for StubSubmitter {
        async fn submit(
            &self,
            _form: &ContactForm,
        ) -> Result<(), SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn complete_form() -> ContactForm {
        ContactForm {
            name: "Dana Reyes".to_string(),
            phone: "210-555-0142".to_string(),
            timeline: "1-2 Months".to_string(),
            proceeds_new_home: "No".to_string(),
            liens: "No".to_string(),
            bedrooms: "4".to_string(),
            bathrooms: "2.5".to_string(),
            sq_ft: "2400".to_string(),
            ..ContactForm::default()
        }
    }

    #[tokio::test]
    async fn valid_form_is_submitted_once() {
        let (stub, calls) = StubSubmitter::new(Ok(()));

        let result = submit_contact(&stub, &complete_form()).await;

        assert_eq!(result, Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_submitter() {
        let (stub, calls) = StubSubmitter::new(Ok(()));
        let form = ContactForm {
            phone: String::new(),
            ..complete_form()
        };

        let result = submit_contact(&stub, &form).await;

        assert!(matches!(result, Err(ContactError::Invalid(ref e)) if e.len() == 1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn server_rejection_is_reported() {
        let (stub, _) = StubSubmitter::new(Err(SubmitError::Server { status: 503 }));

        let result = submit_contact(&stub, &complete_form()).await;

        assert_eq!(
            result,
            Err(ContactError::Submit(SubmitError::Server { status: 503 }))
        );
    }
}
