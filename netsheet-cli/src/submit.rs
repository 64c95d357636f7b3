//! Contact form delivery over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use netsheet_core::{
    ContactError, ContactForm, FieldError, FormSubmitter, SubmitError, submit_contact,
};
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::ContactConfig;

#[derive(Debug, Error)]
pub enum SubmitterConfigError {
    #[error("no contact endpoint configured; set [contact] endpoint in seller-tools.toml or pass --endpoint")]
    MissingEndpoint,

    #[error("invalid contact endpoint '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },

    #[error("cannot build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Posts the form as `application/x-www-form-urlencoded`, the way a
/// hosted static-site form handler expects it.
pub struct HttpFormSubmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormSubmitter {
    pub fn new(
        endpoint: Url,
        timeout: Duration,
    ) -> Result<Self, SubmitterConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Builds a submitter from `[contact]`, with `endpoint` overriding the
    /// configured URL.
    pub fn from_config(
        config: &ContactConfig,
        endpoint: Option<&str>,
    ) -> Result<Self, SubmitterConfigError> {
        let raw = endpoint
            .or(config.endpoint.as_deref())
            .ok_or(SubmitterConfigError::MissingEndpoint)?;
        let url = Url::parse(raw).map_err(|source| SubmitterConfigError::InvalidEndpoint {
            value: raw.to_string(),
            source,
        })?;
        Self::new(url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Error)]
pub enum SendContactError {
    #[error("contact form is incomplete")]
    Invalid(Vec<FieldError>),

    #[error(transparent)]
    Config(#[from] SubmitterConfigError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Validates the form, then posts it to the configured endpoint.
///
/// Missing fields are reported before the endpoint is resolved.
pub async fn send_contact(
    form: &ContactForm,
    config: &ContactConfig,
    endpoint: Option<&str>,
) -> Result<(), SendContactError> {
    form.validate().map_err(SendContactError::Invalid)?;
    let submitter = HttpFormSubmitter::from_config(config, endpoint)?;

    submit_contact(&submitter, form).await.map_err(|e| match e {
        ContactError::Invalid(errors) => SendContactError::Invalid(errors),
        ContactError::Submit(e) => SendContactError::Submit(e),
    })
}

#[async_trait]
impl FormSubmitter for HttpFormSubmitter {
    async fn submit(
        &self,
        form: &ContactForm,
    ) -> Result<(), SubmitError> {
        debug!(endpoint = %self.endpoint, "Posting contact form");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form.to_url_encoded())
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Server {
                status: status.as_u16(),
            })
        }
    }
}
