//! Registrar that records submissions in the log

use super::request::RegistrationRequest;
use super::traits::Registrar;
use crate::state::FieldName;
use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

/// Accepts every request and emits it as a structured log event
#[derive(Debug, Clone, Default)]
pub struct LoggingRegistrar;

#[async_trait]
impl Registrar for LoggingRegistrar {
    async fn register(&self, request: &RegistrationRequest) -> Result<Uuid> {
        let payload = serde_json::to_string(&request.redacted())
            .context("Failed to encode registration request")?;

        tracing::info!(
            request_id = %request.id,
            username = request.field(FieldName::Username).unwrap_or_default(),
            %payload,
            "Registering user"
        );

        Ok(request.id)
    }
}
