//! Conversion pipeline - resolve, then transform

use std::sync::Arc;

use domain::{ConversionRequest, ConversionResult};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::services::{InputResolver, OutputTransformer};

/// Entry point for a conversion request
#[derive(Debug)]
pub struct ConversionService {
    resolver: Arc<InputResolver>,
    transformer: Arc<OutputTransformer>,
}

impl ConversionService {
    pub fn new(resolver: Arc<InputResolver>, transformer: Arc<OutputTransformer>) -> Self {
        Self {
            resolver,
            transformer,
        }
    }

    /// Run a conversion
    ///
    /// A resolution failure is returned as an error. A transformation failure
    /// still yields the resolved text, with the failure listed as a warning.
    #[instrument(
        skip(self, request),
        fields(
            input = %request.input_kind(),
            output = %request.output_kind,
            language = %request.language
        )
    )]
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ApplicationError> {
        let text = self.resolver.resolve(&request.input).await?;

        match self
            .transformer
            .transform(&text, request.output_kind, request.language)
            .await
        {
            Ok(output) => {
                info!(chars = text.char_count(), "Conversion completed");
                Ok(ConversionResult::completed(text, output))
            },
            Err(e) => {
                warn!(error = %e, "Output transformation failed");
                Ok(ConversionResult::degraded(text, e.to_string()))
            },
        }
    }
}
