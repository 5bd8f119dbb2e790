//! Parsing schema-constrained output into typed values.

use crate::{StructuredGeneration, StructuredRequest};
use serde::de::DeserializeOwned;
use storyweaver_core::Validate;
use storyweaver_error::{JsonError, StoryweaverResult};
use tracing::{debug, instrument};

/// Run a structured generation and decode the answer as `T`.
///
/// The provider's text must be a JSON document that deserializes into `T`
/// and passes [`Validate`]. Anything else is an error; there is no
/// best-effort recovery of partially conforming output.
#[instrument(skip_all, fields(schema = %req.schema_name(), provider = generator.provider_name()))]
pub async fn generate_validated<T, G>(generator: &G, req: &StructuredRequest) -> StoryweaverResult<T>
where
    T: DeserializeOwned + Validate,
    G: StructuredGeneration + ?Sized,
{
    let text = generator.generate_structured(req).await?;
    debug!(length = text.len(), "Received structured output");

    let value: T = serde_json::from_str(&text).map_err(|e| JsonError::new(e.to_string()))?;
    value.validate()?;
    Ok(value)
}
