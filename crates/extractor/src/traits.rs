use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::composer::EvaluationContext;
use schema::SchemaDescriptor;

/// The external generation service: best effort, not guaranteed valid.
/// An `Ok` value is an untrusted candidate object; whether it satisfies the
/// descriptor is for schema validation to decide, not the extractor.
/// `Err` means the service itself was unreachable or returned garbage that
/// is not JSON at all.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Transform (context, descriptor) into a candidate object.
    async fn generate(
        &self,
        context: &EvaluationContext,
        descriptor: &SchemaDescriptor,
    ) -> Result<Value>;

    /// Get the provider name
    fn name(&self) -> &str;
}
