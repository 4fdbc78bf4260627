use anyhow::Result;

use crate::core::models::{AnnotationRequest, AnnotationResult};

/// A live connection to the annotation service. Dropping it releases the
/// connection.
pub trait AnnotationClient {
    fn annotate(&self, request: &AnnotationRequest) -> Result<AnnotationResult>;
}

pub trait AnnotationClientProvider {
    fn connect(&self) -> Result<Box<dyn AnnotationClient>>;
}
