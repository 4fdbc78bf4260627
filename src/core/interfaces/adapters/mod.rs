mod annotation_client;

pub use annotation_client::{AnnotationClient, AnnotationClientProvider};
