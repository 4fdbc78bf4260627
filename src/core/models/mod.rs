mod annotation;
mod detect_settings;

pub use annotation::{
    AnnotationRequest, AnnotationResult, BoundingPoly, FeatureType, ImageSource, TextAnnotation,
    Vertex,
};
pub use detect_settings::{DetectSettings, LotteryMatchUnit, LotteryStrategy};
