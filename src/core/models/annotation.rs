use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    TextDetection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Content(Vec<u8>),
    Uri(String),
}

impl ImageSource {
    pub fn is_remote_path(path: &str) -> bool {
        ["gs://", "http://", "https://"]
            .iter()
            .any(|scheme| path.starts_with(scheme))
    }
}

/// One image plus the analysis asked of it. Built per invocation and dropped
/// once the response is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRequest {
    pub image: ImageSource,
    pub feature: FeatureType,
}

impl AnnotationRequest {
    pub fn text_detection(image: ImageSource) -> Self {
        Self {
            image,
            feature: FeatureType::TextDetection,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl Vertex {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl BoundingPoly {
    pub fn from_points(points: &[(i32, i32)]) -> Self {
        Self {
            vertices: points.iter().map(|&(x, y)| Vertex::new(x, y)).collect(),
        }
    }
}

impl fmt::Display for BoundingPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", vertex.x, vertex.y)?;
        }
        write!(f, "]")
    }
}

/// A recognized text fragment. Index 0 of a response is the whole block,
/// the rest are single words in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[cfg(test)]
impl TextAnnotation {
    pub fn new(description: impl Into<String>, bounding_poly: BoundingPoly) -> Self {
        Self {
            description: description.into(),
            bounding_poly,
            locale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationResult {
    Annotations(Vec<TextAnnotation>),
    Failed(String),
}
