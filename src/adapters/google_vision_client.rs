use anyhow::{Context, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::errors::DetectError;
use crate::core::interfaces::adapters::{AnnotationClient, AnnotationClientProvider};
use crate::core::models::{
    AnnotationRequest, AnnotationResult, DetectSettings, FeatureType, ImageSource, TextAnnotation,
};
use crate::global_constants;

#[derive(Serialize)]
struct BatchAnnotateImagesRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: WireImage,
    features: Vec<WireFeature>,
}

#[derive(Serialize)]
struct WireImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<WireImageSource>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireImageSource {
    image_uri: String,
}

#[derive(Serialize)]
struct WireFeature {
    #[serde(rename = "type")]
    feature_type: FeatureType,
}

#[derive(Deserialize)]
struct BatchAnnotateImagesResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    #[serde(default)]
    error: Option<WireStatus>,
}

#[derive(Deserialize)]
struct WireErrorEnvelope {
    error: WireStatus,
}

#[derive(Deserialize)]
struct WireStatus {
    #[serde(default)]
    message: String,
}

fn build_request_body(request: &AnnotationRequest) -> BatchAnnotateImagesRequest {
    let image = match &request.image {
        ImageSource::Content(bytes) => WireImage {
            content: Some(base64::engine::general_purpose::STANDARD.encode(bytes)),
            source: None,
        },
        ImageSource::Uri(uri) => WireImage {
            content: None,
            source: Some(WireImageSource {
                image_uri: uri.clone(),
            }),
        },
    };

    BatchAnnotateImagesRequest {
        requests: vec![AnnotateImageRequest {
            image,
            features: vec![WireFeature {
                feature_type: request.feature,
            }],
        }],
    }
}

fn parse_response_body(body: &str) -> Result<AnnotationResult> {
    let batch: BatchAnnotateImagesResponse = serde_json::from_str(body)
        .map_err(|e| DetectError::Transport(format!("undecodable response: {}", e)))?;

    // One image per call, so only the first response is meaningful.
    let Some(response) = batch.responses.into_iter().next() else {
        return Ok(AnnotationResult::Annotations(Vec::new()));
    };

    Ok(match response.error {
        Some(status) => AnnotationResult::Failed(status.message),
        None => AnnotationResult::Annotations(response.text_annotations),
    })
}

fn describe_http_failure(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<WireErrorEnvelope>(body) {
        Ok(envelope) => format!("HTTP {}: {}", status, envelope.error.message),
        Err(_) => format!("HTTP {}", status),
    }
}

pub struct GoogleVisionClientProvider {
    api_endpoint: String,
    api_key: Option<String>,
}

impl GoogleVisionClientProvider {
    pub fn from_settings(settings: &DetectSettings) -> Self {
        Self {
            api_endpoint: settings.api_endpoint.clone(),
            api_key: settings.api_key.clone(),
        }
    }

    fn construct_request_url(&self) -> String {
        match &self.api_key {
            Some(key) => format!("{}?key={}", self.api_endpoint, urlencoding::encode(key)),
            None => self.api_endpoint.clone(),
        }
    }
}

impl AnnotationClientProvider for GoogleVisionClientProvider {
    fn connect(&self) -> Result<Box<dyn AnnotationClient>> {
        if self.api_key.is_none() {
            log::warn!(
                "{} No API key configured, set {}",
                global_constants::LOG_TAG_VISION,
                global_constants::ENV_API_KEY
            );
        }

        let http = reqwest::blocking::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        log::debug!(
            "{} Connection opened to {}",
            global_constants::LOG_TAG_VISION,
            self.api_endpoint
        );
        Ok(Box::new(GoogleVisionClient {
            http,
            request_url: self.construct_request_url(),
        }))
    }
}

pub struct GoogleVisionClient {
    http: reqwest::blocking::Client,
    request_url: String,
}

impl AnnotationClient for GoogleVisionClient {
    fn annotate(&self, request: &AnnotationRequest) -> Result<AnnotationResult> {
        let body = build_request_body(request);

        let response = self
            .http
            .post(&self.request_url)
            .json(&body)
            .send()
            .map_err(|e| DetectError::Transport(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| DetectError::Transport(e.to_string()))?;
        log::debug!(
            "{} HTTP {} with {} bytes",
            global_constants::LOG_TAG_VISION,
            status,
            response_text.len()
        );

        if !status.is_success() {
            return Err(DetectError::Transport(describe_http_failure(status, &response_text)).into());
        }

        let result = parse_response_body(&response_text)?;
        if let AnnotationResult::Annotations(annotations) = &result {
            log::info!(
                "{} Received {} text annotations",
                global_constants::LOG_TAG_VISION,
                annotations.len()
            );
        }
        Ok(result)
    }
}

impl Drop for GoogleVisionClient {
    fn drop(&mut self) {
        log::debug!("{} Connection closed", global_constants::LOG_TAG_VISION);
    }
}
