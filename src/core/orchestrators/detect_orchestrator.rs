use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::core::errors::DetectError;
use crate::core::extractors::{extract_isbn, LotteryExtractor};
use crate::core::interfaces::adapters::AnnotationClientProvider;
use crate::core::interfaces::ports::ImageLoader;
use crate::core::models::{AnnotationRequest, AnnotationResult, DetectSettings, TextAnnotation};
use crate::global_constants;

pub struct DetectOrchestrator {
    image_loader: Arc<dyn ImageLoader>,
    client_provider: Arc<dyn AnnotationClientProvider>,
    lottery_extractor: LotteryExtractor,
}

impl DetectOrchestrator {
    pub fn build(
        image_loader: Arc<dyn ImageLoader>,
        client_provider: Arc<dyn AnnotationClientProvider>,
        settings: &DetectSettings,
    ) -> Result<Self> {
        let lottery_extractor =
            LotteryExtractor::new(settings.lottery_strategy, settings.lottery_match_unit)?;

        Ok(Self {
            image_loader,
            client_provider,
            lottery_extractor,
        })
    }

    /// Prints every annotation with its position. A service error is printed
    /// to `out` and ends the dump without failing.
    pub fn detect_text(&self, path: &str, out: &mut dyn Write) -> Result<()> {
        match self.request_text_annotations(path)? {
            AnnotationResult::Failed(message) => {
                log::warn!(
                    "{} Service rejected {}: {}",
                    global_constants::LOG_TAG_VISION,
                    path,
                    message
                );
                writeln!(out, "{}{}", global_constants::OUTPUT_PREFIX_ERROR, message)?;
            }
            AnnotationResult::Annotations(annotations) => {
                for annotation in &annotations {
                    writeln!(
                        out,
                        "{}{}",
                        global_constants::OUTPUT_PREFIX_TEXT,
                        annotation.description
                    )?;
                    writeln!(
                        out,
                        "{}{}",
                        global_constants::OUTPUT_PREFIX_POSITION,
                        annotation.bounding_poly
                    )?;
                }
            }
        }
        Ok(())
    }

    pub fn detect_isbn(
        &self,
        path: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Option<String>> {
        let annotations = self.annotations_or_request_error(path, err)?;

        let isbn = extract_isbn(&annotations);
        match &isbn {
            Some(value) => {
                log::info!("{} Found ISBN {}", global_constants::LOG_TAG_ISBN, value);
                writeln!(out, "{}{}", global_constants::OUTPUT_PREFIX_ISBN_RETURN, value)?;
            }
            None => log::info!("{} No ISBN in {}", global_constants::LOG_TAG_ISBN, path),
        }
        Ok(isbn)
    }

    pub fn detect_lotto(&self, path: &str, err: &mut dyn Write) -> Result<Option<String>> {
        let annotations = self.annotations_or_request_error(path, err)?;

        let numbers = self
            .lottery_extractor
            .extract(&annotations, err)
            .context("Failed to write lottery diagnostics")?;
        log::info!(
            "{} {} annotations scanned, found: {}",
            global_constants::LOG_TAG_LOTTO,
            annotations.len(),
            numbers.is_some()
        );
        Ok(numbers)
    }

    fn annotations_or_request_error(
        &self,
        path: &str,
        err: &mut dyn Write,
    ) -> Result<Vec<TextAnnotation>> {
        match self.request_text_annotations(path)? {
            AnnotationResult::Annotations(annotations) => Ok(annotations),
            AnnotationResult::Failed(message) => {
                writeln!(err, "{}{}", global_constants::OUTPUT_PREFIX_ERROR, message)?;
                Err(DetectError::Request(message).into())
            }
        }
    }

    fn request_text_annotations(&self, path: &str) -> Result<AnnotationResult> {
        let image = self.image_loader.load(path)?;
        let request = AnnotationRequest::text_detection(image);

        let client = self.client_provider.connect()?;
        log::debug!(
            "{} Requesting {:?} for {}",
            global_constants::LOG_TAG_VISION,
            request.feature,
            path
        );
        client.annotate(&request)
    }
}
