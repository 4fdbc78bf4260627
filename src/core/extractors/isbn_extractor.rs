use crate::core::models::TextAnnotation;
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsbnScanState {
    Searching,
    Armed,
}

/// Walks annotation texts in order and yields the one right after an
/// `ISBN` marker. Running out of input while armed yields nothing.
#[derive(Debug)]
pub struct IsbnScanner {
    state: IsbnScanState,
}

impl IsbnScanner {
    pub fn new() -> Self {
        Self {
            state: IsbnScanState::Searching,
        }
    }

    pub fn state(&self) -> IsbnScanState {
        self.state
    }

    pub fn feed<'a>(&mut self, text: &'a str) -> Option<&'a str> {
        match self.state {
            IsbnScanState::Armed => Some(text),
            IsbnScanState::Searching => {
                if is_isbn_marker(text) {
                    log::debug!("{} Marker found, arming", global_constants::LOG_TAG_ISBN);
                    self.state = IsbnScanState::Armed;
                }
                None
            }
        }
    }
}

impl Default for IsbnScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn is_isbn_marker(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(global_constants::ISBN_MARKER)
}

pub fn extract_isbn(annotations: &[TextAnnotation]) -> Option<String> {
    let mut scanner = IsbnScanner::new();

    for annotation in annotations {
        if let Some(value) = scanner.feed(&annotation.description) {
            return Some(value.to_string());
        }
    }

    if scanner.state() == IsbnScanState::Armed {
        log::debug!(
            "{} Marker was the last annotation, nothing follows it",
            global_constants::LOG_TAG_ISBN
        );
    }
    None
}
