use std::path::PathBuf;

use anyhow::Result;

use crate::core::errors::DetectError;
use crate::core::interfaces::ports::ImageLoader;
use crate::core::models::ImageSource;
use crate::global_constants;

pub struct FileImageLoader;

impl FileImageLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &str) -> Result<ImageSource> {
        if ImageSource::is_remote_path(path) {
            log::debug!(
                "{} Passing remote image through by URI: {}",
                global_constants::LOG_TAG_LOADER,
                path
            );
            return Ok(ImageSource::Uri(path.to_string()));
        }

        let bytes = std::fs::read(path).map_err(|source| DetectError::Io {
            path: PathBuf::from(path),
            source,
        })?;

        match image::guess_format(&bytes) {
            Ok(format) => log::debug!(
                "{} Read {} bytes of {:?} from {}",
                global_constants::LOG_TAG_LOADER,
                bytes.len(),
                format,
                path
            ),
            Err(_) => log::warn!(
                "{} Unrecognized image format in {}, sending as-is",
                global_constants::LOG_TAG_LOADER,
                path
            ),
        }

        Ok(ImageSource::Content(bytes))
    }
}
