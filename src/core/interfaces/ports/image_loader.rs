use anyhow::Result;

use crate::core::models::ImageSource;

pub trait ImageLoader {
    fn load(&self, path: &str) -> Result<ImageSource>;
}
