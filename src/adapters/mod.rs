mod file_image_loader;
mod google_vision_client;

pub use file_image_loader::FileImageLoader;
pub use google_vision_client::GoogleVisionClientProvider;
