pub mod errors;
pub mod extractors;
pub mod interfaces;
pub mod models;
pub mod orchestrators;
