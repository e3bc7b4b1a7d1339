//! UI components.

pub mod product_section;
pub mod upload_preview;

pub use product_section::ProductSection;
pub use upload_preview::UploadPreview;
