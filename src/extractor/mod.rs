pub mod archive_extractor;
pub mod strategy;

pub use archive_extractor::{ExtractionEvent, ExtractionReport, Extractor};
pub use strategy::{ExternalTool, ExtractionStrategy};
