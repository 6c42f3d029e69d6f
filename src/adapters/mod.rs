// Adapters layer: concrete document providers for the extraction pipeline.

pub mod file_source;
pub mod http_source;

pub use file_source::FileDocumentProvider;
pub use http_source::HttpDocumentProvider;
