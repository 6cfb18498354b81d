pub mod error;
pub mod fetch;
pub mod matcher;
pub mod models;
pub mod output;
pub mod processor;
pub mod sample;

pub use error::CitemapError;
pub use fetch::{ApiClient, ApiClientBuilder, FetchError, ResponseSource, fetch_data};
pub use matcher::find_citations;
pub use models::{Citation, ProcessedItem, ResponseItem, Source, SourceId};
pub use output::{DEFAULT_OUTPUT_PATH, read_records, render_json, write_output};
pub use processor::{process_api_data, process_mock_data, process_records};
pub use sample::sample_dataset;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_accessible_from_crate_root() {
        let processed = process_mock_data(&sample_dataset());
        let json = render_json(&processed).unwrap();
        assert!(json.contains("https://orders.brikoven.com"));
    }

    #[test]
    fn types_accessible_from_crate_root() {
        let source = Source::new("1", "context", "https://a.test");
        let citations = find_citations("context", std::slice::from_ref(&source));
        assert_eq!(citations, vec![Citation::new(SourceId::new("1"), "https://a.test")]);
    }
}
