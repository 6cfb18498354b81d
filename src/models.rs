mod citation;
mod ids;
mod response_item;
mod source;

pub use citation::Citation;
pub use ids::SourceId;
pub use response_item::{ProcessedItem, ResponseItem};
pub use source::Source;
