//! Batch processing of response records into processed items.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CitemapError;
use crate::fetch::{FetchError, ResponseSource};
use crate::matcher::find_citations;
use crate::models::{ProcessedItem, ResponseItem};

/// Finds citations for a single response item.
pub fn process_item(item: &ResponseItem) -> ProcessedItem {
    ProcessedItem {
        response: item.response.clone(),
        citations: find_citations(&item.response, &item.sources),
    }
}

/// Processes already-typed response items, preserving their order.
pub fn process_mock_data(items: &[ResponseItem]) -> Vec<ProcessedItem> {
    items.iter().map(process_item).collect()
}

/// Validates generic JSON records as response items.
///
/// # Errors
///
/// Returns `CitemapError::MalformedRecord` for the first record that is
/// missing a required field or has a field of the wrong type.
pub fn parse_records(records: &[Value]) -> Result<Vec<ResponseItem>, CitemapError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            ResponseItem::deserialize(record).map_err(|e| CitemapError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Validates and processes generic JSON records.
pub fn process_records(records: &[Value]) -> Result<Vec<ProcessedItem>, CitemapError> {
    let items = parse_records(records)?;
    Ok(process_mock_data(&items))
}

/// Fetches records from `source` and processes them.
///
/// An empty fetch yields `Ok(vec![])`; a failed fetch yields
/// `CitemapError::Fetch`. A body that is not an array of records is a data
/// shape problem and yields `CitemapError::MalformedRecord`.
pub fn process_api_data(source: &impl ResponseSource) -> Result<Vec<ProcessedItem>, CitemapError> {
    let records = match source.fetch_records() {
        Ok(records) => records,
        Err(FetchError::UnexpectedBody { found }) => {
            return Err(CitemapError::MalformedRecord {
                index: 0,
                reason: format!("expected a JSON array of records, got {found}"),
            });
        }
        Err(e) => return Err(e.into()),
    };
    if records.is_empty() {
        info!("API returned no records");
        return Ok(Vec::new());
    }

    let processed = process_records(&records)?;
    debug!(items = processed.len(), "processed API records");
    Ok(processed)
}
