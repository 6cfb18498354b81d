/// HTTP fetch of response records.
///
/// This module provides a blocking client for the upstream messages API,
/// its error type, and a seam trait for supplying records without a network.
mod client;

pub use client::{
    ApiClient, ApiClientBuilder, DEFAULT_API_URL, FetchError, ResponseSource, fetch_data,
};
