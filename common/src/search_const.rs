//! Fixed constants for the Federal Register documents endpoint.

pub const DOCUMENTS_ENDPOINT: &str = "https://www.federalregister.gov/api/v1/documents.json";

pub const ORDER_RELEVANCE: &str = "relevance";

pub const PER_PAGE_MIN: u32 = 1;
pub const PER_PAGE_MAX: u32 = 1000;

/// Earliest year the API indexes for year-based conditions.
pub const MIN_YEAR: u32 = 1984;

/// Sentinel rendered for document fields the API did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Page-size bounds are enforced where the value is collected, the way the
/// number widget itself clamps. Out-of-range input never reaches a request.
pub fn clamp_per_page(value: u32) -> u32 {
    value.clamp(PER_PAGE_MIN, PER_PAGE_MAX)
}
