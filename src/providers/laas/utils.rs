//! Header construction for LaaS requests.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::LaasError;

/// `project` header carrying the tenant/project code.
const HEADER_PROJECT: HeaderName = HeaderName::from_static("project");
/// `apiKey` header; header names are case-insensitive on the wire.
const HEADER_API_KEY: HeaderName = HeaderName::from_static("apikey");

/// Build the headers the LaaS API authenticates with.
pub(crate) fn build_headers(project_code: &str, api_key: &str) -> Result<HeaderMap, LaasError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        HEADER_PROJECT,
        HeaderValue::from_str(project_code)
            .map_err(|e| LaasError::Configuration(format!("invalid project code header: {e}")))?,
    );
    headers.insert(
        HEADER_API_KEY,
        HeaderValue::from_str(api_key)
            .map_err(|e| LaasError::Configuration(format!("invalid API key header: {e}")))?,
    );
    Ok(headers)
}
