use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{PartyRequest, PartyRequestBody};

/// Load and validate a party request from a JSON file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<PartyRequest> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let body: PartyRequestBody = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "loaded party request");
    PartyRequest::from_body(&body)
}
