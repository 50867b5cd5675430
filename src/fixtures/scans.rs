//! Scan Fixtures

use serde::Deserialize;

/// Wrapper for scans in YAML
#[derive(Debug, Deserialize)]
pub struct ScansFixture {
    /// SKUs in scan order
    pub scans: Vec<String>,
}
