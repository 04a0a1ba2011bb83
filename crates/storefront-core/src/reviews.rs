use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer review normalized from the backend. Immutable once created;
/// the write operations on the reviews endpoint are not exercised by any
/// read view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    /// Display name, `"Anonymous"` when the backend supplies none.
    pub author: String,
    pub verified: bool,
    /// 0–5. The backend omits the rating on some legacy rows; those default
    /// to 5 to match the storefront's historical display behavior.
    pub rating: f64,
    pub body: String,
    /// Present only when the backend timestamp parses as RFC 3339.
    pub posted_at: Option<DateTime<Utc>>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
}
