use serde::{Deserialize, Serialize};

/// The authenticated user; absence means anonymous. At most one principal is
/// active at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}
