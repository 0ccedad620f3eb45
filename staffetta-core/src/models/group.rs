use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Gruppo con nome univoco e insieme di membri.
/// I membri non devono essere client registrati.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub members: BTreeSet<String>,
}
