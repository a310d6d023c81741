use serde::{Deserialize, Serialize};

/// A promotion shown alongside the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub label: String,
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}
