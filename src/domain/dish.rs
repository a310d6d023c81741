use serde::{Deserialize, Serialize};

/// Unique identifier for a dish
pub type DishId = i64;

/// A menu item as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    /// Relative or absolute URI of the dish photo.
    pub image: String,
    pub category: String,
    /// Short badge such as "Hot" or "New"; empty when unlabeled.
    #[serde(default)]
    pub label: String,
    /// Price as the backend formats it (e.g. "4.99").
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    pub description: String,
}
