use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::dish::DishId;

/// Unique identifier for a comment
pub type CommentId = i64;

/// Customer feedback attached to a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    /// Dish this comment belongs to. Not checked against the dishes collection.
    pub dish_id: DishId,
    /// 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub author: String,
    /// ISO-8601 timestamp.
    pub date: String,
}

impl Comment {
    /// Date formatted as `Mon DD, YYYY` for listing under a dish.
    ///
    /// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything
    /// else is returned unchanged.
    pub fn display_date(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.date) {
            return parsed.format("%b %d, %Y").to_string();
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return parsed.format("%b %d, %Y").to_string();
        }
        self.date.clone()
    }
}

/// Comment submitted from the feedback form, before the store assigns an id
/// and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub dish_id: DishId,
    pub rating: u8,
    pub author: String,
    pub comment: String,
}

impl NewComment {
    pub fn into_comment(self, id: CommentId, date: String) -> Comment {
        Comment {
            id,
            dish_id: self.dish_id,
            rating: self.rating,
            comment: self.comment,
            author: self.author,
            date,
        }
    }
}
