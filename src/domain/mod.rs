//! Domain types for the menu store
//! Records served by the backend plus the errors raised while fetching them.

pub mod comment;
pub mod dish;
pub mod error;
pub mod leader;
pub mod promotion;
pub mod resource;

pub use comment::*;
pub use dish::*;
pub use error::*;
pub use leader::*;
pub use promotion::*;
pub use resource::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_dated(date: &str) -> Comment {
        Comment {
            id: 0,
            dish_id: 0,
            rating: 5,
            comment: "Imagine all the eatables, living in conFusion!".into(),
            author: "John Lemon".into(),
            date: date.into(),
        }
    }

    #[test]
    fn test_comment_uses_camel_case_dish_id() {
        let json = r#"{
            "id": 3,
            "dishId": 1,
            "rating": 4,
            "comment": "Eat it, just eat it!",
            "author": "Michael Jaikishan",
            "date": "2015-02-13T17:57:28.556094Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.dish_id, 1);
        assert_eq!(comment.rating, 4);

        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["dishId"], 1);
        assert!(value.get("dish_id").is_none());
    }

    #[test]
    fn test_dish_label_and_featured_default() {
        let json = r#"{
            "id": 0,
            "name": "Uthappizza",
            "image": "images/uthappizza.png",
            "category": "mains",
            "price": "4.99",
            "description": "A unique combination of Indian Uthappam and Italian pizza."
        }"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.label, "");
        assert!(!dish.featured);
    }

    #[test]
    fn test_comment_display_date() {
        assert_eq!(
            comment_dated("2012-10-16T17:57:28.556094Z").display_date(),
            "Oct 16, 2012"
        );
        assert_eq!(comment_dated("2014-09-05").display_date(), "Sep 05, 2014");
        assert_eq!(comment_dated("yesterday").display_date(), "yesterday");
    }

    #[test]
    fn test_fetch_error_messages() {
        let status = FetchError::Status {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(status.to_string(), "Error 404: Not Found");
        let unregistered = FetchError::Status {
            status: 599,
            status_text: String::new(),
        };
        assert_eq!(unregistered.to_string(), "Error 599");
        assert_eq!(
            FetchError::Network("connection refused".into()).to_string(),
            "connection refused"
        );
        assert!(
            FetchError::Parse("expected value".into())
                .to_string()
                .starts_with("Invalid response body")
        );
    }

    #[test]
    fn test_resource_paths_and_loading_asymmetry() {
        assert_eq!(Resource::Dishes.path(), "dishes");
        assert_eq!(Resource::Promotions.to_string(), "promotions");
        assert!(Resource::Dishes.tracks_loading());
        assert!(Resource::Promotions.tracks_loading());
        assert!(!Resource::Comments.tracks_loading());
    }
}
