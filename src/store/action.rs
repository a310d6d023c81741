use crate::domain::{Comment, Dish, FetchError, NewComment, Promotion, Resource};

#[derive(Debug)]
pub enum Action {
    /// Ask the runtime to fetch a collection.
    Fetch(Resource),
    Dishes(SliceAction<Dish>),
    Comments(SliceAction<Comment>),
    Promotions(SliceAction<Promotion>),
    AddComment(NewComment),
}

/// Transitions of a single tri-state slice.
#[derive(Debug)]
pub enum SliceAction<T> {
    Loading,
    /// Replaces the slice's items wholesale.
    Add(Vec<T>),
    Failed(String),
}

impl<T> From<Result<Vec<T>, FetchError>> for SliceAction<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) => Self::Add(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

impl Action {
    /// The loading marker for `resource`.
    pub fn loading(resource: Resource) -> Self {
        match resource {
            Resource::Dishes => Self::Dishes(SliceAction::Loading),
            Resource::Comments => Self::Comments(SliceAction::Loading),
            Resource::Promotions => Self::Promotions(SliceAction::Loading),
        }
    }
}
