use crate::domain::{Comment, Dish, Leader, Promotion};

/// Where a slice sits in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceStatus {
    /// Nothing requested or received yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// One remotely-fetched collection plus its loading/error markers.
///
/// Fields are only changed by the reducer, which keeps `is_loading` and
/// `error_message` mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    is_loading: bool,
    error_message: Option<String>,
    items: Vec<T>,
    has_loaded: bool,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error_message: None,
            items: Vec::new(),
            has_loaded: false,
        }
    }
}

impl<T> Slice<T> {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> SliceStatus {
        if self.is_loading {
            SliceStatus::Loading
        } else if self.error_message.is_some() {
            SliceStatus::Failed
        } else if self.has_loaded {
            SliceStatus::Ready
        } else {
            SliceStatus::Idle
        }
    }

    pub(crate) fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    pub(crate) fn replace_items(&mut self, items: Vec<T>) {
        self.is_loading = false;
        self.error_message = None;
        self.items = items;
        self.has_loaded = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.is_loading = false;
        self.error_message = Some(message);
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub dishes: Slice<Dish>,
    pub comments: Slice<Comment>,
    pub promotions: Slice<Promotion>,
    /// Seeded at construction; never fetched.
    pub leaders: Vec<Leader>,
}

impl AppState {
    pub fn with_leaders(leaders: Vec<Leader>) -> Self {
        Self {
            leaders,
            ..Default::default()
        }
    }
}
