use std::fmt;

/// Backend collections the store mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Dishes,
    Comments,
    Promotions,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Dishes, Resource::Comments, Resource::Promotions];

    /// Path segment appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dishes => "dishes",
            Self::Comments => "comments",
            Self::Promotions => "promotions",
        }
    }

    /// Whether a fetch flips the slice into its loading state first.
    ///
    /// Comments are fetched without a loading marker.
    pub fn tracks_loading(self) -> bool {
        !matches!(self, Self::Comments)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
