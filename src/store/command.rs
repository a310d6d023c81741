use crate::domain::Resource;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchCollection { resource: Resource },
}
