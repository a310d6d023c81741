//! Reducer-style state updates + side-effect commands.
//!
//! `Store::dispatch` runs an [`Action`] through the reducer and executes the
//! [`Command`](command::Command)s it returns. Fetches run on spawned tokio
//! tasks and report back over an action channel that
//! [`Store::poll_action_messages`] drains.

mod action;
mod command;
mod reducer;
mod runtime;
mod selectors;
mod state;

pub use action::{Action, SliceAction};
pub use command::Command;
pub use state::{AppState, Slice, SliceStatus};

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{DishId, Leader, NewComment, Resource};
use crate::infra::http::CollectionSource;

/// The single state container for a session.
pub struct Store {
    state: AppState,
    source: Arc<dyn CollectionSource>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    in_flight: Vec<JoinHandle<()>>,
}

impl Store {
    pub fn new(source: Arc<dyn CollectionSource>, leaders: Vec<Leader>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::with_leaders(leaders),
            source,
            action_tx,
            action_rx,
            in_flight: Vec::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn fetch_dishes(&mut self) {
        self.dispatch(Action::Fetch(Resource::Dishes));
    }

    /// Must be called from within a tokio runtime.
    pub fn fetch_comments(&mut self) {
        self.dispatch(Action::Fetch(Resource::Comments));
    }

    /// Must be called from within a tokio runtime.
    pub fn fetch_promos(&mut self) {
        self.dispatch(Action::Fetch(Resource::Promotions));
    }

    /// Initial page load: requests every remote collection once.
    pub fn mount(&mut self) {
        for resource in Resource::ALL {
            self.dispatch(Action::Fetch(resource));
        }
    }

    pub fn add_comment(
        &mut self,
        dish_id: DishId,
        rating: u8,
        author: impl Into<String>,
        comment: impl Into<String>,
    ) {
        self.dispatch(Action::AddComment(NewComment {
            dish_id,
            rating,
            author: author.into(),
            comment: comment.into(),
        }));
    }

    /// Applies every fetch result that has arrived so far.
    pub fn poll_action_messages(&mut self) -> bool {
        // A finished task has already sent its action, so pruning first
        // cannot lose a result.
        self.in_flight.retain(|handle| !handle.is_finished());
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits for all in-flight fetches and applies their results in arrival
    /// order. A request that never resolves keeps this pending.
    pub async fn settle(&mut self) {
        while !self.in_flight.is_empty() {
            let handles = std::mem::take(&mut self.in_flight);
            for result in futures::future::join_all(handles).await {
                if let Err(err) = result {
                    log::warn!("fetch task ended abnormally: {err}");
                }
            }
            self.poll_action_messages();
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
