use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::super::Store;
use super::super::action::{Action, SliceAction};
use crate::domain::Resource;
use crate::infra::http::{self, CollectionSource};

/// Marks the slice loading (where tracked) and spawns the request.
///
/// The terminal `Add`/`Failed` action is sent back over the store's action
/// channel; overlapping fetches for one resource are not deduplicated, so
/// whichever result is applied last wins.
pub fn fetch_collection(store: &mut Store, resource: Resource) {
    if resource.tracks_loading() {
        store.dispatch(Action::loading(resource));
    }

    let source = Arc::clone(&store.source);
    let action_tx = store.action_tx.clone();
    log::info!("fetching {resource}");

    let handle = tokio::spawn(async move {
        let action = match resource {
            Resource::Dishes => Action::Dishes(load(source.as_ref(), resource).await),
            Resource::Comments => Action::Comments(load(source.as_ref(), resource).await),
            Resource::Promotions => Action::Promotions(load(source.as_ref(), resource).await),
        };
        if action_tx.send(action).is_err() {
            log::warn!("store dropped before {resource} arrived");
        }
    });
    store.in_flight.push(handle);
}

async fn load<T: DeserializeOwned>(
    source: &dyn CollectionSource,
    resource: Resource,
) -> SliceAction<T> {
    let result = http::fetch_collection::<T>(source, resource).await;
    match &result {
        Ok(items) => log::info!("fetched {} {resource}", items.len()),
        Err(err) => log::warn!("failed to fetch {resource}: {err}"),
    }
    result.into()
}
