//! Application State
//!
//! The single in-memory state object, the typed actions that mutate it,
//! and the startup load sequence. The DOM adapter in `app.rs` translates
//! raw events into [`Action`]s; nothing in here touches the DOM.

use std::future::Future;

use crate::catalog::FetchError;
use crate::models::{Filter, Place, Preferences};
use crate::storage::{BlobPort, PreferenceStore};

/// Everything the renderer needs: catalog, flags, active filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Catalog in remote order; empty until the fetch resolves
    pub places: Vec<Place>,
    pub prefs: Preferences,
    pub filter: Filter,
}

/// A user-visible state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFilter(Filter),
    ToggleFave(String),
    ToggleVisited(String),
}

/// Apply one action to the state
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::SetFilter(filter) => state.filter = filter,
        Action::ToggleFave(id) => state.prefs.toggle_fave(&id),
        Action::ToggleVisited(id) => state.prefs.toggle_visited(&id),
    }
}

/// Run the startup load sequence: fetch the catalog, then overlay any
/// previously saved preference flags onto the fresh state.
///
/// Fetch and store are injected so tests can drive this without a
/// browser. A fetch failure propagates; the caller keeps the empty
/// bootstrap state so the error message renders.
pub async fn initialize<F, Fut, P>(
    fetch: F,
    store: &PreferenceStore<P>,
) -> Result<AppState, FetchError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Place>, FetchError>>,
    P: BlobPort,
{
    let places = fetch().await?;
    let prefs = store.load().unwrap_or_default();
    Ok(AppState {
        places,
        prefs,
        filter: Filter::All,
    })
}
