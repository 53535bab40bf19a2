//! Root Component
//!
//! Owns the application state signal, runs the startup load sequence,
//! and translates raw DOM events into typed actions at the boundary.
//! Re-rendering is left to the reactive engine: the listing markup is a
//! memo over the state, and a persistence effect runs after each change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::catalog::{self, PLACES_URL};
use crate::models::Filter;
use crate::render;
use crate::state::{self, reduce, Action, AppState};
use crate::storage::{LocalStoragePort, PreferenceStore};

/// Walk up from an event target to the closest delegated control
fn delegated_id(target: &Element, selector: &str, attr: &str) -> Option<String> {
    target.closest(selector).ok().flatten()?.get_attribute(attr)
}

#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(AppState::default());

    let dispatch = move |action: Action| set_state.update(|s| reduce(s, action));

    // One fetch at startup. On failure the state stays empty, which the
    // renderer already shows as the problem message.
    Effect::new(move |_| {
        spawn_local(async move {
            let store = PreferenceStore::new(LocalStoragePort);
            match state::initialize(|| catalog::fetch_places(PLACES_URL), &store).await {
                Ok(loaded) => set_state.set(loaded),
                Err(err) => log::error!("catalog load failed: {err}"),
            }
        });
    });

    // Listing markup, recomputed on every observable state change
    let markup = Memo::new(move |_| state.with(|s| render::render(s).into_string()));

    // Persist after each render; the store skips writes while the
    // catalog is still empty.
    Effect::new(move |_| {
        state.with(|s| PreferenceStore::new(LocalStoragePort).save(s));
    });

    let on_filter_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        dispatch(Action::SetFilter(Filter::from_param(&value)));
    };

    let on_listing_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if let Some(id) = delegated_id(&target, "[data-save]", "data-save") {
            dispatch(Action::ToggleFave(id));
        } else if let Some(id) = delegated_id(&target, "[data-mark]", "data-mark") {
            dispatch(Action::ToggleVisited(id));
        }
    };

    let filter_option = move |filter: Filter, label: &'static str| {
        view! {
            <label>
                <input
                    type="radio"
                    name="view"
                    value=filter.as_str()
                    prop:checked=move || state.with(|s| s.filter == filter)
                />
                {label}
            </label>
        }
    };

    view! {
        <main>
            <h1>"Wanderlist"</h1>
            <div id="filters" on:change=on_filter_change>
                {filter_option(Filter::All, "All")}
                {filter_option(Filter::Faves, "Faves")}
                {filter_option(Filter::Visited, "Visited")}
                {filter_option(Filter::NotVisited, "Not visited")}
            </div>
            <div id="app" on:click=on_listing_click inner_html=move || markup.get()></div>
        </main>
    }
}
