//! View Renderer
//!
//! Pure function from application state to listing markup. All
//! place-derived text goes through the quote-escaping builder; only the
//! fixed template fragments are appended verbatim.

use crate::filters;
use crate::markup::{Markup, MarkupBuilder};
use crate::models::Place;
use crate::state::AppState;

/// Shown while the catalog is empty, whether still loading or failed
pub const LOAD_PROBLEM: &str =
    "<p><strong>Sorry, there was a problem. Please try again later.</strong></p>";

/// Shown when the active filter matches nothing
pub const NO_PLACES: &str = "<p><strong>No places to show.</strong></p>";

const SAVE_ICON: &str = "<svg viewBox='0 -28 512.00002 512' xmlns='http://www.w3.org/2000/svg'><path d='m471.382812 44.578125c-26.503906-28.746094-62.871093-44.578125-102.410156-44.578125-29.554687 0-56.621094 9.34375-80.449218 27.769531-12.023438 9.300781-22.917969 20.679688-32.523438 33.960938-9.601562-13.277344-20.5-24.660157-32.527344-33.960938-23.824218-18.425781-50.890625-27.769531-80.445312-27.769531-39.539063 0-75.910156 15.832031-102.414063 44.578125-26.1875 28.410156-40.613281 67.222656-40.613281 109.292969 0 43.300781 16.136719 82.9375 50.78125 124.742187 30.992188 37.394531 75.535156 75.355469 127.117188 119.3125 17.613281 15.011719 37.578124 32.027344 58.308593 50.152344 5.476563 4.796875 12.503907 7.4375 19.792969 7.4375 7.285156 0 14.316406-2.640625 19.785156-7.429687 20.730469-18.128907 40.707032-35.152344 58.328125-50.171876 51.574219-43.949218 96.117188-81.90625 127.109375-119.304687 34.644532-41.800781 50.777344-81.4375 50.777344-124.742187 0-42.066407-14.425781-80.878907-40.617188-109.289063zm0 0'/></svg>";

const VISITED_ICON: &str = "<svg viewBox='0 -46 417.81333 417' xmlns='http://www.w3.org/2000/svg'><path d='m159.988281 318.582031c-3.988281 4.011719-9.429687 6.25-15.082031 6.25s-11.09375-2.238281-15.082031-6.25l-120.449219-120.46875c-12.5-12.5-12.5-32.769531 0-45.246093l15.082031-15.085938c12.503907-12.5 32.75-12.5 45.25 0l75.199219 75.203125 203.199219-203.203125c12.503906-12.5 32.769531-12.5 45.25 0l15.082031 15.085938c12.5 12.5 12.5 32.765624 0 45.246093zm0 0'/></svg>";

/// Render the listing area for the current state
pub fn render(state: &AppState) -> Markup {
    let mut b = MarkupBuilder::new();

    if state.places.is_empty() {
        b.lit(LOAD_PROBLEM);
        return b.finish();
    }

    let keep = filters::predicate(state.filter);
    let shown: Vec<&Place> = state
        .places
        .iter()
        .filter(|place| keep(place, &state.prefs))
        .collect();

    if shown.is_empty() {
        b.lit(NO_PLACES);
        return b.finish();
    }

    for place in shown {
        listing(&mut b, place, state);
    }
    b.finish()
}

/// Append one listing fragment
fn listing(b: &mut MarkupBuilder, place: &Place, state: &AppState) {
    let faved = state.prefs.is_fave(&place.id);
    let visited = state.prefs.is_visited(&place.id);

    b.lit("<article><div><header><div class='heading'><h2>")
        .text(&place.place)
        .lit("</h2><div><button aria-label='Save ")
        .text(&place.place)
        .lit("' aria-pressed='")
        .lit(if faved { "true" } else { "false" })
        .lit("' data-save='")
        .text(&place.id)
        .lit("'>")
        .lit(SAVE_ICON)
        .lit("</button><button aria-label='Mark ")
        .text(&place.place)
        .lit(" as visited' aria-pressed='")
        .lit(if visited { "true" } else { "false" })
        .lit("' data-mark='")
        .text(&place.id)
        .lit("'>")
        .lit(VISITED_ICON)
        .lit("</button></div></div><p>")
        .text(&place.description)
        .lit("</p></header><address><p>")
        .text(&place.location)
        .lit("</p><p><a href='")
        .text(&place.url)
        .lit("'>")
        .text(&place.url)
        .lit("</a></p></address></div><img src='")
        .text(&place.img)
        .lit("' alt=''></article>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Filter;

    fn place(id: &str, name: &str) -> Place {
        Place {
            id: id.to_owned(),
            place: name.to_owned(),
            description: format!("About {name}"),
            location: "Rhode Island".to_owned(),
            url: format!("https://example.com/{id}"),
            img: format!("https://example.com/{id}.jpg"),
        }
    }

    fn loaded_state() -> AppState {
        AppState {
            places: vec![
                place("1", "Beavertail"),
                place("2", "Rough Point"),
                place("3", "Mohegan Bluffs"),
            ],
            ..AppState::default()
        }
    }

    #[test]
    fn empty_catalog_renders_problem_message_regardless_of_state() {
        let mut state = AppState::default();
        state.prefs.toggle_fave("1");
        state.filter = Filter::Visited;
        assert_eq!(render(&state).as_str(), LOAD_PROBLEM);
    }

    #[test]
    fn all_filter_renders_one_fragment_per_place_in_order() {
        let out = render(&loaded_state()).into_string();
        assert_eq!(out.matches("<article>").count(), 3);

        let first = out.find("Beavertail").unwrap();
        let second = out.find("Rough Point").unwrap();
        let third = out.find("Mohegan Bluffs").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn faves_filter_keeps_only_flagged_places() {
        let mut state = loaded_state();
        state.prefs.toggle_fave("2");
        state.filter = Filter::Faves;

        let out = render(&state).into_string();
        assert_eq!(out.matches("<article>").count(), 1);
        assert!(out.contains("Rough Point"));
        assert!(!out.contains("Beavertail"));
    }

    #[test]
    fn zero_matches_renders_no_places_message() {
        let mut state = loaded_state();
        state.filter = Filter::Faves;
        assert_eq!(render(&state).as_str(), NO_PLACES);
    }

    #[test]
    fn render_is_idempotent() {
        let mut state = loaded_state();
        state.prefs.toggle_visited("1");
        state.filter = Filter::NotVisited;
        assert_eq!(render(&state), render(&state));
    }

    #[test]
    fn toggle_state_is_reflected_in_aria_pressed() {
        let mut state = loaded_state();
        state.prefs.toggle_fave("1");
        state.prefs.toggle_visited("1");

        let out = render(&state).into_string();
        assert!(out.contains("aria-pressed='true' data-save='1'"));
        assert!(out.contains("aria-pressed='true' data-mark='1'"));
        assert!(out.contains("aria-pressed='false' data-save='2'"));
        assert!(out.contains("aria-pressed='false' data-mark='2'"));
    }

    #[test]
    fn quotes_in_place_text_never_appear_raw() {
        let mut state = loaded_state();
        state.places = vec![place("1", r#"Park's "End""#)];

        let out = render(&state).into_string();
        assert!(out.contains("aria-label='Save Park&apos;s &quot;End&quot;'"));
        assert!(!out.contains(r#"Park's"#));
        assert!(!out.contains(r#""End""#));
    }

    #[test]
    fn one_place_catalog_end_to_end() {
        let mut state = AppState::default();
        state.places = vec![place("1", "Park's End")];

        let out = render(&state).into_string();
        assert_eq!(out.matches("<article>").count(), 1);
        assert!(out.contains("aria-pressed='false' data-save='1'"));
        assert!(out.contains("<h2>Park&apos;s End</h2>"));
    }

    #[test]
    fn visited_place_hidden_by_not_visited_filter() {
        let mut state = AppState::default();
        state.places = vec![place("1", "Park's End")];
        state.prefs.toggle_visited("1");
        state.filter = Filter::NotVisited;

        assert_eq!(render(&state).as_str(), NO_PLACES);
    }
}
