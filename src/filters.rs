//! Filter Predicate Registry
//!
//! Maps each named filter to a pure predicate over a place and the
//! current preference flags, for use with `Iterator::filter`.

use crate::models::{Filter, Place, Preferences};

/// A pure view predicate
pub type Predicate = fn(&Place, &Preferences) -> bool;

/// Look up the predicate for a filter
pub fn predicate(filter: Filter) -> Predicate {
    match filter {
        Filter::All => |_, _| true,
        Filter::Faves => |place, prefs| prefs.is_fave(&place.id),
        Filter::Visited => |place, prefs| prefs.is_visited(&place.id),
        Filter::NotVisited => |place, prefs| !prefs.is_visited(&place.id),
    }
}
