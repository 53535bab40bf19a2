//! Catalog and Preference Models
//!
//! Data structures for the remote place catalog and the locally
//! persisted per-place flags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One catalog entry describing a location (matches the remote JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    /// Display name
    pub place: String,
    pub description: String,
    pub location: String,
    pub url: String,
    pub img: String,
}

/// Per-place boolean flags keyed by place id; a missing key reads as false
pub type FlagMap = HashMap<String, bool>;

/// The persisted preference flags. This is exactly the blob written to
/// localStorage; the catalog and the active filter are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub faves: FlagMap,
    pub visited: FlagMap,
}

impl Preferences {
    pub fn is_fave(&self, id: &str) -> bool {
        self.faves.get(id).copied().unwrap_or(false)
    }

    pub fn is_visited(&self, id: &str) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }

    /// Flip the favourite flag for a place, creating the key if absent
    pub fn toggle_fave(&mut self, id: &str) {
        let flag = self.faves.entry(id.to_owned()).or_insert(false);
        *flag = !*flag;
    }

    /// Flip the visited flag for a place, creating the key if absent
    pub fn toggle_visited(&mut self, id: &str) {
        let flag = self.visited.entry(id.to_owned()).or_insert(false);
        *flag = !*flag;
    }
}

/// Named view filter selecting a subset of places
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Faves,
    Visited,
    NotVisited,
}

impl Filter {
    /// Wire name carried by the filter radio buttons
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Faves => "faves",
            Filter::Visited => "visited",
            Filter::NotVisited => "notVisited",
        }
    }

    /// Parse a radio value. Unrecognized values fall back to `All` so a
    /// tampered control can never break the render pipeline.
    pub fn from_param(value: &str) -> Filter {
        match value {
            "faves" => Filter::Faves,
            "visited" => Filter::Visited,
            "notVisited" => Filter::NotVisited,
            _ => Filter::All,
        }
    }
}
