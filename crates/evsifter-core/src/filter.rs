//! Structured relay filters.
//!
//! Matching rules:
//! - Conditions inside one filter are AND-ed; a `None` field is no constraint.
//! - `Some(vec![])` constrains to the empty set (matches nothing).
//! - Tag conditions are keyed `#<letter>` and match when any tag with that
//!   name carries one of the listed values.
//! - `since` / `until` are inclusive.
//! - A list of filters (`Filters`) matches when any filter matches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};
use crate::event::Event;

/// One relay filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<u64>,
    /// Accepted for wire compatibility; has no effect on matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Tag conditions, keyed `#e`, `#p`, ...
    #[serde(flatten)]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl Filter {
    /// Reject tag keys that are not `#` followed by a single character.
    ///
    /// Unknown top-level fields land in `tags` through `flatten`, so this is
    /// also where typos surface.
    pub fn validate(&self) -> Result<()> {
        for key in self.tags.keys() {
            let mut chars = key.chars();
            let well_formed = chars.next() == Some('#') && chars.next().is_some() && chars.next().is_none();
            if !well_formed {
                return Err(SiftError::BadRequest(format!(
                    "invalid filter key: {key} (expected #<letter>)"
                )));
            }
        }
        Ok(())
    }

    pub fn matches(&self, ev: &Event) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.iter().any(|id| *id == ev.id) {
                return false;
            }
        }
        if let Some(authors) = &self.authors {
            if !authors.iter().any(|a| *a == ev.pubkey) {
                return false;
            }
        }
        if let Some(kinds) = &self.kinds {
            if !kinds.contains(&ev.kind) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if ev.created_at < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if ev.created_at > until {
                return false;
            }
        }

        self.tags.iter().all(|(key, values)| {
            let name = key.strip_prefix('#').unwrap_or(key);
            ev.tag_values(name).any(|v| values.iter().any(|want| want == v))
        })
    }
}

/// OR-combination of filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(pub Vec<Filter>);

impl Filters {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self(filters)
    }

    pub fn validate(&self) -> Result<()> {
        self.0.iter().try_for_each(Filter::validate)
    }

    pub fn matches(&self, ev: &Event) -> bool {
        self.0.iter().any(|f| f.matches(ev))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Filter>> for Filters {
    fn from(filters: Vec<Filter>) -> Self {
        Self(filters)
    }
}
