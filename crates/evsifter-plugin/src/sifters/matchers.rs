//! Sifters keyed on filters, author and kind.

use std::collections::HashSet;

use evsifter_core::filter::Filters;

use super::unit::{MatchResult, Mode, RejectMessages, SifterUnit};

/// Accepts (Allow) or rejects (Deny) events that match any of `filters`.
pub fn matches_filters(filters: impl Into<Filters>, mode: Mode) -> SifterUnit {
    let filters = filters.into();
    SifterUnit::new(
        move |input| Ok(MatchResult::from(filters.matches(&input.event))),
        mode,
        RejectMessages::new(
            "blocked: event must match filters to be accepted",
            "blocked: event is denied by filters",
        ),
    )
}

fn author_messages() -> RejectMessages {
    RejectMessages::new(
        "blocked: event author is not in the whitelist",
        "blocked: event author is in the blacklist",
    )
}

/// Author predicate given as a function of the pubkey.
pub fn author_matcher<F>(matcher: F, mode: Mode) -> SifterUnit
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    SifterUnit::new(
        move |input| Ok(MatchResult::from(matcher(input.event.pubkey.as_str()))),
        mode,
        author_messages(),
    )
}

/// Author predicate given as a fixed list of pubkeys.
pub fn author_list<I, S>(authors: I, mode: Mode) -> SifterUnit
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let authors: HashSet<String> = authors.into_iter().map(Into::into).collect();
    SifterUnit::new(
        move |input| Ok(MatchResult::from(authors.contains(&input.event.pubkey))),
        mode,
        author_messages(),
    )
}

fn kind_messages() -> RejectMessages {
    RejectMessages::new(
        "blocked: the kind of the event is not in the whitelist",
        "blocked: the kind of the event is in the blacklist",
    )
}

/// Kind predicate given as a function of the kind; see [`kinds`] for the
/// standard classes.
pub fn kind_matcher<F>(matcher: F, mode: Mode) -> SifterUnit
where
    F: Fn(u32) -> bool + Send + Sync + 'static,
{
    SifterUnit::new(
        move |input| Ok(MatchResult::from(matcher(input.event.kind))),
        mode,
        kind_messages(),
    )
}

/// Kind predicate given as a fixed list of kinds.
pub fn kind_list(kinds: impl IntoIterator<Item = u32>, mode: Mode) -> SifterUnit {
    let kinds: HashSet<u32> = kinds.into_iter().collect();
    SifterUnit::new(
        move |input| Ok(MatchResult::from(kinds.contains(&input.event.kind))),
        mode,
        kind_messages(),
    )
}

/// Kind classes. Disjoint; kinds >= 40000 belong to none of them.
pub mod kinds {
    /// Kinds below 10000 other than the replaceable 0, 3 and 41.
    pub fn regular(k: u32) -> bool {
        k == 1 || k == 2 || (3 < k && k < 41) || (41 < k && k < 10_000)
    }

    /// 0, 3, 41 and `[10000, 20000)`.
    pub fn replaceable(k: u32) -> bool {
        k == 0 || k == 3 || k == 41 || (10_000..20_000).contains(&k)
    }

    pub fn ephemeral(k: u32) -> bool {
        (20_000..30_000).contains(&k)
    }

    pub fn parameterized_replaceable(k: u32) -> bool {
        (30_000..40_000).contains(&k)
    }
}
