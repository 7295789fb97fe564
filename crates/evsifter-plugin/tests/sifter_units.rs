//! Mode x match table, default messages and overrides.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use evsifter_core::error::SiftError;
use evsifter_core::event::Event;
use evsifter_core::filter::Filter;
use evsifter_core::protocol::Input;
use evsifter_plugin::sifters::{
    author_list, author_matcher, kind_list, kind_matcher, kinds, matches_filters, MatchResult, Mode,
    RejectMessages, Sifter, SifterUnit, Verdict,
};

fn input(pubkey: &str, kind: u32) -> Input {
    Input::new_event(Event {
        id: "ev".into(),
        pubkey: pubkey.into(),
        created_at: 1_700_000_000,
        kind,
        tags: vec![],
        content: String::new(),
        sig: String::new(),
    })
}

fn constant(matched: bool, mode: Mode) -> SifterUnit {
    SifterUnit::new(
        move |_| Ok(MatchResult::from(matched)),
        mode,
        RejectMessages::new("allow-msg", "deny-msg"),
    )
}

#[test]
fn verdict_table() {
    let ev = input("a", 1);
    let cases = [
        (Mode::Allow, true, Verdict::Accept),
        (Mode::Allow, false, Verdict::Reject("allow-msg".into())),
        (Mode::Deny, true, Verdict::Reject("deny-msg".into())),
        (Mode::Deny, false, Verdict::Accept),
    ];
    for (mode, matched, want) in cases {
        let got = constant(matched, mode).evaluate(&ev).unwrap();
        assert_eq!(got, want, "mode={mode:?} matched={matched}");
    }
}

#[test]
fn predicate_error_is_not_a_rejection() {
    let unit = SifterUnit::new(
        |_| Err(SiftError::Predicate("matcher misconfigured".into())),
        Mode::Deny,
        RejectMessages::new("allow-msg", "deny-msg"),
    );
    let err = unit.evaluate(&input("a", 1)).expect_err("must propagate");
    assert_eq!(err.code().as_str(), "PREDICATE_FAILED");
}

#[test]
fn author_list_allow() {
    let unit = author_list(["abc"], Mode::Allow);
    assert_eq!(unit.evaluate(&input("abc", 1)).unwrap(), Verdict::Accept);
    assert_eq!(
        unit.evaluate(&input("xyz", 1)).unwrap(),
        Verdict::Reject("blocked: event author is not in the whitelist".into())
    );
}

#[test]
fn author_list_deny() {
    let unit = author_list(vec!["spammer".to_string()], Mode::Deny);
    assert_eq!(
        unit.evaluate(&input("spammer", 1)).unwrap(),
        Verdict::Reject("blocked: event author is in the blacklist".into())
    );
    assert!(unit.evaluate(&input("friend", 1)).unwrap().is_accept());
}

#[test]
fn author_matcher_uses_function() {
    let unit = author_matcher(|pk| pk.starts_with("00"), Mode::Allow);
    assert!(unit.evaluate(&input("00ab", 1)).unwrap().is_accept());
    assert!(!unit.evaluate(&input("ab00", 1)).unwrap().is_accept());
}

#[test]
fn kind_list_deny() {
    let unit = kind_list([1, 2], Mode::Deny);
    assert_eq!(
        unit.evaluate(&input("a", 1)).unwrap(),
        Verdict::Reject("blocked: the kind of the event is in the blacklist".into())
    );
    assert_eq!(unit.evaluate(&input("a", 5)).unwrap(), Verdict::Accept);
}

#[test]
fn kind_matcher_with_class() {
    let unit = kind_matcher(kinds::regular, Mode::Allow);
    assert!(unit.evaluate(&input("a", 1)).unwrap().is_accept());
    assert_eq!(
        unit.evaluate(&input("a", 0)).unwrap().reason(),
        Some("blocked: the kind of the event is not in the whitelist")
    );
}

#[test]
fn filters_default_messages() {
    let f: Filter = serde_json::from_str(r#"{"kinds":[4]}"#).unwrap();

    let allow = matches_filters(vec![f.clone()], Mode::Allow);
    assert_eq!(
        allow.evaluate(&input("a", 1)).unwrap().reason(),
        Some("blocked: event must match filters to be accepted")
    );

    let deny = matches_filters(vec![f], Mode::Deny);
    assert_eq!(
        deny.evaluate(&input("a", 4)).unwrap().reason(),
        Some("blocked: event is denied by filters")
    );
    assert!(deny.evaluate(&input("a", 1)).unwrap().is_accept());
}

#[test]
fn custom_message_overrides_both_modes() {
    let allow = author_list(["abc"], Mode::Allow).with_reject_msg("blocked: members only");
    assert_eq!(allow.reject_msg(), "blocked: members only");
    assert_eq!(
        allow.evaluate(&input("xyz", 1)).unwrap(),
        Verdict::Reject("blocked: members only".into())
    );

    let deny = author_list(["abc"], Mode::Deny).with_reject_messages("unused", format!("blocked: {} is muted", "abc"));
    assert_eq!(
        deny.evaluate(&input("abc", 1)).unwrap(),
        Verdict::Reject("blocked: abc is muted".into())
    );
}

#[test]
fn shadow_reject_keeps_message() {
    let unit = kind_list([4], Mode::Deny).shadow_reject();
    let v = unit.evaluate(&input("a", 4)).unwrap();
    assert_eq!(v, Verdict::ShadowReject("blocked: the kind of the event is in the blacklist".into()));
    assert!(unit.evaluate(&input("a", 1)).unwrap().is_accept());
}

#[test]
fn verdict_into_output() {
    let out = Verdict::Reject("nope".into()).into_output("id1");
    assert_eq!(out.id, "id1");
    assert_eq!(out.msg, "nope");
    assert_eq!(Verdict::Accept.into_output("id2").msg, "");
}
