//! Provider/consumer diagnostics tests

use hinge_data::{CompositeData, ExpectData, declare_data};

#[derive(Clone)]
struct Contacts(u32);

#[derive(Clone)]
struct Energy(f64);

#[derive(Clone)]
struct Warnings(Vec<String>);

declare_data!(
    Contacts => "test::Contacts",
    Energy => "test::Energy",
    Warnings => "test::Warnings",
);

#[test]
fn unread_required_entry_is_reported_apart_from_consumed() {
    let mut output = CompositeData::new()
        .with_required(Contacts(4))
        .with_required(Energy(1.5))
        .with(Warnings(Vec::new()));
    output.get::<Energy>();

    let diagnosis = output.diagnose();
    assert_eq!(diagnosis.unqueried_required, vec!["test::Contacts"]);
    assert_eq!(diagnosis.unqueried_optional, vec!["test::Warnings"]);
    assert_eq!(diagnosis.consumed, vec!["test::Energy"]);
    assert!(diagnosis.missing.is_empty());
    assert!(!diagnosis.is_clean());
}

#[test]
fn misses_are_reported_until_provided() {
    let mut data = ExpectData::<(Contacts,)>::new();
    assert!(data.get::<Contacts>().is_none());
    assert!(data.get::<Energy>().is_none());
    assert_eq!(data.diagnose().missing, vec!["test::Contacts", "test::Energy"]);

    data.insert(Contacts(1));
    data.insert(Energy(0.0));
    assert!(data.diagnose().missing.is_empty());
}

#[test]
fn reset_queries_forgets_misses() {
    let mut data = CompositeData::new();
    data.get::<Energy>();
    data.reset_queries();
    assert!(data.diagnose().is_clean());
}

#[test]
fn fully_consumed_store_is_clean() {
    let mut data = CompositeData::new().with_required(Contacts(2));
    data.get::<Contacts>();
    assert!(data.diagnose().is_clean());
    data.log_diagnostics();
}
