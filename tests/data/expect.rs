//! ExpectData integration tests

use hinge_data::{CompositeData, DataStore, ExpectData, ExpectList, SlotIndex, declare_data};

#[derive(Clone, Debug, PartialEq)]
struct TimeStep(f64);

#[derive(Clone, Debug, PartialEq)]
struct Iterations(u32);

#[derive(Clone, Debug, PartialEq)]
struct Tolerance(f64);

#[derive(Clone, Debug, PartialEq)]
struct Label(&'static str);

declare_data!(
    TimeStep => "test::TimeStep",
    Iterations => "test::Iterations",
    Tolerance => "test::Tolerance",
    Label => "test::Label",
);

type Solver = (TimeStep, Iterations, Tolerance);

// =============================================================================
// Slot Layout
// =============================================================================

#[test]
fn slots_follow_declaration_order() {
    assert_eq!(SlotIndex::<Solver, TimeStep>::INDEX, Some(0));
    assert_eq!(SlotIndex::<Solver, Iterations>::INDEX, Some(1));
    assert_eq!(SlotIndex::<Solver, Tolerance>::INDEX, Some(2));
    assert_eq!(SlotIndex::<Solver, Label>::INDEX, None);
    assert_eq!(<Solver as ExpectList>::SLOT_COUNT, 3);
}

#[test]
fn duplicate_expected_types_share_a_slot() {
    type Repeated = (TimeStep, Iterations, TimeStep);
    assert_eq!(<Repeated as ExpectList>::SLOT_COUNT, 2);
    assert_eq!(SlotIndex::<Repeated, TimeStep>::INDEX, Some(0));

    let mut data = ExpectData::<Repeated>::new();
    data.insert(TimeStep(0.1));
    data.insert(TimeStep(0.2));
    assert_eq!(data.len(), 1);
    assert_eq!(data.get::<TimeStep>(), Some(&TimeStep(0.2)));
}

// =============================================================================
// Equivalence With the Plain Store
// =============================================================================

#[test]
fn reads_match_plain_store() {
    let mut expect = ExpectData::<Solver>::new();
    let mut plain = CompositeData::new();
    fill(&mut expect);
    fill(&mut plain);

    assert_eq!(expect.get::<TimeStep>(), plain.get::<TimeStep>());
    assert_eq!(expect.get::<Label>(), plain.get::<Label>());
    assert_eq!(expect.get::<Iterations>(), plain.get::<Iterations>());
    assert_eq!(expect.get::<Tolerance>(), None);
    assert_eq!(plain.get::<Tolerance>(), None);
    assert_eq!(expect.len(), plain.len());
    assert_eq!(expect.diagnose(), plain.diagnose());
}

fn fill(store: &mut impl DataStore) {
    store.insert(TimeStep(0.001));
    store.insert_with(Iterations(50), true);
    store.insert(Label("solver"));
}

#[test]
fn expected_but_never_inserted_reads_absent() {
    let mut data = ExpectData::<Solver>::new();
    assert!(ExpectData::<Solver>::expects::<Tolerance>());
    assert!(!data.has::<Tolerance>());
    assert_eq!(data.get::<Tolerance>(), None);
    assert_eq!(data.diagnose().missing, vec!["test::Tolerance"]);
}

#[test]
fn remove_from_slot_and_inner_store() {
    let mut data = ExpectData::<Solver>::new()
        .with(TimeStep(0.5))
        .with(Label("x"));
    assert_eq!(data.remove::<TimeStep>(), Some(TimeStep(0.5)));
    assert_eq!(data.remove::<Label>(), Some(Label("x")));
    assert!(data.is_empty());
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn composite_round_trip_keeps_flags() {
    let mut data = ExpectData::<Solver>::new();
    data.insert_with(Iterations(10), true);
    data.insert(Label("l"));
    data.get::<Label>();

    let mut plain: CompositeData = data.clone().into();
    assert!(plain.requires::<Iterations>());
    assert!(plain.status_of::<Label>().queried);

    let mut back = ExpectData::<Solver>::from(plain.clone());
    assert_eq!(back.get::<Iterations>(), plain.get::<Iterations>());
    assert_eq!(back.len(), 2);
}

#[test]
fn copy_from_replaces_and_merge_from_overlays() {
    let incoming = CompositeData::new()
        .with(TimeStep(0.2))
        .with(Label("incoming"));

    let mut replaced = ExpectData::<Solver>::new().with(Iterations(3));
    replaced.copy_from(&incoming);
    assert!(!replaced.has::<Iterations>());
    assert_eq!(replaced.peek::<TimeStep>(), Some(&TimeStep(0.2)));

    let mut overlaid = ExpectData::<Solver>::new().with(Iterations(3));
    overlaid.merge_from(&incoming);
    assert_eq!(overlaid.peek::<Iterations>(), Some(&Iterations(3)));
    assert_eq!(overlaid.peek::<Label>(), Some(&Label("incoming")));
    assert_eq!(overlaid.len(), 3);
}

#[test]
fn copy_from_matches_plain_diagnostics() {
    let mut incoming = CompositeData::new().with(TimeStep(0.1));
    incoming.get::<Tolerance>();

    let mut plain = CompositeData::new();
    plain.get::<Label>();
    plain.copy_from(&incoming);

    let mut fast = ExpectData::<Solver>::new();
    fast.get::<Iterations>();
    fast.get::<Label>();
    fast.copy_from(&incoming);

    assert_eq!(plain.diagnose(), incoming.diagnose());
    assert_eq!(fast.diagnose(), incoming.diagnose());
}

#[test]
fn clones_do_not_share_slots() {
    let original = ExpectData::<Solver>::new().with(TimeStep(1.0));
    let mut copy = original.clone();
    copy.insert(TimeStep(2.0));
    assert_eq!(original.peek::<TimeStep>(), Some(&TimeStep(1.0)));
}
