//! Resolution priority when a type qualifies under more than one
//! registration strategy: explicit, then lookup, then native, silently.

use mantle::{Lookup, adapt, capability, satisfies};

#[capability]
trait Label {
    fn label(&self) -> &'static str;
}

/// Qualifies under all three strategies.
struct AllThree;

impl Label for AllThree {
    fn label(&self) -> &'static str {
        "native"
    }
}

impl LabelImpl for AllThree {
    fn label(&self) -> &'static str {
        "explicit"
    }
}

struct AllThreeDesignator;

impl LabelProvider<AllThree> for AllThreeDesignator {
    fn label(_it: &AllThree) -> &'static str {
        "lookup"
    }
}

impl Lookup<LabelCap> for AllThree {
    type Impl = AllThreeDesignator;
}

/// Qualifies under lookup and native.
struct TwoWay;

impl Label for TwoWay {
    fn label(&self) -> &'static str {
        "native"
    }
}

struct TwoWayDesignator;

impl LabelProvider<TwoWay> for TwoWayDesignator {
    fn label(_it: &TwoWay) -> &'static str {
        "lookup"
    }
}

impl Lookup<LabelCap> for TwoWay {
    type Impl = TwoWayDesignator;
}

/// Qualifies under explicit and native.
struct Stamped;

impl Label for Stamped {
    fn label(&self) -> &'static str {
        "native"
    }
}

impl LabelImpl for Stamped {
    fn label(&self) -> &'static str {
        "explicit"
    }
}

/// Native only.
struct Plain;

impl Label for Plain {
    fn label(&self) -> &'static str {
        "native"
    }
}

#[test]
fn explicit_wins_over_lookup_and_native() {
    let value = AllThree;
    let view = adapt!(&value => LabelCap);
    assert_eq!(view.label(), "explicit");
}

#[test]
fn lookup_wins_over_native() {
    let value = TwoWay;
    let view = adapt!(&value => LabelCap);
    assert_eq!(view.label(), "lookup");
}

#[test]
fn explicit_wins_over_native() {
    let value = Stamped;
    let view = adapt!(&value => LabelCap);
    assert_eq!(view.label(), "explicit");
}

#[test]
fn native_applies_when_alone() {
    let value = Plain;
    let view = adapt!(&value => LabelCap);
    assert_eq!(view.label(), "native");
}

#[test]
fn resolution_is_independent_of_construction_order() {
    let a = AllThree;
    let b = TwoWay;

    let b_view = adapt!(&b => LabelCap);
    let a_view = adapt!(&a => LabelCap);
    assert_eq!(a_view.label(), "explicit");
    assert_eq!(b_view.label(), "lookup");

    let a_again = adapt!(&a => LabelCap);
    assert_eq!(a_again.label(), "explicit");
}

#[test]
fn predicate_sees_every_qualifying_strategy() {
    assert!(satisfies!(AllThree => LabelCap, registered));
    assert!(satisfies!(AllThree => LabelCap, lookup));
    assert!(satisfies!(AllThree => LabelCap, native));

    assert!(!satisfies!(TwoWay => LabelCap, registered));
    assert!(satisfies!(TwoWay => LabelCap, lookup));
    assert!(satisfies!(TwoWay => LabelCap, native));
}
