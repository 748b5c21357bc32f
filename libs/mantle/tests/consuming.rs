//! Capabilities with consuming operations: the adapter must own its value,
//! and the operation consumes the adapter itself.

use mantle::{adapt, capability};

#[capability]
trait Launch {
    fn fuel(&self) -> i32;
    fn launch(self) -> i32;
}

struct Rocket {
    fuel: i32,
}

impl LaunchImpl for Rocket {
    fn fuel(&self) -> i32 {
        self.fuel
    }

    fn launch(self) -> i32 {
        self.fuel * 10
    }
}

/// Native counterpart.
struct Firework {
    charge: i32,
}

impl Launch for Firework {
    fn fuel(&self) -> i32 {
        self.charge
    }

    fn launch(self) -> i32 {
        self.charge
    }
}

#[test]
fn consuming_operation_takes_the_adapter_with_it() {
    let view = adapt!(Rocket { fuel: 9 } => LaunchCap);
    assert_eq!(view.fuel(), 9);
    assert_eq!(view.launch(), 90);
}

#[test]
fn native_consuming_operation_forwards_directly() {
    let view = adapt!(Firework { charge: 3 } => LaunchCap);
    assert_eq!(view.launch(), 3);
}

#[test]
fn owned_adapter_still_reads_and_mutates() {
    let mut view = adapt!(Rocket { fuel: 1 } => LaunchCap);
    view.value_mut().fuel += 4;
    assert_eq!(view.value().fuel, 5);
    assert_eq!(view.into_value().fuel, 5);
}
