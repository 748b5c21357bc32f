//! Inflation demo: one capability, three kinds of inflatable gear, one per
//! registration strategy. Consumers are written against [`Inflatable`] alone
//! and never learn the concrete types.

use mantle::capability;

#[capability]
pub trait Inflatable {
    /// Add `dw` grams and `dv` cubic centimeters.
    fn inflate(&mut self, dw: i32, dv: i32);

    /// Current volume in cubic centimeters.
    fn volume(&self) -> i32;
}

/// Party balloon. Bound to the capability by explicit registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balloon {
    pub weight: i32,
    pub volume: i32,
}

impl InflatableImpl for Balloon {
    fn inflate(&mut self, dw: i32, dv: i32) {
        self.weight += dw;
        self.volume += dv;
    }

    fn volume(&self) -> i32 {
        self.volume
    }
}

/// River raft. Registered next to its own definition via lookup; the
/// designator carries the behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raft {
    pub weight: i32,
    pub volume: i32,
}

pub struct RaftInflate;

impl InflatableProvider<Raft> for RaftInflate {
    fn inflate(it: &mut Raft, dw: i32, dv: i32) {
        it.weight += dw;
        it.volume += dv;
    }

    fn volume(it: &Raft) -> i32 {
        it.volume
    }
}

impl mantle::Lookup<InflatableCap> for Raft {
    type Impl = RaftInflate;
}

/// Air mattress. Implements the capability itself; adapters forward with no
/// separate implementation object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mattress {
    pub volume: i32,
}

impl Inflatable for Mattress {
    fn inflate(&mut self, _dw: i32, dv: i32) {
        self.volume += dv;
    }

    fn volume(&self) -> i32 {
        self.volume
    }
}

/// Inflate every item by one step and report the combined volume.
pub fn inflate_all(items: &mut [&mut dyn Inflatable], dw: i32, dv: i32) -> i32 {
    let mut total = 0;
    for item in items.iter_mut() {
        item.inflate(dw, dv);
        total += item.volume();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantle::{adapt, satisfies};

    #[test]
    fn one_strategy_per_type() {
        assert!(satisfies!(Balloon => InflatableCap, registered));
        assert!(satisfies!(Raft => InflatableCap, lookup));
        assert!(satisfies!(Mattress => InflatableCap, native));

        assert!(!satisfies!(Balloon => InflatableCap, native));
        assert!(!satisfies!(Raft => InflatableCap, registered));
        assert!(!satisfies!(Mattress => InflatableCap, lookup));
    }

    #[test]
    fn a_mixed_fleet_inflates_together() {
        let mut balloon = Balloon {
            weight: 10,
            volume: 20,
        };
        let mut raft = Raft {
            weight: 1000,
            volume: 2000,
        };
        let mut mattress = Mattress { volume: 300 };

        let mut balloon_view = adapt!(&mut balloon => InflatableCap);
        let mut raft_view = adapt!(&mut raft => InflatableCap);
        let mut mattress_view = adapt!(&mut mattress => InflatableCap);

        let total = inflate_all(
            &mut [&mut balloon_view, &mut raft_view, &mut mattress_view],
            10,
            20,
        );

        drop(balloon_view);
        drop(raft_view);
        drop(mattress_view);

        assert_eq!(balloon, Balloon { weight: 20, volume: 40 });
        assert_eq!(raft, Raft { weight: 1010, volume: 2020 });
        assert_eq!(mattress, Mattress { volume: 320 });
        assert_eq!(total, 40 + 2020 + 320);
    }

    #[test]
    fn owned_gear_travels_with_its_adapter() {
        let mut packed = adapt!(Balloon { weight: 5, volume: 5 } => InflatableCap);
        packed.inflate(5, 5);
        let unpacked = packed.into_value();
        assert_eq!(unpacked, Balloon { weight: 10, volume: 10 });
    }
}
