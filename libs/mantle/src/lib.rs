//! Adapters that let an existing, unmodified type satisfy a trait defined
//! elsewhere.
//!
//! A capability is an ordinary trait marked with [`capability`]. A concrete
//! type can satisfy it three ways, resolved at build time in this fixed
//! order:
//!
//! 1. **Explicit registration**: `impl {Trait}Impl for T`, written by an
//!    implementation author anywhere coherence allows.
//! 2. **Lookup registration**: `impl Lookup<{Trait}Cap> for T`, written
//!    alongside `T`'s own definition, naming a designator type that carries
//!    the behavior.
//! 3. **Native satisfaction**: `T` already implements the trait.
//!
//! [`adapt!`] wraps a value (borrowed or owned) in an [`Adapter`] that
//! implements the capability trait, forwarding each operation to the
//! resolved implementation; the implementation receives the original typed
//! value with exactly the access the caller granted. [`satisfies!`] asks
//! whether any strategy applies, as a `const bool`, without committing to an
//! adapter.
//!
//! Resolution has no runtime component: an unresolvable pair or an operation
//! the adapter's storage cannot support fails to build, never at run time.
//!
//! ```
//! use mantle::{adapt, capability};
//!
//! #[capability]
//! trait Inflatable {
//!     fn inflate(&mut self, dw: i32, dv: i32);
//! }
//!
//! struct Balloon {
//!     weight: i32,
//!     volume: i32,
//! }
//!
//! impl InflatableImpl for Balloon {
//!     fn inflate(&mut self, dw: i32, dv: i32) {
//!         self.weight += dw;
//!         self.volume += dv;
//!     }
//! }
//!
//! let mut balloon = Balloon { weight: 10, volume: 20 };
//! let mut view = adapt!(&mut balloon => InflatableCap);
//! view.inflate(10, 20);
//! assert_eq!(balloon.weight, 20);
//! assert_eq!(balloon.volume, 40);
//! ```

pub mod adapter;
pub mod provider;
pub mod resolve;
pub mod storage;

mod macros;

pub use adapter::Adapter;
pub use provider::{Native, Registered};
pub use resolve::{Lookup, Resolution};
pub use storage::{Owned, Storage, StorageMut, StorageOwned};

pub use mantle_derive::capability;
