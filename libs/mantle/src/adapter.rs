//! The adapter wrapper.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::resolve::Resolution;
use crate::storage::{Owned, Storage, StorageMut, StorageOwned};

/// Wraps a value of some concrete type and exposes it as satisfying the
/// capability `C`, forwarding every operation through the provider `P`
/// chosen at build time.
///
/// Adapters are built with [`adapt!`](crate::adapt), which picks the storage
/// form from the expression (`&value`, `&mut value`, or `value` to move in)
/// and resolves the provider. The storage form fixes the available
/// operations: the capability's mutating operations need exclusive or owned
/// storage, consuming operations need owned storage. None of this is checked
/// at run time; an operation the storage cannot support does not exist on
/// the adapter.
///
/// Nothing inside an adapter points back into its own storage. Forwarding
/// reaches the wrapped value through the storage on every call, so owned
/// adapters can be cloned, moved, and swapped freely and each call mutates
/// whatever the adapter holds at that moment.
///
/// A shared-borrow adapter has no mutable view of the wrapped value:
///
/// ```compile_fail
/// #[mantle::capability]
/// trait Poke {
///     fn poke(&mut self);
/// }
///
/// struct Cube;
///
/// impl PokeImpl for Cube {
///     fn poke(&mut self) {}
/// }
///
/// let cube = Cube;
/// let mut view = mantle::adapt!(&cube => PokeCap);
/// view.poke();
/// ```
///
/// And only an owned adapter can give the value back:
///
/// ```compile_fail
/// #[mantle::capability]
/// trait Poke {
///     fn poke(&mut self);
/// }
///
/// struct Cube;
///
/// impl PokeImpl for Cube {
///     fn poke(&mut self) {}
/// }
///
/// let mut cube = Cube;
/// let view = mantle::adapt!(&mut cube => PokeCap);
/// let cube = view.into_value();
/// ```
pub struct Adapter<S, C, P> {
    storage: S,
    binding: PhantomData<(C, P)>,
}

impl<S: Storage, C, P> Adapter<S, C, P> {
    /// Wrap `storage` as an adapter for capability `C`.
    ///
    /// The [`Resolution`] token names the provider picked for the wrapped
    /// type; it is produced by the resolution step inside
    /// [`adapt!`](crate::adapt), which is the normal way to get here.
    pub fn bind(storage: S, _resolution: Resolution<P>) -> Self {
        Adapter {
            storage,
            binding: PhantomData,
        }
    }

    /// Shared access to the wrapped value.
    #[inline]
    pub fn value(&self) -> &S::Target {
        self.storage.get()
    }
}

impl<S: StorageMut, C, P> Adapter<S, C, P> {
    /// Exclusive access to the wrapped value.
    ///
    /// Exists only for exclusive-borrow and owned adapters.
    #[inline]
    pub fn value_mut(&mut self) -> &mut S::Target {
        self.storage.get_mut()
    }
}

impl<S: StorageOwned, C, P> Adapter<S, C, P> {
    /// Consume the adapter and give the wrapped value back.
    ///
    /// Exists only for owned adapters.
    #[inline]
    pub fn into_value(self) -> S::Target {
        self.storage.into_inner()
    }
}

impl<S: Clone, C, P> Clone for Adapter<S, C, P> {
    fn clone(&self) -> Self {
        Adapter {
            storage: self.storage.clone(),
            binding: PhantomData,
        }
    }
}

impl<S: Copy, C, P> Copy for Adapter<S, C, P> {}

impl<S, C, P> fmt::Debug for Adapter<S, C, P>
where
    S: Storage,
    S::Target: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Adapter").field(self.value()).finish()
    }
}

impl<S, C, P> Serialize for Adapter<S, C, P>
where
    S: Storage,
    S::Target: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, T, C, P> Deserialize<'de> for Adapter<Owned<T>, C, P>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(|value| Adapter {
            storage: Owned::new(value),
            binding: PhantomData,
        })
    }
}
