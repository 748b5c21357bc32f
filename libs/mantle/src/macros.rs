//! Construction and predicate macros.

/// Wrap a value so it can be used as a capability it never implemented.
///
/// Three forms, one per storage discipline:
///
/// - `adapt!(&value => Cap)`: shared-borrow adapter, read-only operations;
/// - `adapt!(&mut value => Cap)`: exclusive-borrow adapter, mutations go to
///   the caller's value;
/// - `adapt!(value => Cap)`: owned adapter, the value moves in (clone first
///   to copy out of a borrowed place).
///
/// The implementation for the pair is resolved here, at the construction
/// site: an explicit `{Trait}Impl` registration first, then a
/// [`Lookup`](crate::Lookup) registration, then the type's own trait
/// implementation. If none applies, the call fails to build.
///
/// ```
/// use mantle::{adapt, capability};
///
/// #[capability]
/// trait Inflatable {
///     fn inflate(&mut self, dw: i32, dv: i32);
/// }
///
/// struct Balloon {
///     weight: i32,
///     volume: i32,
/// }
///
/// impl InflatableImpl for Balloon {
///     fn inflate(&mut self, dw: i32, dv: i32) {
///         self.weight += dw;
///         self.volume += dv;
///     }
/// }
///
/// let mut balloon = Balloon { weight: 10, volume: 20 };
/// let mut view = adapt!(&mut balloon => InflatableCap);
/// view.inflate(10, 20);
/// assert_eq!(balloon.weight, 20);
/// assert_eq!(balloon.volume, 40);
/// ```
///
/// A pair no strategy covers is rejected at build time:
///
/// ```compile_fail
/// #[mantle::capability]
/// trait Sing {
///     fn sing(&self) -> String;
/// }
///
/// let silent = 7_u32;
/// let chorus = mantle::adapt!(&silent => SingCap);
/// ```
#[macro_export]
macro_rules! adapt {
    (&mut $value:expr => $cap:ty) => {{
        let __storage = &mut $value;
        let __resolution = $crate::__resolve!(__storage, $cap);
        $crate::Adapter::<_, $cap, _>::bind(__storage, __resolution)
    }};
    (& $value:expr => $cap:ty) => {{
        let __storage = &$value;
        let __resolution = $crate::__resolve!(__storage, $cap);
        $crate::Adapter::<_, $cap, _>::bind(__storage, __resolution)
    }};
    ($value:expr => $cap:ty) => {{
        let __storage = $crate::storage::Owned::new($value);
        let __resolution = $crate::__resolve!(__storage, $cap);
        $crate::Adapter::<_, $cap, _>::bind(__storage, __resolution)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __resolve {
    ($storage:ident, $cap:ty) => {{
        #[allow(unused_imports)]
        use $crate::resolve::{ViaExplicit as _, ViaLookup as _, ViaNative as _};
        let __choice = $crate::resolve::choice_for::<_, $cap>(&$storage);
        (&&&__choice).resolve()
    }};
}

/// Build-time capability predicate.
///
/// `satisfies!(T => Cap)` expands to a `const bool`: `true` iff any
/// registration strategy lets `T` satisfy the capability. It is pure, never
/// fails to build, and is usable in `const` contexts, so generic code can be
/// enabled on it. The single-strategy forms ask about one strategy in
/// isolation, which also lets callers assert that a pair does not qualify
/// under more than one registration:
///
/// - `satisfies!(T => Cap, registered)`: explicit registration present;
/// - `satisfies!(T => Cap, lookup)`: lookup registration present;
/// - `satisfies!(T => Cap, native)`: `T` implements the trait itself.
///
/// ```
/// use mantle::{capability, satisfies};
///
/// #[capability]
/// trait Inflatable {
///     fn inflate(&mut self, dw: i32, dv: i32);
/// }
///
/// struct Balloon {
///     weight: i32,
///     volume: i32,
/// }
///
/// impl InflatableImpl for Balloon {
///     fn inflate(&mut self, dw: i32, dv: i32) {
///         self.weight += dw;
///         self.volume += dv;
///     }
/// }
///
/// assert!(satisfies!(Balloon => InflatableCap));
/// assert!(satisfies!(Balloon => InflatableCap, registered));
/// assert!(!satisfies!(Balloon => InflatableCap, native));
/// assert!(!satisfies!(String => InflatableCap));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($ty:ty => $cap:ty) => {
        $crate::__applies!($ty => $cap, ResolveExplicit)
            || $crate::__applies!($ty => $cap, ResolveLookup)
            || $crate::__applies!($ty => $cap, ResolveNative)
    };
    ($ty:ty => $cap:ty, registered) => {
        $crate::__applies!($ty => $cap, ResolveExplicit)
    };
    ($ty:ty => $cap:ty, lookup) => {
        $crate::__applies!($ty => $cap, ResolveLookup)
    };
    ($ty:ty => $cap:ty, native) => {
        $crate::__applies!($ty => $cap, ResolveNative)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __applies {
    ($ty:ty => $cap:ty, $strategy:ident) => {{
        #[allow(dead_code)]
        struct __Probe<T, C>(::core::marker::PhantomData<(T, C)>);
        #[allow(dead_code)]
        trait __Fallback {
            const APPLIES: bool = false;
        }
        impl<T, C> __Fallback for __Probe<T, C> {}
        #[allow(dead_code)]
        impl<T, C> __Probe<T, C>
        where
            C: $crate::resolve::$strategy<T>,
        {
            const APPLIES: bool = true;
        }
        <__Probe<$ty, $cap>>::APPLIES
    }};
}
