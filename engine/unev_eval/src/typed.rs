//! Static (type-level) environment.
//!
//! The second environment flavor: the set of bound names and their value
//! types is fixed in the environment's own type. Lookup, replacement, and
//! removal are resolved by trait selection while the program is being
//! type-checked: referencing a key that is not bound is a build failure
//! (an unsatisfied `Select`/`Remove` bound), never a runtime one.
//!
//! Keys are zero-sized marker types declared with the [`key!`] macro:
//!
//! ```
//! use unev_eval::key;
//! use unev_eval::typed::{StaticEnv, Nil};
//!
//! key! {
//!     pub Foo: i64 = "foo";
//!     pub Bar: i64 = "bar";
//! }
//!
//! let env = Nil.bind::<Foo>(13).bind::<Bar>(7);
//! assert_eq!(*env.get::<Foo, _>(), 13);
//! let env = env.set::<Foo, _>(20);
//! assert_eq!(*env.get::<Foo, _>(), 20);
//! let _smaller = env.erase::<Bar, _>();
//! ```
//!
//! Stable Rust cannot branch on key presence at the type level, so the
//! dynamic flavor's replace-or-append `set` splits in two here: `bind`
//! appends a fresh key, `set` replaces an existing one.

use std::marker::PhantomData;

use unev_value::Value;

use crate::Environment;

/// A type-level key: a zero-sized type naming a binding and fixing its value
/// type.
pub trait Key {
    /// The bound value's type.
    type Value;
    /// The variable name this key stands for.
    const NAME: &'static str;
}

/// A single typed binding.
pub struct Bound<K: Key> {
    /// The bound value.
    pub value: K::Value,
}

/// The empty static environment.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Nil;

/// A static environment with `head` bound in front of `tail`.
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

/// Type-level index: the key is at the head.
pub struct Here {
    _priv: (),
}

/// Type-level index: the key is somewhere in the tail.
pub struct There<I> {
    _marker: PhantomData<I>,
}

/// Compile-time lookup of a key's value.
///
/// The index parameter `I` is inferred; callers write `env.get::<K, _>()`.
/// If `K` is not bound anywhere in the list, no impl applies and the lookup
/// is rejected by the type checker.
pub trait Select<K: Key, I> {
    fn select(&self) -> &K::Value;
}

impl<K: Key, T> Select<K, Here> for Cons<Bound<K>, T> {
    fn select(&self) -> &K::Value {
        &self.head.value
    }
}

impl<K: Key, H, T, I> Select<K, There<I>> for Cons<H, T>
where
    T: Select<K, I>,
{
    fn select(&self) -> &K::Value {
        self.tail.select()
    }
}

/// Compile-time removal of a key's binding.
pub trait Remove<K: Key, I>: Sized {
    /// The environment type with the binding removed.
    type Rest;

    fn remove(self) -> (Bound<K>, Self::Rest);
}

impl<K: Key, T> Remove<K, Here> for Cons<Bound<K>, T> {
    type Rest = T;

    fn remove(self) -> (Bound<K>, T) {
        (self.head, self.tail)
    }
}

impl<K: Key, H, T, I> Remove<K, There<I>> for Cons<H, T>
where
    T: Remove<K, I>,
{
    type Rest = Cons<H, <T as Remove<K, I>>::Rest>;

    fn remove(self) -> (Bound<K>, Self::Rest) {
        let (bound, rest) = self.tail.remove();
        (
            bound,
            Cons {
                head: self.head,
                tail: rest,
            },
        )
    }
}

/// Operations on a static environment.
///
/// Implemented for `Nil` and every `Cons`; the bounds on each method are the
/// build-time presence checks.
pub trait StaticEnv: Sized {
    /// Append a binding for a key that is not yet bound.
    ///
    /// Binding the same key twice makes later lookups ambiguous, which the
    /// type checker reports at the use site.
    fn bind<K: Key>(self, value: K::Value) -> Cons<Bound<K>, Self> {
        Cons {
            head: Bound { value },
            tail: self,
        }
    }

    /// Look up the value bound to `K`. Absence is a type error.
    fn get<K: Key, I>(&self) -> &K::Value
    where
        Self: Select<K, I>,
    {
        self.select()
    }

    /// Build-time containment check: this method only type-checks when `K`
    /// is bound, in which case it returns `true`. Absence is a type error,
    /// not a `false`.
    fn has<K: Key, I>(&self) -> bool
    where
        Self: Select<K, I>,
    {
        true
    }

    /// Replace the value bound to `K`. Absence is a type error.
    fn set<K: Key, I>(self, value: K::Value) -> Cons<Bound<K>, <Self as Remove<K, I>>::Rest>
    where
        Self: Remove<K, I>,
    {
        let (_, rest) = self.remove();
        Cons {
            head: Bound { value },
            tail: rest,
        }
    }

    /// Remove the binding for `K`. Absence is a type error.
    fn erase<K: Key, I>(self) -> <Self as Remove<K, I>>::Rest
    where
        Self: Remove<K, I>,
    {
        let (_, rest) = self.remove();
        rest
    }
}

impl StaticEnv for Nil {}
impl<H, T> StaticEnv for Cons<H, T> {}

/// Bridge into the dynamic flavor, for evaluation.
///
/// Later bindings win over earlier ones of the same name, matching the
/// dynamic environment's replace semantics.
pub trait IntoEnvironment {
    /// Convert into a dynamic `Environment`.
    fn into_env(self) -> Environment
    where
        Self: Sized,
    {
        self.accumulate(Environment::empty())
    }

    /// Fold this static environment's bindings onto `env`.
    fn accumulate(self, env: Environment) -> Environment;
}

impl IntoEnvironment for Nil {
    fn accumulate(self, env: Environment) -> Environment {
        env
    }
}

impl<K, T> IntoEnvironment for Cons<Bound<K>, T>
where
    K: Key,
    K::Value: Into<Value>,
    T: IntoEnvironment,
{
    fn accumulate(self, env: Environment) -> Environment {
        // Tail bindings are older; apply them first so the head wins.
        let env = self.tail.accumulate(env);
        env.set(K::NAME, self.head.value)
    }
}

/// Declare type-level keys.
///
/// ```
/// unev_eval::key! {
///     pub BlockSize: i64 = "block_size";
/// }
/// ```
#[macro_export]
macro_rules! key {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $ty:ty = $text:literal;)+) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        $vis struct $name;

        impl $crate::typed::Key for $name {
            type Value = $ty;
            const NAME: &'static str = $text;
        }
    )+};
}
