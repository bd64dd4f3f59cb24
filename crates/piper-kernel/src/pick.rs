//! Keyed access into record-like values.
//!
//! `pick` comes in two shapes:
//!
//! - [`pick`] looks a key up immediately: `pick(&k, record)`.
//! - [`picker`] fixes the key and returns a function awaiting the
//!   record, which is the shape composition wants:
//!   `pipe!(picker("foo"), picker("bar"))`.
//!
//! Lookups never fail. An absent key yields `None`, and because
//! `Option<R>` is itself a [`Record`], a chain of picks that loses its
//! footing early simply keeps yielding `None`.

use crate::error::PiperError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::value::Index;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// A value that can be looked into by key.
///
/// Implemented on references, so the looked-up value borrows from the
/// record rather than being cloned out of it.
pub trait Record<K: ?Sized> {
    /// What a successful lookup yields.
    type Value;

    /// The value stored at `key`, or `None` if there is none.
    fn field(self, key: &K) -> Option<Self::Value>;
}

impl<'a, K, Q, V, S> Record<Q> for &'a HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = &'a V;

    fn field(self, key: &Q) -> Option<&'a V> {
        self.get(key)
    }
}

impl<'a, K, Q, V> Record<Q> for &'a BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = &'a V;

    fn field(self, key: &Q) -> Option<&'a V> {
        self.get(key)
    }
}

impl<'a, T> Record<usize> for &'a [T] {
    type Value = &'a T;

    fn field(self, key: &usize) -> Option<&'a T> {
        self.get(*key)
    }
}

impl<'a, T> Record<usize> for &'a Vec<T> {
    type Value = &'a T;

    fn field(self, key: &usize) -> Option<&'a T> {
        self.get(*key)
    }
}

impl<'a, I> Record<I> for &'a Value
where
    I: Index + ?Sized,
{
    type Value = &'a Value;

    fn field(self, key: &I) -> Option<&'a Value> {
        self.get(key)
    }
}

impl<'a, Q> Record<Q> for &'a serde_json::Map<String, Value>
where
    String: Borrow<Q>,
    Q: Ord + Eq + Hash + ?Sized,
{
    type Value = &'a Value;

    fn field(self, key: &Q) -> Option<&'a Value> {
        self.get(key)
    }
}

impl<K, R> Record<K> for Option<R>
where
    K: ?Sized,
    R: Record<K>,
{
    type Value = R::Value;

    fn field(self, key: &K) -> Option<R::Value> {
        self?.field(key)
    }
}

/// Look `key` up in `record` right away.
pub fn pick<K, R>(key: &K, record: R) -> Option<R::Value>
where
    K: ?Sized,
    R: Record<K>,
{
    record.field(key)
}

/// Fix `key` and return a function that looks it up in whatever record
/// it is given.
///
/// `picker(k)(r)` is equivalent to `pick(&k, r)`.
pub fn picker<R, K>(key: K) -> impl Fn(R) -> Option<R::Value>
where
    R: Record<K>,
{
    move |record: R| record.field(&key)
}

/// Look `key` up in a JSON value and decode what is found as `T`.
///
/// Unlike [`pick`], an absent key is an error here, since there is
/// nothing to decode.
pub fn pick_as<T, K>(key: &K, record: &Value) -> Result<T, PiperError>
where
    T: DeserializeOwned,
    K: Index + fmt::Display + ?Sized,
{
    let found = record
        .get(key)
        .ok_or_else(|| PiperError::MissingKey(key.to_string()))?;
    T::deserialize(found).map_err(|source| PiperError::Decode {
        key: key.to_string(),
        source,
    })
}
