use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

/// One input record before adaptation: a string to string mapping.
///
/// The header order of an adapted batch comes from the first record's
/// [`RawRecord::field_names`]. `HashMap` iterates in no particular order, so
/// callers needing stable columns should use a `Vec` of pairs, a `BTreeMap`
/// (sorted), or an `IndexMap` with the `indexmap` feature.
pub trait RawRecord {
    /// Keys of the record in their natural iteration order, or `None` if the record is absent.
    fn field_names(&self) -> Option<Vec<&str>>;

    /// Value stored under `name`.
    fn field(&self, name: &str) -> Option<&str>;

    /// True when there is no record at all. An empty record is not absent.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T: RawRecord + ?Sized> RawRecord for &T {
    fn field_names(&self) -> Option<Vec<&str>> {
        (**self).field_names()
    }

    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: RawRecord> RawRecord for Option<T> {
    fn field_names(&self) -> Option<Vec<&str>> {
        self.as_ref().and_then(|record| record.field_names())
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.as_ref().and_then(|record| record.field(name))
    }

    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(|record| record.is_absent())
    }
}

impl<K, V, S> RawRecord for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(|key| Borrow::<str>::borrow(key)).collect())
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

impl<K, V> RawRecord for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(|key| Borrow::<str>::borrow(key)).collect())
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}

/// Insertion-ordered pairs. Lookups return the first pair carrying the key;
/// batches holding a record with a repeated key are rejected on adaptation.
impl<K, V> RawRecord for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.iter().map(|(key, _)| key.as_ref()).collect())
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| AsRef::<str>::as_ref(key) == name)
            .map(|(_, value)| value.as_ref())
    }
}

#[cfg(feature = "indexmap")]
impl<K, V, S> RawRecord for indexmap::IndexMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn field_names(&self) -> Option<Vec<&str>> {
        Some(self.keys().map(|key| Borrow::<str>::borrow(key)).collect())
    }

    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }
}
