// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable source trait definition.
//!
//! This module defines the `VarSource` trait, the read-only key/value mapping
//! a binding reads raw values from. The live process environment is one such
//! source; plain maps and arrays of pairs are others and are handy in tests.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// A trait for read-only variable sources.
///
/// The accessor engine never writes to a source. Reads must be repeatable:
/// asking for the same key twice without outside interference yields the same
/// answer.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a binding can be stored in a
/// process-wide static.
///
/// # Examples
///
/// ```rust
/// use envcast::ports::VarSource;
///
/// struct Fixed;
///
/// impl VarSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn get(&self, key: &str) -> Option<String> {
///         (key == "MODE").then(|| "test".to_string())
///     }
///
///     fn entries(&self) -> Vec<(String, String)> {
///         vec![("MODE".to_string(), "test".to_string())]
///     }
/// }
///
/// let env = envcast::from(Fixed);
/// assert_eq!(env.get("MODE").as_string().unwrap().as_deref(), Some("test"));
/// ```
pub trait VarSource: Send + Sync {
    /// Returns a short name for this source, used in log output.
    fn name(&self) -> &str;

    /// Returns the raw value stored at `key`, or `None` if there is no entry.
    ///
    /// An entry holding the empty string is present, not absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns every entry of the source.
    fn entries(&self) -> Vec<(String, String)>;
}

impl<K, V, S> VarSource for HashMap<K, V, S>
where
    K: Borrow<str> + AsRef<str> + Eq + Hash + Send + Sync,
    V: AsRef<str> + Send + Sync,
    S: BuildHasher + Send + Sync,
{
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| v.as_ref().to_string())
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect()
    }
}

impl<K, V> VarSource for BTreeMap<K, V>
where
    K: Borrow<str> + AsRef<str> + Ord + Send + Sync,
    V: AsRef<str> + Send + Sync,
{
    fn name(&self) -> &str {
        "map"
    }

    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).map(|v| v.as_ref().to_string())
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect()
    }
}

/// Pairs are searched from the end, so a later duplicate key wins.
impl<K, V> VarSource for Vec<(K, V)>
where
    K: AsRef<str> + Send + Sync,
    V: AsRef<str> + Send + Sync,
{
    fn name(&self) -> &str {
        "pairs"
    }

    fn get(&self, key: &str) -> Option<String> {
        lookup_pairs(self, key)
    }

    fn entries(&self) -> Vec<(String, String)> {
        collect_pairs(self)
    }
}

impl<K, V, const N: usize> VarSource for [(K, V); N]
where
    K: AsRef<str> + Send + Sync,
    V: AsRef<str> + Send + Sync,
{
    fn name(&self) -> &str {
        "pairs"
    }

    fn get(&self, key: &str) -> Option<String> {
        lookup_pairs(self, key)
    }

    fn entries(&self) -> Vec<(String, String)> {
        collect_pairs(self)
    }
}

impl<T: VarSource + ?Sized> VarSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn entries(&self) -> Vec<(String, String)> {
        (**self).entries()
    }
}

fn lookup_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)], key: &str) -> Option<String> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref().to_string())
}

fn collect_pairs<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
        .collect()
}
