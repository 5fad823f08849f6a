//! Type-safe identifiers for catalogue entities.
//!
//! Names use `Arc<str>` so the stop→buses index, the router's edge table and
//! itinerary segments can all hold a name without copying the string.
//! Stops additionally carry a dense [`StopId`] used as the graph vertex.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_name {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        // Must agree with `Borrow<str>`: hash exactly what `str` hashes.
        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_name!(StopName);
impl_name!(BusName);

/// Dense stop index, assigned in first-insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub(crate) usize);

impl StopId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_name_equality() {
        let a = StopName::new("Marushkino");
        let b = StopName::new("Marushkino");
        let c = a.clone();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(Arc::ptr_eq(&a.0, &c.0));
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(BusName::new("750"), 7);

        assert_eq!(map.get("750"), Some(&7));
        assert_eq!(map.get("256"), None);
    }

    #[test]
    fn test_names_order_lexicographically() {
        let set: BTreeSet<BusName> = ["828", "256", "750"].into_iter().map(BusName::from).collect();
        let ordered: Vec<&str> = set.iter().map(BusName::as_str).collect();
        assert_eq!(ordered, vec!["256", "750", "828"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(StopName::new("Tolstopaltsevo").to_string(), "Tolstopaltsevo");
        assert_eq!(StopId(3).to_string(), "#3");
    }
}
