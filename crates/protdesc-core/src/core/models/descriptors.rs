use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::ops::Index;

/// Ordered mapping from descriptor name to value.
///
/// Iteration follows insertion order, which each engine defines deterministically, while
/// lookups by name stay O(1). Inserting an existing name overwrites the value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorVector<V = f64> {
    names: Vec<String>,
    values: Vec<V>,
    index: HashMap<String, usize>,
}

impl<V> Default for DescriptorVector<V> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> DescriptorVector<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => self.values[i] = value,
            None => {
                self.index.insert(name.clone(), self.names.len());
                self.names.push(name);
                self.values.push(value);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.index.get(name).map(|&i| &self.values[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Set union: names already present keep their position and take the new value.
    pub fn extend(&mut self, other: DescriptorVector<V>) {
        for (name, value) in other.names.into_iter().zip(other.values) {
            self.insert(name, value);
        }
    }

    pub fn map<U>(self, f: impl FnMut(V) -> U) -> DescriptorVector<U> {
        DescriptorVector {
            names: self.names,
            values: self.values.into_iter().map(f).collect(),
            index: self.index,
        }
    }
}

impl<V> Index<&str> for DescriptorVector<V> {
    type Output = V;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no descriptor named '{name}'"),
        }
    }
}

impl<V, S: Into<String>> FromIterator<(S, V)> for DescriptorVector<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut vector = Self::new();
        for (name, value) in iter {
            vector.insert(name, value);
        }
        vector
    }
}

impl<V> IntoIterator for DescriptorVector<V> {
    type Item = (String, V);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter().zip(self.values)
    }
}

impl<V: Serialize> Serialize for DescriptorVector<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
