use crate::ComponentRef;
use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
    ops::Index,
};

/// The key under which an element stores the component it wraps.
pub const COMPONENT_PROP: &str = "Component";

/// A single prop value.
///
/// Props are opaque payloads as far as this crate is concerned. The variants cover what a
/// rendering runtime typically needs to carry, and [`PropValue::Component`] carries component
/// references.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PropValue {
    /// The absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    List(Vec<PropValue>),
    /// A nested props bag.
    Map(Props),
    /// A reference to a component.
    Component(ComponentRef),
}

impl PropValue {
    /// Returns true if the value is [`PropValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if this is a [`PropValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`PropValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number if this is a [`PropValue::Float`] or a [`PropValue::Int`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Returns the string if this is a [`PropValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the component reference if this is a [`PropValue::Component`].
    pub fn as_component(&self) -> Option<&ComponentRef> {
        match self {
            Self::Component(c) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(Bool: bool);
impl_from!(Int: i8, i16, i32, i64, u8, u16, u32);
impl_from!(Float: f32, f64);
impl_from!(String: String, &str, &String);
impl_from!(Map: Props);
impl_from!(Component: ComponentRef);

// Integers that might not fit in an `i64` fall back to `Float`, the same as JSON numbers do.
macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, isize, i128, u128);

impl From<()> for PropValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// An ordered bag of props.
///
/// Entries keep the order in which their keys were first inserted. Inserting a key that is already
/// present replaces the value without moving the key, so laying one bag over another behaves like
/// an object spread: later values win, earlier positions stay.
///
/// Lookups and inserts are O(1). Removal is O(n), since the entries after the removed one shift.
#[derive(Clone, Default)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
    index: HashMap<String, usize>,
}

impl Props {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bag with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`Props::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets the value for `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Returns true if the bag has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Removes the entry for `key`. The remaining entries keep their order.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for (k, _) in &self.entries[i..] {
            if let Some(position) = self.index.get_mut(k) {
                *position -= 1;
            }
        }
        Some(value)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over the values in order.
    pub fn values(&self) -> impl Iterator<Item = &PropValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Debug for Props {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Index<&str> for Props {
    type Output = PropValue;

    fn index(&self, key: &str) -> &PropValue {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no prop named `{key}`"),
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> Extend<(K, V)> for Props {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::vec::IntoIter<(String, PropValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Props {
    type Item = (&'a str, &'a PropValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a PropValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// An error converting a value into [`Props`].
#[derive(Debug, thiserror::Error)]
pub enum PropsError {
    /// Props can only be built from an object-like value.
    #[error("expected an object, found {found}")]
    NotAnObject {
        /// The kind of value that was found instead.
        found: &'static str,
    },
}

impl TryFrom<PropValue> for Props {
    type Error = PropsError;

    fn try_from(value: PropValue) -> Result<Self, Self::Error> {
        let found = match value {
            PropValue::Map(props) => return Ok(props),
            PropValue::Null => "null",
            PropValue::Bool(_) => "a boolean",
            PropValue::Int(_) | PropValue::Float(_) => "a number",
            PropValue::String(_) => "a string",
            PropValue::List(_) => "a list",
            PropValue::Component(_) => "a component",
        };
        Err(PropsError::NotAnObject { found })
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde::ser::{Serialize, SerializeMap, Serializer};
    use serde_json::Value;

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    impl From<Value> for PropValue {
        fn from(value: Value) -> Self {
            match value {
                Value::Null => Self::Null,
                Value::Bool(b) => Self::Bool(b),
                Value::Number(n) => match n.as_i64() {
                    Some(n) => Self::Int(n),
                    None => n.as_f64().map_or(Self::Null, Self::Float),
                },
                Value::String(s) => Self::String(s),
                Value::Array(items) => Self::List(items.into_iter().map(Into::into).collect()),
                Value::Object(map) => Self::Map(map.into_iter().collect()),
            }
        }
    }

    impl TryFrom<Value> for Props {
        type Error = PropsError;

        fn try_from(value: Value) -> Result<Self, Self::Error> {
            match value {
                Value::Object(map) => Ok(map.into_iter().collect()),
                other => Err(PropsError::NotAnObject { found: kind(&other) }),
            }
        }
    }

    impl Serialize for Props {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    impl Serialize for PropValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Null => serializer.serialize_unit(),
                Self::Bool(b) => serializer.serialize_bool(*b),
                Self::Int(n) => serializer.serialize_i64(*n),
                Self::Float(n) => serializer.serialize_f64(*n),
                Self::String(s) => serializer.serialize_str(s),
                Self::List(items) => items.serialize(serializer),
                Self::Map(props) => props.serialize(serializer),
                Self::Component(c) => c.serialize(serializer),
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut props = Props::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(props.insert("b", "two"), Some(PropValue::Int(2)));
        assert_eq!(props.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(props["b"].as_str(), Some("two"));
        assert_eq!(props.insert("d", 4), None);
        assert_eq!(props.len(), 4);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut props = Props::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(props.remove("a"), Some(PropValue::Int(1)));
        assert_eq!(props.remove("a"), None);
        assert_eq!(props.keys().collect::<Vec<_>>(), ["b", "c"]);
        assert!(!props.contains_key("a"));
    }

    #[test]
    fn test_large_bag() {
        let n = 50_000;
        let mut props: Props = (0..n).map(|i| (format!("k{i}"), i)).collect();
        assert_eq!(props.len(), n);
        assert_eq!(props["k49999"], PropValue::Int(49_999));

        props.extend((0..n).step_by(2).map(|i| (format!("k{i}"), -1)));
        assert_eq!(props.len(), n);
        assert_eq!(props.keys().nth(2), Some("k2"));
        assert_eq!(props["k2"], PropValue::Int(-1));
        assert_eq!(props["k3"], PropValue::Int(3));
    }

    #[test]
    fn test_lookup_after_remove() {
        let mut props = Props::new().with("a", 1).with("b", 2).with("c", 3).with("d", 4);
        props.remove("b");
        assert_eq!(props["c"], PropValue::Int(3));
        assert_eq!(props["d"], PropValue::Int(4));

        assert_eq!(props.insert("c", 30), Some(PropValue::Int(3)));
        props.insert("b", 20);
        assert_eq!(props.keys().collect::<Vec<_>>(), ["a", "c", "d", "b"]);
        assert_eq!(props["b"], PropValue::Int(20));
        assert_eq!(props, Props::new().with("a", 1).with("c", 30).with("d", 4).with("b", 20));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(PropValue::from(3usize), PropValue::Int(3));
        assert_eq!(PropValue::from(vec![1u8, 2].len()), PropValue::Int(2));
        assert_eq!(PropValue::from(-4isize), PropValue::Int(-4));
        assert_eq!(PropValue::from(u64::MAX), PropValue::Float(u64::MAX as f64));
    }

    #[test]
    fn test_extend_overlays() {
        let mut props: Props = [("a", 1), ("b", 2)].into_iter().collect();
        props.extend([("b", 20), ("c", 30)]);
        assert_eq!(
            props.into_iter().collect::<Vec<_>>(),
            [
                ("a".to_string(), PropValue::Int(1)),
                ("b".to_string(), PropValue::Int(20)),
                ("c".to_string(), PropValue::Int(30)),
            ]
        );
    }

    #[test]
    fn test_equality_is_ordered() {
        let ab = Props::new().with("a", 1).with("b", 2);
        let ba = Props::new().with("b", 2).with("a", 1);
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(PropValue::from(Some(5u8)), PropValue::Int(5));
        assert_eq!(PropValue::from(None::<i32>), PropValue::Null);
        assert_eq!(PropValue::from(2.5f32).as_float(), Some(2.5));
        assert_eq!(PropValue::from(7).as_float(), Some(7.0));
        assert_eq!(PropValue::from(true).as_bool(), Some(true));
        assert!(PropValue::from("x").as_int().is_none());
    }

    #[test]
    fn test_try_from_prop_value() {
        let inner = Props::new().with("a", 1);
        assert_eq!(Props::try_from(PropValue::Map(inner.clone())).unwrap(), inner);

        let err = Props::try_from(PropValue::from("nope")).unwrap_err();
        assert_eq!(err.to_string(), "expected an object, found a string");
    }

    #[test]
    fn test_debug() {
        let props = Props::new().with("id", 1);
        assert_eq!(format!("{props:?}"), r#"{"id": Int(1)}"#);
    }

    #[test]
    #[should_panic(expected = "no prop named `nope`")]
    fn test_index_missing() {
        let _ = &Props::new()["nope"];
    }
}
