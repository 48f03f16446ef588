//! Object nodes for HIML trees.
//!
//! This module provides [`Object`], the branch node of a HIML tree. An
//! object owns three things: an optional name, an ordered table of named
//! attributes, and an ordered sequence of positional children.
//!
//! ## Why IndexMap?
//!
//! Attributes are backed by [`IndexMap`] rather than `HashMap` so that:
//!
//! - **Output is deterministic**: attributes serialize in the order they
//!   were first set
//! - **Replacement is in-place**: setting an existing name keeps its
//!   original position and drops the old value, instead of growing the
//!   table with a stale entry
//!
//! ## Examples
//!
//! ```rust
//! use himl::Object;
//!
//! let mut obj = Object::new();
//! obj.set("host", "localhost");
//! obj.set("port", 8080);
//! obj.add("replica_a");
//!
//! assert_eq!(obj.get("host").and_then(|v| v.as_str()), Some("localhost"));
//! assert_eq!(obj.child_count(), 1);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::fmt;

/// A branch node: named attributes plus positional children.
///
/// The `name` is a property of the slot the object occupies, not of its
/// identity: the anonymous document root and unnamed array elements have
/// an empty name, while `server { ... }` children and `key = label { ... }`
/// attribute values carry one.
///
/// # Examples
///
/// ```rust
/// use himl::Object;
///
/// let mut obj = Object::with_name("server");
/// obj.set("port", "8080");
///
/// assert_eq!(obj.name(), "server");
/// assert_eq!(obj.attribute_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    name: String,
    attributes: IndexMap<String, Value>,
    children: Vec<Value>,
}

impl Object {
    /// Creates an empty, unnamed object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Object;
    ///
    /// let obj = Object::new();
    /// assert!(obj.name().is_empty());
    /// assert_eq!(obj.attribute_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Object::default()
    }

    /// Creates an empty object with the given name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Object {
            name: name.into(),
            ..Object::default()
        }
    }

    /// Returns the object's name; empty means unnamed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the object's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets an attribute, replacing any existing entry for the same name.
    ///
    /// Replacement is strict: the entry keeps its original position, the
    /// old value is dropped, and exactly one entry for `name` survives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("a", "1");
    /// obj.set("b", "2");
    /// obj.set("a", "3");
    ///
    /// assert_eq!(obj.get("a").and_then(|v| v.as_str()), Some("3"));
    /// assert_eq!(obj.attribute_count(), 2);
    /// let names: Vec<_> = obj.attributes().map(|(n, _)| n.as_str()).collect();
    /// assert_eq!(names, vec!["a", "b"]);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns the attribute value for `name`, if set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Object;
    ///
    /// let mut obj = Object::new();
    /// obj.set("port", "8080");
    /// assert_eq!(obj.get("port").map(|v| v.to_i64()), Some(8080));
    /// assert!(obj.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns a mutable reference to the attribute value for `name`.
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.attributes.get_mut(name)
    }

    /// Removes an attribute, preserving the order of the remaining
    /// entries. Returns the removed value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.attributes.shift_remove(name)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Returns an iterator over the attributes in insertion order.
    pub fn attributes(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.attributes.iter()
    }

    /// Appends a positional child.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::{Object, Value};
    ///
    /// let mut obj = Object::new();
    /// obj.add("red");
    /// obj.add(Object::with_name("nested"));
    ///
    /// assert_eq!(obj.child_count(), 2);
    /// assert!(obj.child_at(1).is_some_and(Value::is_object));
    /// ```
    pub fn add(&mut self, child: impl Into<Value>) {
        self.children.push(child.into());
    }

    /// Returns the child at position `i`, if present.
    #[must_use]
    pub fn child_at(&self, i: usize) -> Option<&Value> {
        self.children.get(i)
    }

    /// Returns the number of positional children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the children as a slice, in order.
    #[must_use]
    pub fn children(&self) -> &[Value] {
        &self.children
    }

    /// Returns `true` if the object has neither attributes nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.children.is_empty()
    }
}

/// Renders the object as HIML text, as the document root.
///
/// An unnamed object prints braceless; a named one is wrapped.
///
/// # Examples
///
/// ```rust
/// let root = himl::from_str("a = 1").unwrap();
/// assert_eq!(root.to_string(), "a = 1\n");
/// ```
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut obj = Object::new();
        obj.set("first", "1");
        obj.set("second", "2");
        obj.set("first", "override");

        assert_eq!(obj.attribute_count(), 2);
        assert_eq!(obj.get("first").and_then(|v| v.as_str()), Some("override"));
        let order: Vec<_> = obj.attributes().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn set_replaces_repeatedly() {
        let mut obj = Object::new();
        for i in 0..10 {
            obj.set("key", i.to_string());
        }
        assert_eq!(obj.attribute_count(), 1);
        assert_eq!(obj.get("key").and_then(|v| v.as_str()), Some("9"));
    }

    #[test]
    fn children_keep_order() {
        let mut obj = Object::new();
        obj.add("a");
        obj.add("b");
        obj.add("c");

        assert_eq!(obj.child_count(), 3);
        assert_eq!(obj.child_at(1).and_then(|v| v.as_str()), Some("b"));
        assert!(obj.child_at(3).is_none());
    }

    #[test]
    fn remove_preserves_order() {
        let mut obj = Object::new();
        obj.set("a", "1");
        obj.set("b", "2");
        obj.set("c", "3");

        let removed = obj.remove("b");
        assert_eq!(removed.and_then(|v| v.as_str().map(String::from)), Some("2".to_string()));
        let order: Vec<_> = obj.attributes().map(|(n, _)| n.as_str()).collect();
        assert_eq!(order, vec!["a", "c"]);
    }

    #[test]
    fn attributes_and_children_coexist() {
        let mut obj = Object::with_name("mixed");
        obj.set("key", "value");
        obj.add("element");
        obj.add(Object::with_name("inner"));

        assert_eq!(obj.name(), "mixed");
        assert_eq!(obj.attribute_count(), 1);
        assert_eq!(obj.child_count(), 2);
        assert!(!obj.is_empty());
    }
}
