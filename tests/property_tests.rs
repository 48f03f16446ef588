//! Property-based tests - pragmatic coverage of the core guarantees:
//! write-then-parse reconstructs any tree, written text is a fixed point,
//! and attribute replacement keeps exactly one entry per name.

use himl::{from_str, parse_partial, to_string, Object, Value};
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = any::<String>().prop_map(Value::from);
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            any::<String>(),
            prop::collection::vec((any::<String>(), inner.clone()), 0..4),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, attributes, children)| {
                let mut obj = Object::with_name(name);
                for (key, value) in attributes {
                    obj.set(key, value);
                }
                for child in children {
                    obj.add(child);
                }
                Value::Object(obj)
            })
    })
}

/// An anonymous document root: attributes plus children, no name.
fn root_strategy() -> impl Strategy<Value = Object> {
    (
        prop::collection::vec((any::<String>(), value_strategy()), 0..5),
        prop::collection::vec(value_strategy(), 0..5),
    )
        .prop_map(|(attributes, children)| {
            let mut root = Object::new();
            for (key, value) in attributes {
                root.set(key, value);
            }
            for child in children {
                root.add(child);
            }
            root
        })
}

proptest! {
    #[test]
    fn write_then_parse_reconstructs_the_tree(root in root_strategy()) {
        let written = to_string(&root);
        let (reparsed, error) = parse_partial(&written);
        prop_assert!(error.is_none(), "error {:?} on {:?}", error, written);
        prop_assert_eq!(&reparsed, &root);
    }

    #[test]
    fn written_text_is_a_fixed_point(root in root_strategy()) {
        let first = to_string(&root);
        let reparsed = from_str(&first).unwrap();
        let second = to_string(&reparsed);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn any_text_survives_as_an_attribute(text in any::<String>()) {
        let mut root = Object::new();
        root.set("k", text.as_str());
        let back = from_str(&to_string(&root)).unwrap();
        prop_assert_eq!(back.get("k").and_then(|v| v.as_str()), Some(text.as_str()));
    }

    #[test]
    fn any_text_survives_as_a_child(text in any::<String>()) {
        let mut root = Object::new();
        root.add(text.as_str());
        let back = from_str(&to_string(&root)).unwrap();
        prop_assert_eq!(back.child_at(0).and_then(Value::as_str), Some(text.as_str()));
    }

    #[test]
    fn any_key_survives(key in any::<String>()) {
        let mut root = Object::new();
        root.set(key.as_str(), "v");
        let back = from_str(&to_string(&root)).unwrap();
        prop_assert!(back.get(key.as_str()).is_some());
        prop_assert_eq!(back.attribute_count(), 1);
    }

    #[test]
    fn set_keeps_exactly_one_entry(values in prop::collection::vec(any::<String>(), 1..10)) {
        let mut obj = Object::new();
        for value in &values {
            obj.set("key", value.as_str());
        }
        prop_assert_eq!(obj.attribute_count(), 1);
        prop_assert_eq!(
            obj.get("key").and_then(|v| v.as_str()),
            values.last().map(String::as_str)
        );
    }

    #[test]
    fn set_preserves_first_insertion_position(replacement in any::<String>()) {
        let mut obj = Object::new();
        obj.set("a", "1");
        obj.set("b", "2");
        obj.set("c", "3");
        obj.set("b", replacement.as_str());

        let order: Vec<_> = obj.attributes().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(order, vec!["a", "b", "c"]);
        prop_assert_eq!(obj.get("b").and_then(|v| v.as_str()), Some(replacement.as_str()));
    }
}
