//! Collection and map shape and element-containment checks

use crate::checks::within_bounds;
use crate::constraint::Constraint;
use crate::validator::Property;
use crate::value::ToValue;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

macro_rules! impl_seq_checks {
    ($($seq:ty),*) => {
        $(impl<'a, 'v, E: ToValue + PartialEq> Property<'a, 'v, $seq> {
            pub fn is_empty(self) -> Self {
                self.check(|v| v.is_empty(), |_| Constraint::Empty)
            }

            pub fn is_not_empty(self) -> Self {
                self.check(|v| !v.is_empty(), |_| Constraint::NotEmpty)
            }

            /// Element count tested against whichever bounds are present.
            pub fn has_size(self, min: Option<usize>, max: Option<usize>) -> Self {
                self.check(
                    |v| within_bounds(v.len(), min, max),
                    |_| Constraint::Size { min, max },
                )
            }

            pub fn contains(self, element: &E) -> Self {
                let snapshot = element.to_value();
                self.check(
                    |v| v.contains(element),
                    move |_| Constraint::Contains { value: snapshot },
                )
            }

            pub fn does_not_contain(self, element: &E) -> Self {
                let snapshot = element.to_value();
                self.check(
                    |v| !v.contains(element),
                    move |_| Constraint::NotContain { value: snapshot },
                )
            }

            pub fn contains_all(self, elements: &[E]) -> Self {
                let snapshot: Vec<_> = elements.iter().map(ToValue::to_value).collect();
                self.check(
                    |v| elements.iter().all(|e| v.contains(e)),
                    move |_| Constraint::ContainsAll { values: snapshot },
                )
            }

            pub fn contains_any(self, elements: &[E]) -> Self {
                let snapshot: Vec<_> = elements.iter().map(ToValue::to_value).collect();
                self.check(
                    |v| elements.iter().any(|e| v.contains(e)),
                    move |_| Constraint::ContainsAny { values: snapshot },
                )
            }

            pub fn does_not_contain_all(self, elements: &[E]) -> Self {
                let snapshot: Vec<_> = elements.iter().map(ToValue::to_value).collect();
                self.check(
                    |v| !elements.iter().all(|e| v.contains(e)),
                    move |_| Constraint::NotContainAll { values: snapshot },
                )
            }

            pub fn does_not_contain_any(self, elements: &[E]) -> Self {
                let snapshot: Vec<_> = elements.iter().map(ToValue::to_value).collect();
                self.check(
                    |v| !elements.iter().any(|e| v.contains(e)),
                    move |_| Constraint::NotContainAny { values: snapshot },
                )
            }
        })*
    };
}

impl_seq_checks!(Vec<E>, [E]);

macro_rules! impl_map_checks {
    ($($map:ident),*) => {
        $(impl<'a, 'v, K, V> Property<'a, 'v, $map<K, V>>
        where
            K: Display + PartialEq,
            V: ToValue + PartialEq,
        {
            pub fn is_empty(self) -> Self {
                self.check(|v| v.is_empty(), |_| Constraint::Empty)
            }

            pub fn is_not_empty(self) -> Self {
                self.check(|v| !v.is_empty(), |_| Constraint::NotEmpty)
            }

            pub fn has_size(self, min: Option<usize>, max: Option<usize>) -> Self {
                self.check(
                    |v| within_bounds(v.len(), min, max),
                    |_| Constraint::Size { min, max },
                )
            }

            pub fn contains_key(self, key: &K) -> Self {
                let snapshot = key.to_string().to_value();
                self.check(
                    |v| v.iter().any(|(k, _)| k == key),
                    move |_| Constraint::Contains { value: snapshot },
                )
            }

            pub fn contains_value(self, value: &V) -> Self {
                let snapshot = value.to_value();
                self.check(
                    |v| v.iter().any(|(_, candidate)| candidate == value),
                    move |_| Constraint::Contains { value: snapshot },
                )
            }
        })*
    };
}

impl_map_checks!(HashMap, BTreeMap);

#[cfg(test)]
mod tests {
    use crate::constraint::Constraint;
    use crate::validator::validate;
    use crate::value::ToValue;
    use std::collections::HashMap;

    #[test]
    fn test_collection_shape() {
        let items: Vec<i32> = vec![];
        assert!(validate(items, |v, items| {
            v.property("items", items).is_empty();
        })
        .is_ok());

        let items = vec![1, 2, 3];
        assert!(validate(items, |v, items| {
            v.property("items", items)
                .is_not_empty()
                .has_size(Some(3), Some(3));
        })
        .is_ok());
    }

    #[test]
    fn test_collection_containment() {
        let items = vec![1, 2, 3];
        let err = validate(items, |v, items| {
            v.property("items", items)
                .contains(&2)
                .contains_all(&[1, 3])
                .contains_any(&[9, 2])
                .does_not_contain(&9)
                .does_not_contain_any(&[7, 8])
                .does_not_contain_all(&[1, 9])
                .contains(&5);
        })
        .unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Contains { value: 5.to_value() }
        );
        assert_eq!(err.violations[0].value, Some(vec![1, 2, 3].to_value()));
    }

    #[test]
    fn test_size_bounds_each_side() {
        let items = vec![1, 2];
        assert!(validate(items.clone(), |v, items| {
            v.property("items", items).has_size(Some(3), None);
        })
        .is_err());
        assert!(validate(items, |v, items| {
            v.property("items", items).has_size(None, Some(2));
        })
        .is_ok());
    }

    #[test]
    fn test_slice_checks() {
        let items = vec![1, 2, 3];
        assert!(validate(items, |v, items| {
            v.property("items", items.as_slice())
                .is_not_empty()
                .contains(&2)
                .has_size(None, Some(3));
        })
        .is_ok());
    }

    #[test]
    fn test_map_checks() {
        let mut scores = HashMap::new();
        scores.insert("ada".to_string(), 10);
        scores.insert("bob".to_string(), 20);

        assert!(validate(scores, |v, scores| {
            v.property("scores", scores)
                .is_not_empty()
                .has_size(Some(2), Some(2))
                .contains_key(&"ada".to_string())
                .contains_value(&20);
        })
        .is_ok());
    }

    #[test]
    fn test_map_missing_key_reports_contains() {
        let mut scores = HashMap::new();
        scores.insert("ada".to_string(), 10);

        let err = validate(scores, |v, scores| {
            v.property("scores", scores).contains_key(&"bob".to_string());
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Contains { value: "bob".to_value() }
        );
    }
}
