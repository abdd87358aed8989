//! Deep equality matrix covering reflexivity, symmetry, the float policy,
//! absent values, containers and JSON trees.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use proptest::prelude::*;
#[cfg(feature = "json")]
use serde_json::json;
#[cfg(feature = "json")]
use value_adapter_equal::deep_equal;
use value_adapter_equal::{impl_deep_equal_via_partial_eq, DeepEqual};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl_deep_equal_via_partial_eq!(Rgb);

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_scalars() {
    assert!(().deep_equal(&()));
    assert!(true.deep_equal(&true));
    assert!('x'.deep_equal(&'x'));
    assert!(42i64.deep_equal(&42i64));
    assert!(String::from("10.").deep_equal(&String::from("10.")));
}

#[test]
fn reflexivity_nan() {
    let nan = f64::NAN;
    assert!(nan.deep_equal(&nan));
}

#[test]
fn reflexivity_user_type() {
    let c = Rgb { r: 1, g: 2, b: 3 };
    assert!(c.deep_equal(&c.clone()));
    assert!(!c.deep_equal(&Rgb { r: 1, g: 2, b: 4 }));
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

#[test]
fn symmetry_float_vs_nan() {
    assert!(!1.5f64.deep_equal(&f64::NAN));
    assert!(!f64::NAN.deep_equal(&1.5f64));
}

#[test]
fn symmetry_option() {
    let a: Option<i32> = Some(0);
    let b: Option<i32> = None;
    assert!(!a.deep_equal(&b));
    assert!(!b.deep_equal(&a));
}

// ---------------------------------------------------------------------------
// Absent and empty values
// ---------------------------------------------------------------------------

#[test]
fn none_equals_none() {
    let a: Option<String> = None;
    assert!(a.deep_equal(&None));
}

#[test]
fn none_not_equal_default() {
    assert!(!None::<String>.deep_equal(&Some(String::new())));
    assert!(!None::<u32>.deep_equal(&Some(0u32)));
}

#[test]
fn empty_containers_equal() {
    assert!(Vec::<i32>::new().deep_equal(&Vec::new()));
    assert!(BTreeMap::<String, f64>::new().deep_equal(&BTreeMap::new()));
    assert!(HashMap::<String, f64>::new().deep_equal(&HashMap::new()));
    assert!(BTreeSet::<i32>::new().deep_equal(&BTreeSet::new()));
    assert!(HashSet::<i32>::new().deep_equal(&HashSet::new()));
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn vec_order_matters() {
    assert!(!vec![1, 2].deep_equal(&vec![2, 1]));
}

#[test]
fn array_and_tuple() {
    assert!([f64::NAN, 1.0].deep_equal(&[f64::NAN, 1.0]));
    assert!((1u8, "a", Some(2.5f32)).deep_equal(&(1u8, "a", Some(2.5f32))));
    assert!(!(1u8, "a").deep_equal(&(1u8, "b")));
}

#[test]
fn hashmap_values_use_float_policy() {
    let mut a = HashMap::new();
    a.insert("n", f64::NAN);
    let mut b = HashMap::new();
    b.insert("n", f64::NAN);
    assert!(a.deep_equal(&b));

    b.insert("m", 0.0);
    assert!(!a.deep_equal(&b));
}

#[test]
fn smart_pointers_compare_content() {
    assert!(Box::new(3).deep_equal(&Box::new(3)));
    assert!(Arc::new(vec![1]).deep_equal(&Arc::new(vec![1])));
    assert!(!Rc::new("a".to_string()).deep_equal(&Rc::new("b".to_string())));
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[cfg(feature = "json")]
#[test]
fn json_nested_equal() {
    let a = json!({"complex": [1, 2, {"nested": true}]});
    let b = json!({"complex": [1, 2, {"nested": true}]});
    assert!(deep_equal(&a, &b));
}

#[cfg(feature = "json")]
#[test]
fn json_null_vs_empty() {
    assert!(!deep_equal(&json!(null), &json!({})));
    assert!(!deep_equal(&json!(null), &json!([])));
    assert!(!deep_equal(&json!(null), &json!("")));
    assert!(!deep_equal(&json!(null), &json!(0)));
}

#[cfg(feature = "json")]
#[test]
fn json_empty_objects_equal() {
    assert!(deep_equal(&json!({}), &json!({})));
}

#[cfg(feature = "json")]
#[test]
fn json_number_representation() {
    assert!(deep_equal(&json!(1.5), &json!(1.5)));
    assert!(!deep_equal(&json!(0.0), &json!(0)));
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn deep_equal_is_reflexive_for_floats(x in any::<f64>()) {
        prop_assert!(x.deep_equal(&x));
    }

    #[test]
    fn deep_equal_is_symmetric_for_float_vecs(
        a in proptest::collection::vec(any::<f64>(), 0..6),
        b in proptest::collection::vec(any::<f64>(), 0..6),
    ) {
        prop_assert_eq!(a.deep_equal(&b), b.deep_equal(&a));
    }

    #[test]
    fn deep_equal_matches_partial_eq_for_strings(a in ".{0,8}", b in ".{0,8}") {
        prop_assert_eq!(a.deep_equal(&b), a == b);
    }
}
