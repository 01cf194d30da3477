use fyd_values::{Value, value};

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(1u8),
        Value::from(1),
        Value::from(1u32),
        Value::from(1.0f32),
        Value::from(1.0f64),
        Value::from(f64::NAN),
        Value::from(true),
        Value::from("1"),
        value!([1, 2]),
        value!([2, 1]),
        value!({ "a" => 1 }),
        value!({ 1 => 1 }),
        value!({ "a" => [1, { "b" => null }] }),
    ]
}

#[test]
fn equality_is_reflexive() {
    for v in samples() {
        assert_eq!(v, v.clone(), "{v:?}");
    }
}

#[test]
fn equality_is_symmetric() {
    let all = samples();
    for a in &all {
        for b in &all {
            assert_eq!(a == b, b == a, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn equality_is_transitive() {
    let all: Vec<Value> = samples()
        .into_iter()
        .flat_map(|v| [v.clone(), v])
        .collect();
    for a in &all {
        for b in &all {
            for c in &all {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}

#[test]
fn distinct_samples_are_unequal() {
    let all = samples();
    for (i, a) in all.iter().enumerate() {
        for (j, b) in all.iter().enumerate() {
            assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn no_cross_kind_numeric_equality() {
    assert_ne!(Value::from(3), Value::from(3.0f32));
    assert_ne!(Value::from(3), Value::from(3.0f64));
    assert_ne!(Value::from(3u8), Value::from(3));
    assert_ne!(Value::from(3u32), Value::from(3));
    assert_ne!(Value::from(3.0f32), Value::from(3.0f64));
    assert_ne!(Value::from(1), Value::from(true));
    assert_ne!(Value::from(0), Value::Null);
}

#[test]
fn vector_equality_is_positional() {
    assert_eq!(value!([1, "a"]), value!([1, "a"]));
    assert_ne!(value!([1, "a"]), value!(["a", 1]));
    assert_ne!(value!([1]), value!([1, 1]));
    assert_ne!(value!([]), value!({}));
}

#[test]
fn map_equality_ignores_insertion_order() {
    let forward: Value = (0..50).map(|i| (i.to_string(), Value::from(i))).collect();
    let backward: Value = (0..50)
        .rev()
        .map(|i| (i.to_string(), Value::from(i)))
        .collect();
    assert_eq!(forward, backward);

    let forward: Value = (0..50).map(|i| (i, Value::from(i))).collect();
    let backward: Value = (0..50).rev().map(|i| (i, Value::from(i))).collect();
    assert_eq!(forward, backward);
}

#[test]
fn map_equality_compares_keys_and_values() {
    assert_ne!(value!({ "a" => 1 }), value!({ "b" => 1 }));
    assert_ne!(value!({ "a" => 1 }), value!({ "a" => 2 }));
    assert_ne!(value!({ "a" => 1 }), value!({ "a" => 1, "b" => 2 }));
    assert_ne!(value!({ "1" => 1 }), value!({ 1 => 1 }));
}

#[test]
fn nested_equality_recurses() {
    let a = value!({ "list" => [1, { "deep" => [true] }] });
    let b = value!({ "list" => [1, { "deep" => [true] }] });
    let c = value!({ "list" => [1, { "deep" => [false] }] });
    assert_eq!(a, b);
    assert_ne!(a, c);
}
