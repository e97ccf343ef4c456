use tabgrid::{build_layout, frozen_counts, Column, LogicalType, PinState};

fn schema(keys: &[&str]) -> Vec<Column> {
    keys.iter().map(|k| Column::new(k, LogicalType::Text)).collect()
}

fn layout_keys(schema: &[Column], pin: &PinState) -> Vec<String> {
    build_layout(schema, pin).iter().map(|c| c.key.clone()).collect()
}

#[test]
fn test_layout_is_always_a_permutation() {
    let schema = schema(&["a", "b", "c", "d", "e"]);
    let sequences: &[&[(&str, bool)]] = &[
        &[],
        &[("a", true)],
        &[("e", false), ("a", true), ("c", false)],
        &[("a", true), ("a", false), ("a", true)],
        &[("b", false), ("c", false), ("d", false)],
    ];

    for ops in sequences {
        let mut pin = PinState::new();
        for (key, left) in *ops {
            if *left {
                pin.pin_left(key);
            } else {
                pin.pin_right(key);
            }
        }
        let keys = layout_keys(&schema, &pin);
        assert_eq!(keys.len(), schema.len());
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, ["a", "b", "c", "d", "e"]);
    }
}

#[test]
fn test_sides_stay_disjoint_across_operations() {
    let mut pin = PinState::new();
    for key in ["a", "b", "c", "a", "b"] {
        pin.pin_left(key);
        let overlap = pin.left().iter().any(|k| pin.right().contains(k));
        assert!(!overlap);
        pin.pin_right(key);
        let overlap = pin.left().iter().any(|k| pin.right().contains(k));
        assert!(!overlap);
    }
}

#[test]
fn test_clear_from_any_prior_state() {
    let mut pin = PinState::new();
    pin.pin_left("a");
    pin.pin_right("b");
    pin.pin_left("c");
    pin.clear();
    assert!(pin.left().is_empty());
    assert!(pin.right().is_empty());
    assert!(pin.is_empty());
}

#[test]
fn test_left_appends_right_prepends() {
    let mut pin = PinState::new();
    pin.pin_left("a");
    pin.pin_left("b");
    pin.pin_right("x");
    pin.pin_right("y");
    assert_eq!(pin.left(), ["a", "b"]);
    assert_eq!(pin.right(), ["y", "x"]);
}

#[test]
fn test_stale_keys_excluded_everywhere() {
    let schema = schema(&["a", "b"]);
    let mut pin = PinState::new();
    pin.pin_left("removed");
    pin.pin_left("a");

    assert_eq!(layout_keys(&schema, &pin), ["a", "b"]);
    // Index column plus the one surviving left pin
    assert_eq!(frozen_counts(&schema, &pin), (2, 0));
}
