use crate::namelist::join_names;

#[test]
fn joins_names_that_fit() {
    let list = join_names(["a", "b"], 4);
    assert_eq!(list.text, "a, b");
    assert!(!list.truncated);
}

#[test]
fn exact_capacity_is_not_truncation() {
    let list = join_names(["abc"], 3);
    assert_eq!(list.text, "abc");
    assert!(!list.truncated);
}

#[test]
fn drops_trailing_names_that_overflow() {
    let list = join_names(["a", "b", "c"], 4);
    assert_eq!(list.text, "a, b");
    assert!(list.truncated);
}

#[test]
fn never_splits_a_name() {
    let list = join_names(["alpha"], 3);
    assert_eq!(list.text, "");
    assert!(list.truncated);
}

#[test]
fn keeps_leading_names_only() {
    // "x" alone would fit, but it comes after the name that overflowed.
    let list = join_names(["abcdef", "x"], 5);
    assert_eq!(list.text, "");
    assert!(list.truncated);
}

#[test]
fn empty_input_is_empty_output() {
    let list = join_names(std::iter::empty(), 16);
    assert_eq!(list.text, "");
    assert!(!list.truncated);
}

#[test]
fn zero_capacity_drops_everything() {
    let list = join_names(["a"], 0);
    assert_eq!(list.text, "");
    assert!(list.truncated);
}

#[test]
fn output_never_exceeds_capacity() {
    let names = ["first", "second", "third", "fourth", "fifth"];
    for capacity in 0..40 {
        let list = join_names(names, capacity);
        assert!(list.text.len() <= capacity, "capacity {capacity}");
    }
}
