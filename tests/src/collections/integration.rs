#![cfg(test)]
use primer_common::values::TextStyle;
use primer_common::{ErrorKind, PrimerError};
use primer_core::collections::sort::{merge_sort, sorted};
use primer_core::collections::{BoundedStack, MaxHeap};
use proptest::prelude::*;

/// Styles pushed onto a stack come back in reverse order.
#[test]
fn stack_of_styles_is_lifo() -> anyhow::Result<()> {
    let mut stack: BoundedStack<TextStyle> = BoundedStack::new();
    for label in ["bold", "italics", "underline"] {
        stack.push(TextStyle::lookup(label)?)?;
    }

    assert_eq!(stack.pop()?, TextStyle::Underline);
    assert_eq!(stack.pop()?, TextStyle::Italics);
    assert_eq!(stack.pop()?, TextStyle::Bold);
    assert_eq!(stack.pop().map_err(|e| e.kind()), Err(ErrorKind::InvalidArgument));
    Ok(())
}

#[test]
fn eleventh_push_fails_at_default_capacity() {
    let mut stack: BoundedStack<u8> = BoundedStack::default();
    for i in 0..10 {
        assert!(stack.push(i).is_ok(), "push {i} should fit");
    }
    assert_eq!(stack.push(10), Err(PrimerError::StackFull(10)));
}

proptest! {
    #[test]
    fn heap_drains_like_reverse_sort(values in proptest::collection::vec(any::<i32>(), 0..100)) {
        let mut heap = MaxHeap::new(values.len());
        for &value in &values {
            heap.insert(value).unwrap();
        }

        let mut drained = Vec::new();
        while let Ok(value) = heap.extract_max() {
            drained.push(value);
        }

        let mut expected = sorted(values);
        expected.reverse();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn merge_sort_agrees_with_sorted(values in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut merged = values.clone();
        merge_sort(&mut merged);
        prop_assert_eq!(merged, sorted(values));
    }
}

/// Capacities taken straight from CLI `usize` flags only bound growth.
#[test]
fn unbounded_limits_accept_items() -> anyhow::Result<()> {
    let mut stack: BoundedStack<String> = BoundedStack::with_capacity(usize::MAX);
    stack.push("a".to_string())?;
    assert_eq!(stack.pop()?, "a");

    let mut heap: MaxHeap = MaxHeap::new(usize::MAX);
    heap.insert(-3)?;
    heap.insert(8)?;
    assert_eq!(heap.extract_max()?, 8);
    Ok(())
}
