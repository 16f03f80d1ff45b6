use super::*;

#[test]
fn move_forward_shifts_middle_elements_back() {
    let mut items = vec!['a', 'b', 'c', 'd', 'e'];
    assert!(move_item(&mut items, 1, 3));
    assert_eq!(items, vec!['a', 'c', 'd', 'b', 'e']);
}

#[test]
fn move_backward_shifts_middle_elements_forward() {
    let mut items = vec!['a', 'b', 'c', 'd', 'e'];
    assert!(move_item(&mut items, 4, 0));
    assert_eq!(items, vec!['e', 'a', 'b', 'c', 'd']);
}

#[test]
fn move_to_same_index_is_identity() {
    let mut items = vec![1, 2, 3];
    assert!(move_item(&mut items, 2, 2));
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn adjacent_move_swaps() {
    let mut items = vec![1, 2, 3];
    assert!(move_item(&mut items, 0, 1));
    assert_eq!(items, vec![2, 1, 3]);
}

#[test]
fn out_of_range_indices_leave_slice_untouched() {
    let mut items = vec![1, 2, 3];
    assert!(!move_item(&mut items, 3, 0));
    assert!(!move_item(&mut items, 0, 7));
    assert_eq!(items, vec![1, 2, 3]);

    let mut empty: Vec<u8> = Vec::new();
    assert!(!move_item(&mut empty, 0, 0));
}

#[test]
fn every_move_preserves_elements_and_order_of_the_rest() {
    let original: Vec<u32> = (0..6).collect();
    for from in 0..original.len() {
        for to in 0..original.len() {
            let mut items = original.clone();
            assert!(move_item(&mut items, from, to));
            assert_eq!(items[to], original[from], "moved element lands at {to}");

            let mut sorted = items.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original, "multiset preserved for {from}->{to}");

            let rest: Vec<u32> = items.iter().copied().filter(|v| *v != original[from]).collect();
            let expected: Vec<u32> = original.iter().copied().filter(|v| *v != original[from]).collect();
            assert_eq!(rest, expected, "relative order preserved for {from}->{to}");
        }
    }
}
