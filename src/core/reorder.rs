//! List reordering shared by the column list and the task list.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

/// Moves the element at `from` so that it ends up at index `to`.
///
/// Elements between the two positions shift by one; every other element keeps
/// its place. Returns `false` and leaves the slice alone when either index is
/// out of range.
pub fn move_item<T>(items: &mut [T], from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from < to {
        items[from..=to].rotate_left(1);
    } else if from > to {
        items[to..=from].rotate_right(1);
    }
    true
}
