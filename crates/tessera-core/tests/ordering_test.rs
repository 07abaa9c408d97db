//! Tests for the contiguous-rank ordering engine

use rstest::rstest;
use tessera_core::ordering::{Ranked, next_rank, renumber, reorder};

#[derive(Clone, Debug, PartialEq)]
struct Row {
	name: &'static str,
	rank: u32,
}

impl Row {
	fn new(name: &'static str, rank: u32) -> Self {
		Self { name, rank }
	}
}

impl Ranked for Row {
	fn rank(&self) -> u32 {
		self.rank
	}

	fn set_rank(&mut self, rank: u32) {
		self.rank = rank;
	}
}

fn abc() -> Vec<Row> {
	vec![Row::new("a", 1), Row::new("b", 2), Row::new("c", 3)]
}

fn names(rows: &[Row]) -> Vec<&'static str> {
	rows.iter().map(|r| r.name).collect()
}

fn ranks(rows: &[Row]) -> Vec<u32> {
	rows.iter().map(Ranked::rank).collect()
}

// --- Happy Path ---

#[rstest]
fn drag_first_to_last() {
	// Arrange
	let rows = abc();

	// Act
	let moved = reorder(&rows, 0, 2);

	// Assert - [A(1),B(2),C(3)] moved 0->2 yields [B(1),C(2),A(3)]
	assert_eq!(names(&moved), vec!["b", "c", "a"]);
	assert_eq!(ranks(&moved), vec![1, 2, 3]);
}

#[rstest]
fn drag_last_to_first() {
	// Arrange
	let rows = abc();

	// Act
	let moved = reorder(&rows, 2, 0);

	// Assert
	assert_eq!(names(&moved), vec!["c", "a", "b"]);
	assert_eq!(ranks(&moved), vec![1, 2, 3]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn move_identity(#[case] index: usize) {
	// Arrange
	let rows = abc();

	// Act
	let moved = reorder(&rows, index, index);

	// Assert - equal by value to the input
	assert_eq!(moved, rows);
}

#[rstest]
#[case(0, 1, vec!["b", "a", "c"])]
#[case(1, 0, vec!["b", "a", "c"])]
#[case(1, 2, vec!["a", "c", "b"])]
fn move_correctness(#[case] source: usize, #[case] dest: usize, #[case] expected: Vec<&'static str>) {
	// Arrange
	let rows = abc();

	// Act
	let moved = reorder(&rows, source, dest);

	// Assert - the moved item lands at dest with rank dest+1
	assert_eq!(names(&moved), expected);
	assert_eq!(moved[dest].rank, dest as u32 + 1);
	assert_eq!(ranks(&moved), vec![1, 2, 3]);
}

#[rstest]
fn reorder_sorts_by_current_rank_first() {
	// Arrange - stored out of positional order
	let rows = vec![Row::new("c", 3), Row::new("a", 1), Row::new("b", 2)];

	// Act - indices address the rank-sorted view [a, b, c]
	let moved = reorder(&rows, 0, 2);

	// Assert
	assert_eq!(names(&moved), vec!["b", "c", "a"]);
}

// --- Error Path ---

#[rstest]
#[case(3, 0)]
#[case(0, 3)]
#[case(9, 9)]
fn out_of_bounds_is_a_no_op(#[case] source: usize, #[case] dest: usize) {
	// Arrange
	let rows = abc();

	// Act
	let moved = reorder(&rows, source, dest);

	// Assert
	assert_eq!(moved, rows);
}

// --- Edge Cases ---

#[rstest]
fn reorder_empty_sequence() {
	// Arrange
	let rows: Vec<Row> = vec![];

	// Act & Assert
	assert!(reorder(&rows, 0, 0).is_empty());
	assert_eq!(next_rank(&rows), 1);
}

#[rstest]
fn renumber_after_delete_keeps_relative_order() {
	// Arrange - orders 1,2,3 with the middle one removed
	let mut rows = vec![Row::new("a", 1), Row::new("c", 3)];

	// Act
	renumber(&mut rows);

	// Assert - the original order-3 row is now order 2
	assert_eq!(names(&rows), vec!["a", "c"]);
	assert_eq!(ranks(&rows), vec![1, 2]);
}
