//! Contiguous-rank ordering engine
//!
//! Section lists (and any other rank-carrying collection) keep their
//! `order` values contiguous from 1 after every structural change. The
//! three operations here are the whole contract:
//!
//! - [`reorder`] relocates one element (drag-and-drop move) and
//!   renumbers the result
//! - [`renumber`] compacts ranks after a removal
//! - [`next_rank`] yields the rank an append receives
//!
//! All of them are pure with respect to their inputs; [`reorder`] never
//! mutates the slice it is given.

/// A value that carries a 1-based position inside an ordered collection.
pub trait Ranked {
	/// The current 1-based rank.
	fn rank(&self) -> u32;

	/// Overwrite the rank.
	fn set_rank(&mut self, rank: u32);
}

/// Relocate the element at `source` to `dest` and renumber.
///
/// Positions are indices into the sequence sorted by current rank.
/// `source == dest` is the identity move and returns a value-equal copy
/// of the input. An out-of-bounds index is a stale reference (the list
/// changed under the caller); the input is returned unchanged and a
/// warning is recorded.
///
/// # Examples
///
/// ```
/// use tessera_core::ordering::{Ranked, reorder};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Item(&'static str, u32);
///
/// impl Ranked for Item {
/// 	fn rank(&self) -> u32 { self.1 }
/// 	fn set_rank(&mut self, rank: u32) { self.1 = rank; }
/// }
///
/// let items = vec![Item("a", 1), Item("b", 2), Item("c", 3)];
/// let moved = reorder(&items, 0, 2);
/// assert_eq!(moved, vec![Item("b", 1), Item("c", 2), Item("a", 3)]);
/// ```
pub fn reorder<T>(items: &[T], source: usize, dest: usize) -> Vec<T>
where
	T: Ranked + Clone,
{
	if source == dest {
		return items.to_vec();
	}
	if source >= items.len() || dest >= items.len() {
		tracing::warn!(
			source,
			dest,
			len = items.len(),
			"reorder indices out of bounds; keeping sequence unchanged"
		);
		return items.to_vec();
	}

	let mut sorted = items.to_vec();
	sorted.sort_by_key(Ranked::rank);
	let moved = sorted.remove(source);
	sorted.insert(dest, moved);
	renumber(&mut sorted);
	sorted
}

/// Rewrite every rank to its 1-based position in rank order.
///
/// Used directly as the compaction step after a delete; [`reorder`]
/// calls it as its final step. The sort is stable, so elements that
/// already share a rank keep their relative order.
pub fn renumber<T: Ranked>(items: &mut [T]) {
	items.sort_by_key(Ranked::rank);
	for (index, item) in items.iter_mut().enumerate() {
		item.set_rank(index as u32 + 1);
	}
}

/// The rank an element appended to `items` receives.
pub fn next_rank<T>(items: &[T]) -> u32 {
	items.len() as u32 + 1
}
