use crate::types::Identified;

/// Allocates the next identifier for a collection (or one post's comments).
///
/// Returns `1` for an empty slice, otherwise `1 + max(existing ids)`. Call it against the
/// snapshot the new record will be appended to, after any lock for that collection is held.
pub fn next_id<T: Identified>(records: &[T]) -> u64 {
    records.iter().map(Identified::id).max().map_or(1, |max| max + 1)
}
