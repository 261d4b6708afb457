//! chained-table: a separately-chained hash table over `i32` keys and
//! values, plus a growable `i32` array, both built without std's map or
//! vector types.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: two small containers whose resize behavior is explicit and
//!   testable rather than delegated to a library collection.
//! - Layers (hash table, leaf first):
//!   - Chain: doubly-linked list of entries for one bucket. Links are
//!     arena keys, not pointers.
//!   - BucketTable: fixed-length slot array of chains plus the node arena
//!     that owns every node; replaced wholesale on resize.
//!   - HashTable: hashing, lookup, insert/update, remove, and load-factor
//!     driven growth and shrinking.
//! - DynamicArray is independent of the hash structures.
//!
//! Constraints
//! - Single-threaded; callers serialize access externally.
//! - Ownership is a tree: HashTable owns BucketTable owns the arena owns
//!   nodes. No `Rc`, no raw pointers, no `unsafe`.
//! - Keys are unique within a table; inserting a present key overwrites.
//!
//! Hashing
//! - Knuth multiplicative hashing, `floor(capacity * frac(key * A))` with
//!   `A = (sqrt(5) - 1) / 2` computed once per hasher. The `BucketHash`
//!   trait is the seam for substituting another bucket function.
//!
//! Resize policy
//! - Grow (double) before an insert once `len / capacity >= 1.0`. The
//!   check uses the load before the insert, so a table can fill up
//!   (`len == capacity`) and grows on the following insert.
//! - Shrink (halve) after a successful remove once
//!   `len / capacity <= 0.25`, never below the initial capacity of 8.
//! - A rebuild re-inserts every entry, in slot order then chain order,
//!   into a fresh bucket table without re-checking growth. Debug builds
//!   assert that the old entries fit in the new capacity.
//! - `TableConfig` carries these tunables as construction-time values.
//!
//! DynamicArray
//! - Capacity starts at 4 and doubles when a push finds it full. It never
//!   shrinks; `pop_back` only shortens the live range.
//! - `get`/`set` take signed indices and return
//!   `ArrayError::OutOfRange` outside `[0, len)`.
//!
//! Errors
//! - `ArrayError` is the only error type. Missing hash table keys are
//!   `None`/`false`, not errors. Allocation failure aborts, as with any
//!   std collection.
//!
//! Logging
//! - Rebuilds are logged at `debug`, array reallocations at `trace`,
//!   through the `log` facade.

mod bucket_table;
mod chain;
pub mod config;
pub mod dynamic_array;
pub mod hash;
pub mod hash_table;
mod hash_table_proptest;

// Public surface
pub use config::TableConfig;
pub use dynamic_array::{ArrayError, DynamicArray};
pub use hash::{BucketHash, Multiplicative};
pub use hash_table::HashTable;
