//! collect-map: build maps from sequences in one linear pass.
//!
//! Overview
//! - `to_set_membership_map` / `to_set_membership_map_by`: element (or a
//!   key derived from it) to `true`.
//! - `to_presence_map` / `to_presence_map_by`: element (or derived key) to
//!   the zero-size marker `()`, for membership without a stored value.
//! - `to_map`: a caller closure turns each element into a `(key, value)`
//!   pair; `try_to_map` is the same with a fallible closure.
//!
//! Semantics shared by every conversion
//! - Input is any `IntoIterator`; `None` is a valid, empty input.
//! - The output is pre-sized from the input's size hint and is always
//!   returned, possibly empty.
//! - The closure runs exactly once per element, in input order.
//! - Pairs are applied with insert-or-replace, so for repeated keys the
//!   last element wins.
//! - A panic in the closure unwinds through the conversion untouched.
//!
//! Output containers
//! - The plain functions return `std::collections::HashMap` with the
//!   default hasher.
//! - Each has an `_in` twin generic over [`MapTarget`], implemented for
//!   std and hashbrown `HashMap`s with any `BuildHasher + Default`, and for
//!   `BTreeMap`.
//!
//! Non-goals
//! - No concurrency, persistence, or I/O. Each call is independent and
//!   touches no shared state.

pub mod collect;
mod collect_proptest;
pub mod target;

// Public surface
pub use collect::{
    to_map, to_map_in, to_presence_map, to_presence_map_by, to_presence_map_by_in,
    to_presence_map_in, to_set_membership_map, to_set_membership_map_by,
    to_set_membership_map_by_in, to_set_membership_map_in, try_to_map, try_to_map_in,
};
pub use target::MapTarget;
