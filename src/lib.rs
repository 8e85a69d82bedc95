//! # vector-tree
//!
//! A persistent (immutable) vector backed by a fixed fan-out tree of leaf
//! buffers, in the Bitmapped Vector Trie family of Clojure's persistent
//! vector.
//!
//! Every mutating operation returns a new [`VectorTree`] that shares almost
//! all of its nodes with the input; the input remains fully usable. Only the
//! nodes on the path from the root to the affected leaf are freshly
//! allocated, so updates cost O(log_B n) time and space.
//!
//! ## Overview
//!
//! - O(log_B n) random access, `push_back`, `pop_back`, `set_at`
//! - O(log_B n) `erase` by swap-and-pop (the order of the *last* element is
//!   not preserved; mid-sequence insertion is unsupported by design)
//! - O(1) `len`, `is_empty`, `height`, `capacity`, and `Clone`
//!
//! The branching factor is a compile-time parameter defaulting to
//! [`DEFAULT_BUFFER`] (32), giving trees that stay 3 levels deep up to
//! 32,768 elements.
//!
//! ## Example
//!
//! ```rust
//! use vector_tree::VectorTree;
//!
//! let vector: VectorTree<i32> = (0..100).collect();
//! let updated = vector.set_at(50, 999).unwrap();
//!
//! assert_eq!(vector.get(50), Some(&50));   // Original unchanged
//! assert_eq!(updated.get(50), Some(&999)); // New version
//! ```
//!
//! ## Feature Flags
//!
//! - `arc`: use `std::sync::Arc` instead of `std::rc::Rc` for node
//!   references, making trees shareable across threads
//! - `serde`: `Serialize`/`Deserialize` support

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod iter;
mod node;
mod path;
mod vector;

pub use error::VectorTreeError;
pub use iter::VectorTreeIntoIterator;
pub use iter::VectorTreeIterator;
pub use vector::VectorTree;
pub use vector::DEFAULT_BUFFER;
pub use vector::MAX_HEIGHT;

// =============================================================================
// Tests
// =============================================================================
