//! chained-set: a single-threaded hash set with a bucket count fixed at
//! construction and separate chaining for collision resolution.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, predictable set container for workloads that want a
//!   fixed memory geometry: the bucket array is sized once, up front, and
//!   never rehashed or resized afterwards.
//! - Layers:
//!   - Chain<T>: the per-bucket ordered sequence. Tail append, head pop,
//!     single-element unlink that leaves the rest of the chain in place.
//!     Insertion order within a bucket is preserved.
//!   - ChainedHashSet<T, S>: the bucket array plus dispatch. Computes a
//!     value's bucket from the injected `BuildHasher` and resolves
//!     collisions by a linear `Eq` scan over that bucket's chain.
//!
//! Constraints
//! - Single-threaded: no internal synchronization. Exclusive mutation is
//!   expressed through `&mut self`; sharing across threads needs a
//!   caller-supplied lock around the whole set.
//! - Fixed bucket count: a value's bucket index is decided once, when it is
//!   inserted, and stays valid until it is removed. Stored values must not
//!   change their hash-relevant state while stored (no interior mutability
//!   feeding `Hash`), since nothing ever rehashes them.
//! - Uniqueness: no two stored values compare equal. A duplicate insert is
//!   rejected and hands the value back to the caller untouched.
//! - Ownership: the set owns stored values. `remove` and `take_any`
//!   transfer ownership back; dropping the set drops whatever remains. For
//!   a non-owning view, instantiate with `&V` or `Rc<V>` as the element
//!   type; the choice is made in the type, not through an optional
//!   destructor callback.
//!
//! Reentrancy policy
//! - Probing runs user code (`Hash` to pick a bucket, `Eq` to walk a
//!   chain). Operations that probe take a debug-only guard at entry;
//!   reentering the set from inside user `Hash`/`Eq` panics in debug
//!   builds and the guard compiles away in release builds.
//!
//! Arbitrary-order access
//! - `take_any` and `peek_any` follow one policy: walk buckets in index
//!   order and act on the head of the first occupied chain. `peek_any`
//!   previews exactly the value the next `take_any` would remove.
//!
//! Notes and non-goals
//! - No resizing, rehashing, or load-factor tracking; pick the bucket
//!   count for the expected population.
//! - No built-in hashers beyond the std `RandomState` default; callers
//!   choose hashing through the `S: BuildHasher` parameter.
//! - Iteration order is bucket order, then per-bucket insertion order, and
//!   carries no semantic meaning.
//! - Public API surface is `ChainedHashSet`, its iterator, and the error
//!   enums; the chain layer is an implementation detail.

mod chain;
mod chained_hash_set;
mod reentry;

// Public surface
pub use chained_hash_set::{ChainedHashSet, InsertError, Iter, RemoveError};
