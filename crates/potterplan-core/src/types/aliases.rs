//! Type aliases for commonly used complex types.
//!
//! The planner itself is single-threaded. A host that shares it across
//! threads wraps it in `ThreadSafe<T>` so all mutations go through one lock.
//!
//! ```rust,ignore
//! use potterplan_core::types::*;
//!
//! let plan: ThreadSafe<FloorPlan> = thread_safe(FloorPlan::default_studio());
//! plan.lock().rotate(&id)?;
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<Mutex<T>>)
// =============================================================================

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex`; every mutation of the wrapped value is
/// serialized through the lock.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe vector, mostly used by listeners that record what they saw.
pub type ThreadSafeVec<T> = Arc<Mutex<Vec<T>>>;

// =============================================================================
// CALLBACK TYPES
// =============================================================================

/// A callback that receives a borrowed value.
///
/// Used for change notification: the planner owns the event, listeners only
/// look at it.
pub type RefCallback<T> = Box<dyn Fn(&T) + Send + Sync>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Wraps a value in `Arc<Mutex<T>>`.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Creates an empty `Arc<Mutex<Vec<T>>>`.
pub fn thread_safe_vec<T>() -> ThreadSafeVec<T> {
    Arc::new(Mutex::new(Vec::new()))
}
