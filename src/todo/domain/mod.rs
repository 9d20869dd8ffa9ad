//! Domain model for todo records.
//!
//! The todo domain models validated creation, explicit partial patching, and
//! idempotent soft deletion while keeping all infrastructure concerns outside
//! of the domain boundary.

mod error;
mod ids;
mod todo;

pub use error::TodoDomainError;
pub use ids::TodoId;
pub use todo::{PersistedTodoData, Todo, TodoDraft, TodoPatch};
