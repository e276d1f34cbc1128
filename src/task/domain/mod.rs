//! Domain model for tasks and their ownership.
//!
//! Tasks, the ownership relation, listing filters, and the listing scope
//! switch live here, with all infrastructure concerns kept outside the
//! domain boundary.

mod error;
mod ids;
mod keyword;
mod ownership;
mod scope;
mod task;

pub use error::{ParseListingScopeError, TaskDomainError};
pub use ids::TaskId;
pub use keyword::TaskKeyword;
pub use ownership::Ownership;
pub use scope::ListingScope;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskEdit, TaskTitle};
