//! Store actors. Each store runs as a task that exclusively owns its
//! collection; all access is serialized through the actor's message queue.

pub mod catalog;
pub mod purchases;
pub mod users;

pub use catalog::*;
pub use purchases::*;
pub use users::*;
