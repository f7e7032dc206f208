// Calculator sessions: one independent SelectionState per page session,
// held in process memory and dropped on close or after an idle timeout.

pub mod handlers;
pub mod store;

pub use store::{spawn_idle_sweeper, SessionStore};
