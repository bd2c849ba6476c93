//! Domain model: advertised events, detected changes and check scopes.

pub mod change;
pub mod event;
pub mod scope;

pub use change::{ChangeType, EventChange};
pub use event::Event;
pub use scope::Scope;
