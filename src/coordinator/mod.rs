pub mod coordinator;
pub mod coordinator_tests;
pub mod dispatcher;

pub use coordinator::{Command, DispatchHandle, DispatchServer};
pub use dispatcher::Dispatcher;
