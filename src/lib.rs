pub mod bus;
pub mod config;
pub mod domains;
pub mod error;
pub mod factories;
pub mod interfaces;
pub mod services;
pub mod storage;

pub use crate::config::Config;
pub use crate::error::{LendSyncError, Result};
pub use crate::factories::sync_factory::SyncRuntime;
pub use crate::services::dispatcher::Dispatcher;
pub use crate::services::listener::{Listener, ListenerHandle};
pub use crate::services::publisher::Publisher;
pub use crate::services::tracker::MutationTracker;
