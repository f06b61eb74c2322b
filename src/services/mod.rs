pub mod dispatcher;
pub mod listener;
pub mod publisher;
pub mod shaper;
pub mod tracker;
