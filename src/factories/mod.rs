pub mod sync_factory;
