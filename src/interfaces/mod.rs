pub mod sink;
pub mod storage;
