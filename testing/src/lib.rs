pub mod core;
pub mod navigation;
pub mod storage;
