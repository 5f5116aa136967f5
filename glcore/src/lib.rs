pub mod error;
pub mod identity;
pub mod navigation;
pub mod session;
pub mod storage;
