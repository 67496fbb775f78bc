pub mod session;
pub mod storage;
