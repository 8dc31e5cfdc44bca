//! Task persistence and file transfer.

pub mod lock;
pub mod meta;
pub mod repository;
pub mod transfer;
