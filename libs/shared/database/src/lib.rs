pub mod memory;
pub mod seed;
pub mod storage;

pub use memory::MemStorage;
pub use storage::{SharedStorage, Storage, StoreError};
