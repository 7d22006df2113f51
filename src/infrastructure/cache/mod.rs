pub mod memory;
pub mod redis;

pub use memory::MemoryPageCache;
pub use redis::RedisPageCache;
