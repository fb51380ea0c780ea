pub mod file;
pub mod memory;

mod error;

pub use error::{Error, Result};
pub use file::FileCache;
pub use memory::MemoryCache;
