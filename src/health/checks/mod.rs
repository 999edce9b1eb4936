//! Built-in synthetic checks

pub mod cpu;
pub mod filesystem;
pub mod memory;
pub mod user_home;

pub use cpu::CpuCheck;
pub use filesystem::FileSystemCheck;
pub use memory::MemoryCheck;
pub use user_home::UserHomeCheck;
