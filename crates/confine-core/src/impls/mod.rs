//! Impls - ports の実装

pub mod console;
pub mod memory;

pub use self::console::ConsoleReporter;
pub use self::memory::{MemoryReporter, ReportEvent};
