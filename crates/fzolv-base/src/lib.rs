pub mod config;
pub mod logging;

pub use config::{init_logger, LogConfig};
pub use logging::{init_stdout_logger, StdoutLogger};

// Re-export log crate so downstream crates can use fzolv_base::log::*
pub use log;
