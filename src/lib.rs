//! osc52 - copy text to the terminal clipboard
//!
//! Emits the OSC 52 escape sequence, wrapped for whatever sits between the
//! program and the real terminal: tmux and GNU screen need a DCS
//! pass-through, kitty needs a priming sequence, everything else takes the
//! bare sequence.
//!
//! ```no_run
//! // Process-wide writer over stdout and the live environment
//! osc52::copy("hello");
//!
//! // Custom sink and environment
//! let mut writer = osc52::Writer::new(Vec::new(), ["TMUX=1"]);
//! writer.copy("hello");
//! ```

pub mod config;
pub mod encode;
pub mod env;
pub mod error;
pub mod mode;
pub mod shared;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::{ClipboardConfig, Config, ModeSetting, load_config, parse_config};
pub use encode::encode;
pub use env::Environment;
pub use error::{Osc52Error, Result};
pub use mode::Mode;
pub use shared::{copy, reset_default_writer, set_default_writer, try_copy};
pub use writer::Writer;
