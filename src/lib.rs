pub mod engine;
pub mod error;
pub mod format;
pub mod key;
pub mod traits;
pub mod types;

#[cfg(feature = "clipboard")]
pub mod clipboard;

pub use crate::engine::{Engine, EngineBuilder, EngineConfig, EngineSnapshot};
pub use crate::format::MAX_FRACTION_DIGITS;
pub use crate::error::{ClipboardError, ParseTokenError};
pub use crate::key::{KeyCode, KeyEvent, Modifiers};
pub use crate::traits::{Clipboard, MemoryClipboard};
pub use crate::types::{Operator, Token};

#[cfg(feature = "clipboard")]
pub use crate::clipboard::SystemClipboard;
