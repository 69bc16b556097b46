use crate::error::ClipboardError;

pub trait Clipboard {
    fn get(&mut self) -> Option<String>;
    fn set(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// Clipboard kept inside the process, for hosts without a system clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> Option<String> {
        self.content.clone()
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        self.content = Some(text);
        Ok(())
    }
}
