use calc_mini::{Clipboard, ClipboardError};

#[derive(Default, Debug, Clone)]
pub struct MockClipboard {
    content: Option<String>,
    writes: usize,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MockClipboard {
    fn get(&mut self) -> Option<String> {
        self.content.clone()
    }

    fn set(&mut self, text: String) -> Result<(), ClipboardError> {
        self.content = Some(text);
        self.writes += 1;
        Ok(())
    }
}

/// A clipboard whose writes are always refused.
#[derive(Default, Debug, Clone)]
pub struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn get(&mut self) -> Option<String> {
        None
    }

    fn set(&mut self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("permission denied".to_string()))
    }
}
