use crate::catalog::SkipOption;
use std::sync::mpsc::{Receiver, Sender};

/// Messages sent from the fetch task to the TUI thread
#[derive(Debug, Clone)]
pub enum CatalogMessage {
    /// The request has been issued
    Started { url: String },

    /// The request finished. Failures arrive as an empty list.
    Loaded(Vec<SkipOption>),
}

/// Both ends of the fetch channel
pub struct CatalogChannels {
    pub tx: Sender<CatalogMessage>,
    pub rx: Receiver<CatalogMessage>,
}

impl CatalogChannels {
    pub fn new() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        Self { tx, rx }
    }
}

impl Default for CatalogChannels {
    fn default() -> Self {
        Self::new()
    }
}
