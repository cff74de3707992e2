use crate::config::SolidConfig;
use crate::journal::Entry;
use crate::model::Product;
use crate::shapes::AreaCheck;
use std::path::PathBuf;

pub mod config;
pub mod journal;
pub mod products;
pub mod shapes;

#[derive(Debug, Clone)]
pub struct SolidPaths {
    pub data_dir: PathBuf,
}

impl SolidPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One shape run through [`use_it`](crate::shapes::use_it).
#[derive(Debug, Clone)]
pub struct ShapeReport {
    pub kind: &'static str,
    pub shape: String,
    pub check: AreaCheck,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub entries: Vec<Entry>,
    pub products: Vec<Product>,
    pub shapes: Vec<ShapeReport>,
    pub saved_path: Option<PathBuf>,
    pub config: Option<SolidConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_shapes(mut self, shapes: Vec<ShapeReport>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_saved_path(mut self, path: PathBuf) -> Self {
        self.saved_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: SolidConfig) -> Self {
        self.config = Some(config);
        self
    }
}
