use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::error::{AppError, Result};

const APP_DIR: &str = "food2mood";

/// Source of the bearer token attached to outgoing requests.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) -> Result<()> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

/// Token persisted in a single file, one token per file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store under `<config dir>/food2mood/<token key>`.
    pub fn in_config_dir(key: &str) -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| AppError::Config("could not determine the config directory".to_string()))?;
        Ok(Self::new(base.join(APP_DIR).join(key)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn store(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Receives forced client-side navigations.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

/// Everything the API client needs besides its transport, passed in
/// explicitly so callers can substitute any piece.
#[derive(Clone)]
pub struct ClientContext {
    pub config: ClientConfig,
    pub tokens: Rc<dyn TokenStore>,
    pub navigator: Rc<dyn Navigator>,
}

impl ClientContext {
    pub fn new(config: ClientConfig, tokens: Rc<dyn TokenStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            config,
            tokens,
            navigator,
        }
    }
}
