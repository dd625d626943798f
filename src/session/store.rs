//! Session marker stores.

use super::SessionMarker;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Read, Write},
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tracing::debug;

/// A place a session marker can live. Reading never fails: an unreadable or
/// malformed marker is indistinguishable from "no session".
pub trait SessionStore: Send + Sync {
    fn read(&self) -> Option<SessionMarker>;
    fn write(&self, marker: SessionMarker) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct Dump {
    marker: Option<SessionMarker>,
}

/// Durable store: a JSON file that survives application restarts.
pub struct FileSessionStore {
    file_path: PathBuf,
    dump: Mutex<Dump>,
}

impl FileSessionStore {
    fn load_dump_from_file(file_path: &PathBuf) -> Result<Dump> {
        let mut file = File::open(file_path)?;

        let mut content = String::new();
        file.read_to_string(&mut content)?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Open the store at the given path. A missing or malformed file starts
    /// the store empty.
    pub fn initialize(file_path: PathBuf) -> FileSessionStore {
        let dump = Self::load_dump_from_file(&file_path).unwrap_or_default();
        if dump.marker.is_some() {
            debug!("Loaded session marker from {:?}", file_path);
        }
        FileSessionStore {
            file_path,
            dump: Mutex::new(dump),
        }
    }

    fn save_dump(&self) -> Result<()> {
        let json_string = serde_json::to_string_pretty(&*self.dump.lock().unwrap())?;
        let mut file = File::create(&self.file_path)?;
        file.write_all(json_string.as_bytes())?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Option<SessionMarker> {
        self.dump.lock().unwrap().marker.clone()
    }

    fn write(&self, marker: SessionMarker) -> Result<()> {
        self.dump.lock().unwrap().marker = Some(marker);
        self.save_dump()
    }

    fn clear(&self) -> Result<()> {
        self.dump.lock().unwrap().marker = None;
        self.save_dump()
    }
}

/// Tab-scoped store: lives only as long as the process.
#[derive(Default)]
pub struct MemorySessionStore {
    marker: Mutex<Option<SessionMarker>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<SessionMarker> {
        self.marker.lock().unwrap().clone()
    }

    fn write(&self, marker: SessionMarker) -> Result<()> {
        *self.marker.lock().unwrap() = Some(marker);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.marker.lock().unwrap() = None;
        Ok(())
    }
}

/// Unified view over both stores, durable first.
pub struct SessionVault {
    durable: Arc<dyn SessionStore>,
    scoped: Arc<dyn SessionStore>,
}

impl SessionVault {
    pub fn new(durable: Arc<dyn SessionStore>, scoped: Arc<dyn SessionStore>) -> Self {
        Self { durable, scoped }
    }

    /// The current marker, if any. The durable store is consulted before the
    /// tab-scoped store.
    pub fn current(&self) -> Option<SessionMarker> {
        self.durable.read().or_else(|| self.scoped.read())
    }

    /// Session presence, as the guard consumes it.
    pub fn is_present(&self) -> bool {
        self.current().is_some()
    }

    /// Destroy the marker everywhere (logout or inconsistency correction).
    pub fn clear(&self) -> Result<()> {
        self.durable.clear()?;
        self.scoped.clear()
    }
}
