//! Shared test helpers: an env-var lock and in-memory collaborators.

use std::cell::Cell;
use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::errors::TransportError;
use crate::transport::{Fetcher, Request, Transport};

/// Serializes tests that touch process-wide environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Sets (or clears) a variable and restores the previous value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let original = env::var(key).ok();
        env::set_var(key, value);
        Self { key, original }
    }

    pub fn unset(key: &'static str) -> Self {
        let original = env::var(key).ok();
        env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.original {
            env::set_var(self.key, value);
        } else {
            env::remove_var(self.key);
        }
    }
}

/// Records every emitted request; fails every emit once `closed` is set.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub requests: Vec<Request>,
    pub closed: bool,
}

impl Transport for RecordingTransport {
    fn emit(&mut self, request: Request) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.requests.push(request);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingFetcher {
    calls: Cell<usize>,
}

impl RecordingFetcher {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Fetcher for RecordingFetcher {
    fn fetch_joke(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
