//! `ConfigHandle`: the shared, reloadable settings snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::{ConfigError, ConfigResult, Settings, load_settings};

/// Cloneable handle to the current [`Settings`] snapshot.
///
/// The lock is held only long enough to clone or replace the inner `Arc`, so
/// a reload issued from another thread never blocks a scan pass for longer
/// than a pointer copy.
#[derive(Clone)]
pub struct ConfigHandle {
    current: Arc<RwLock<Arc<Settings>>>,
    path:    Option<PathBuf>,
}

impl ConfigHandle {
    /// Wrap in-memory settings.  [`reload`](Self::reload) is unavailable
    /// until a path is known.
    pub fn new(settings: Settings) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(settings))),
            path:    None,
        }
    }

    /// Load settings from `path` and remember it for later reloads.
    pub fn open(path: &Path) -> ConfigResult<Self> {
        let settings = load_settings(path)?;
        Ok(Self {
            current: Arc::new(RwLock::new(Arc::new(settings))),
            path:    Some(path.to_path_buf()),
        })
    }

    /// The snapshot to use for one scan pass.
    #[inline]
    pub fn snapshot(&self) -> Arc<Settings> {
        Arc::clone(&self.current.read())
    }

    /// Replace the snapshot with `settings`.
    pub fn replace(&self, settings: Settings) {
        *self.current.write() = Arc::new(settings);
    }

    /// Re-read the file this handle was opened from.
    ///
    /// On error the previous snapshot stays in place.
    pub fn reload(&self) -> ConfigResult<Arc<Settings>> {
        let path = self.path.as_deref().ok_or(ConfigError::NoPath)?;
        self.reload_from(path)
    }

    /// Load `path` and, if it parses, make it the current snapshot.
    pub fn reload_from(&self, path: &Path) -> ConfigResult<Arc<Settings>> {
        let fresh = Arc::new(load_settings(path)?);
        *self.current.write() = Arc::clone(&fresh);
        Ok(fresh)
    }

    /// The file used by [`reload`](Self::reload), if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
