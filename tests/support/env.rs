use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points `SENTIBOARD_CONFIG_HOME` at a scratch directory for one test,
/// restoring the previous value on drop. Holds a global lock so tests
/// cannot mutate the environment concurrently.
pub struct ConfigHomeGuard {
    previous: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl ConfigHomeGuard {
    pub fn set(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = std::env::var("SENTIBOARD_CONFIG_HOME").ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var("SENTIBOARD_CONFIG_HOME", path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        // SAFETY: still holding the global env lock.
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var("SENTIBOARD_CONFIG_HOME", value),
                None => std::env::remove_var("SENTIBOARD_CONFIG_HOME"),
            }
        }
    }
}
