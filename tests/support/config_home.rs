use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard, OnceLock},
};

use course_recommender::app_dirs;

static CONFIG_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points the application config directory at `path` until dropped.
pub struct ConfigHomeGuard {
    _lock: MutexGuard<'static, ()>,
}

impl ConfigHomeGuard {
    pub fn set(path: PathBuf) -> Self {
        let lock = CONFIG_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        app_dirs::override_config_base(Some(path));
        Self { _lock: lock }
    }
}

impl Drop for ConfigHomeGuard {
    fn drop(&mut self) {
        app_dirs::override_config_base(None);
    }
}
