use std::path::PathBuf;

use crate::ports::errors::AppDirsError;

/// Per-user application roots. Facts only; nothing here is created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_config_root: PathBuf,
}

pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
