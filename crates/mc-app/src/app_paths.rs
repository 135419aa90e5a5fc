use std::path::PathBuf;

use mc_core::ports::AppDirs;

/// Concrete file locations derived from the platform directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub slots_file: PathBuf,
    pub logs_dir: PathBuf,
    pub config_file: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            slots_file: dirs.app_data_root.join("slots.bin"),
            logs_dir: dirs.app_data_root.join("logs"),
            config_file: dirs.app_config_root.join("config.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_dirs() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/data/multiclip"),
            app_config_root: PathBuf::from("/tmp/config/multiclip"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.slots_file, PathBuf::from("/tmp/data/multiclip/slots.bin"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/data/multiclip/logs"));
        assert_eq!(paths.config_file, PathBuf::from("/tmp/config/multiclip/config.toml"));
    }
}
