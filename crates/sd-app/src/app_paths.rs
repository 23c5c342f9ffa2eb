use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub state_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub config_path: PathBuf,
}

impl AppPaths {
    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self {
            state_dir: data_dir.join("state"),
            logs_dir: data_dir.join("logs"),
            config_path: data_dir.join("config.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_data_dir() {
        let paths = AppPaths::from_data_dir(Path::new("/tmp/shipdesk"));

        assert_eq!(paths.state_dir, PathBuf::from("/tmp/shipdesk/state"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/shipdesk/logs"));
        assert_eq!(paths.config_path, PathBuf::from("/tmp/shipdesk/config.toml"));
    }
}
