use std::time::Duration;

use crate::config::Config;
use crate::error::AppResult;
use crate::person::Directory;
use crate::picker::PickerState;

pub struct App {
    pub picker: PickerState,
    pub directory: Directory,
    pub config: Config,
}

impl App {
    pub fn new(directory: Directory) -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(directory, config))
    }

    pub fn new_with_config(directory: Directory, config: Config) -> Self {
        let picker = PickerState::new(
            Duration::from_millis(config.picker.debounce_ms),
            &directory,
        );
        Self {
            picker,
            directory,
            config,
        }
    }
}
