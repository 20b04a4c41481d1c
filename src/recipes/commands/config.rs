use crate::commands::{CmdMessage, CmdResult};
use crate::config::{ConfigKey, RecipesConfig};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config = RecipesConfig::load(dir)?;
    let (key, value) = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => (key, None),
        ConfigAction::Set(key, value) => (key, Some(value)),
    };

    let key = match key.parse::<ConfigKey>() {
        Ok(key) => key,
        Err(e) => return Ok(refused(e)),
    };

    match value {
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(config.get(key)));
            Ok(result)
        }
        Some(value) => {
            let mut config = config;
            if let Err(e) = config.set(key, &value) {
                return Ok(refused(e));
            }
            config.save(dir)?;
            let message = format!("{} set to {}", key.name(), config.get(key));
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(message));
            Ok(result)
        }
    }
}

fn refused(reason: String) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(reason));
    result
}
