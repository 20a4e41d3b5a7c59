use crate::commands::{CmdMessage, CmdResult, PhextPaths};
use crate::config::PhextConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultLabel(String),
    SetPreviewWidth(String),
}

pub const KEYS: [&str; 2] = ["default-label", "preview-width"];

pub fn run(paths: &PhextPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PhextConfig::load(&paths.root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if !KEYS.contains(&key.as_str()) {
                result.add_message(CmdMessage::warning(format!(
                    "Unknown config key: {}",
                    key
                )));
            }
        }
        ConfigAction::SetDefaultLabel(value) => {
            config.set_default_label(&value)?;
            config.save(&paths.root)?;
            result.add_message(CmdMessage::success(format!(
                "default-label set to {}",
                config.default_label
            )));
        }
        ConfigAction::SetPreviewWidth(value) => {
            config.set_preview_width(&value)?;
            config.save(&paths.root)?;
            result.add_message(CmdMessage::success(format!(
                "preview-width set to {}",
                config.preview_width
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_show() {
        let dir = TempDir::new().unwrap();
        let paths = PhextPaths::new(dir.path().to_path_buf());

        run(&paths, ConfigAction::SetPreviewWidth("64".into())).unwrap();
        run(&paths, ConfigAction::SetDefaultLabel("work".into())).unwrap();

        let shown = run(&paths, ConfigAction::ShowAll).unwrap().config.unwrap();
        assert_eq!(shown.preview_width, 64);
        assert_eq!(shown.default_label, "work");
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let dir = TempDir::new().unwrap();
        let paths = PhextPaths::new(dir.path().to_path_buf());
        assert!(run(&paths, ConfigAction::SetPreviewWidth("wide".into())).is_err());
    }

    #[test]
    fn test_unknown_key_warns() {
        let dir = TempDir::new().unwrap();
        let paths = PhextPaths::new(dir.path().to_path_buf());
        let result = run(&paths, ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }
}
