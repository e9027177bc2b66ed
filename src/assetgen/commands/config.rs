use crate::commands::{CmdMessage, CmdResult};
use crate::config::GeneratorConfig;
use crate::error::Result;
use std::path::Path;

/// Dumps the effective configuration as JSON.
pub fn run(config: &GeneratorConfig, source: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_output(config.to_json()?);
    if !source.exists() {
        result.add_message(CmdMessage::info(format!(
            "{} not found, showing defaults.",
            source.display()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetgen.json");
        let result = run(&GeneratorConfig::default(), &path).unwrap();

        let out = result.output.unwrap();
        assert!(out.contains("\"asset_dir\": \"assets/open_moji\""));
        assert!(out.contains("\"RebeccaPurple\": \"0xFF663399\""));
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_no_message_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetgen.json");
        std::fs::write(&path, "{}").unwrap();
        let result = run(&GeneratorConfig::default(), &path).unwrap();
        assert!(result.messages.is_empty());
    }
}
