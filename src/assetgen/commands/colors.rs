use crate::commands::CmdResult;
use crate::config::ColorConfig;
use crate::error::Result;
use crate::render::Renderer;

/// Renders the color constants. The caller prints them; nothing is written to disk.
pub fn run(settings: &ColorConfig) -> Result<CmdResult> {
    let text = Renderer::new()?.render_color_constants(settings)?;
    log::debug!("rendered {} colors", settings.entries.len());
    Ok(CmdResult::default().with_output(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorEntry, ColorTable};

    #[test]
    fn test_single_color() {
        let settings = ColorConfig {
            entries: ColorTable(vec![ColorEntry::new("red", 0xFFFF0000)]),
            ..ColorConfig::default()
        };
        let result = run(&settings).unwrap();
        let out = result.output.unwrap();

        let constant = out
            .lines()
            .find(|l| l.contains("static const"))
            .unwrap();
        assert!(constant.contains("0xFFFF0000"));
        assert!(constant.contains("red"));
        assert_eq!(out.matches("'red'").count(), 1);
    }

    #[test]
    fn test_default_palette() {
        let result = run(&ColorConfig::default()).unwrap();
        let out = result.output.unwrap();

        assert!(out.starts_with("import 'package:flutter/material.dart';\n"));
        assert!(out.contains("  static const rebeccaPurple = Color(0xFF663399);\n"));
        assert!(out.contains("  X11Colors.gainsboro,\n];\n"));
        assert!(out.ends_with("  'Gainsboro',\n];\n"));
        assert_eq!(
            out.matches("static const").count(),
            ColorConfig::default().entries.len()
        );
    }

    #[test]
    fn test_empty_table() {
        let settings = ColorConfig {
            entries: ColorTable::default(),
            ..ColorConfig::default()
        };
        let out = run(&settings).unwrap().output.unwrap();
        assert!(out.contains("const x11Colors = <Color>[\n];\n"));
        assert!(out.contains("const x11ColorNames = <String>[\n];\n"));
    }
}
