use crate::catalog::build_item_catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::EmojiConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::sink::ArtifactSink;
use crate::table::ItemTable;

/// Builds the catalog and writes the download script, manifest fragment and
/// bindings, in that order.
///
/// Everything is rendered before the first write, so a render failure leaves
/// no partial output behind. A write failure aborts the remaining writes.
pub fn run<S: ArtifactSink>(
    sink: &mut S,
    table: &ItemTable,
    settings: &EmojiConfig,
) -> Result<CmdResult> {
    let build = build_item_catalog(table, &settings.selectors, &settings.extras)?;
    let artifacts = Renderer::new()?.render_emoji(&build.catalog, settings)?;

    let mut result = CmdResult::default();
    for warning in &build.warnings {
        log::debug!("{}", warning);
        result.add_message(CmdMessage::warning(warning.to_string()));
    }

    let written = vec![
        sink.write_artifact(&settings.script_file, &artifacts.download_script)?,
        sink.write_artifact(&settings.manifest_file, &artifacts.manifest)?,
        sink.write_artifact(&settings.bindings_file, &artifacts.bindings)?,
    ];

    result.add_message(CmdMessage::success(format!(
        "Generated {} assets into {} files.",
        build.catalog.len(),
        written.len()
    )));
    Ok(result.with_written(written))
}
