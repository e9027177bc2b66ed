use super::ArtifactSink;
use crate::error::{AssetgenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|source| AssetgenError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

impl ArtifactSink for FileSink {
    fn write_artifact(&mut self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }
        fs::write(&path, content).map_err(|source| AssetgenError::OutputWrite {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }
}
