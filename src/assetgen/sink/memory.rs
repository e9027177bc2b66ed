use super::ArtifactSink;
use crate::error::{AssetgenError, Result};
use std::io;
use std::path::PathBuf;

/// In-memory sink for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemorySink {
    artifacts: Vec<(String, String)>,
    fail_on: Option<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes writing the artifact called `name` fail.
    pub fn failing_on(name: impl Into<String>) -> Self {
        Self {
            artifacts: Vec::new(),
            fail_on: Some(name.into()),
        }
    }

    /// Artifact names in write order.
    pub fn names(&self) -> Vec<&str> {
        self.artifacts.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Latest content written under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }
}

impl ArtifactSink for MemorySink {
    fn write_artifact(&mut self, name: &str, content: &str) -> Result<PathBuf> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(AssetgenError::OutputWrite {
                path: PathBuf::from(name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "write refused"),
            });
        }
        self.artifacts.push((name.to_string(), content.to_string()));
        Ok(PathBuf::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut sink = MemorySink::new();
        sink.write_artifact("a", "1").unwrap();
        sink.write_artifact("b", "2").unwrap();
        sink.write_artifact("a", "3").unwrap();
        assert_eq!(sink.names(), vec!["a", "b", "a"]);
        assert_eq!(sink.get("a"), Some("3"));
        assert_eq!(sink.get("c"), None);
    }

    #[test]
    fn test_failing_on() {
        let mut sink = MemorySink::failing_on("b");
        assert!(sink.write_artifact("a", "1").is_ok());
        assert!(sink.write_artifact("b", "2").is_err());
        assert_eq!(sink.names(), vec!["a"]);
    }
}
