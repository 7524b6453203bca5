//! Module package loading.

use std::fs;
use std::path::Path;

use prost::Message;
use tracing::debug;

use chainstream_pb::v1 as pb;

use crate::error::SessionError;

/// A compiled Substreams package, loaded once and read-only thereafter.
///
/// Wraps the decoded protocol message and exposes what a session needs: the
/// module graph to embed into the request, and metadata for startup logs.
#[derive(Debug, Clone, PartialEq)]
pub struct ModulePackage {
    package: pb::Package,
}

impl ModulePackage {
    /// Reads and decodes the package file at `path`.
    ///
    /// The whole file is read in one scoped call, so the handle is released
    /// on every exit path. On failure nothing partial escapes: either a
    /// fully decoded package comes back or an error does.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SessionError::PackageRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "package file read");
        Self::from_bytes(&bytes).map_err(|source| SessionError::PackageDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Decodes a package from raw bytes. Pure function of its input.
    ///
    /// Zero-length input is rejected up front: every real package carries at
    /// least its protobuf descriptors, so an empty file is a truncated
    /// artifact, not an empty package.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, prost::DecodeError> {
        if bytes.is_empty() {
            return Err(prost::DecodeError::new("empty package"));
        }
        let package = pb::Package::decode(bytes)?;
        Ok(Self { package })
    }

    /// The embedded module graph, if the package carries one.
    pub fn modules(&self) -> Option<&pb::Modules> {
        self.package.modules.as_ref()
    }

    /// Every module name, in package order.
    pub fn module_names(&self) -> Vec<&str> {
        match &self.package.modules {
            Some(modules) => modules.modules.iter().map(|m| m.name.as_str()).collect(),
            None => Vec::new(),
        }
    }

    /// Dependency edges as `(module, input module)` pairs.
    ///
    /// Source inputs (raw chain data) are not edges between modules and are
    /// skipped.
    pub fn dependency_edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        if let Some(modules) = &self.package.modules {
            for module in &modules.modules {
                for input in &module.inputs {
                    match &input.input {
                        Some(pb::module::input::Input::Map(map)) => {
                            edges.push((module.name.as_str(), map.module_name.as_str()));
                        }
                        Some(pb::module::input::Input::Store(store)) => {
                            edges.push((module.name.as_str(), store.module_name.as_str()));
                        }
                        Some(pb::module::input::Input::Source(_)) | None => {}
                    }
                }
            }
        }
        edges
    }

    /// Package name from its metadata, when present.
    pub fn name(&self) -> Option<&str> {
        self.package.package_meta.first().map(|meta| meta.name.as_str())
    }

    /// Package version string from its metadata, when present.
    pub fn package_version(&self) -> Option<&str> {
        self.package.package_meta.first().map(|meta| meta.version.as_str())
    }
}
