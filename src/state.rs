//! The persistent build counter: parse, bump, and file round-trip.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;

/// The three scalar fields tracked across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildState {
    /// Dotted numeric version, e.g. "2.3".
    pub version: String,
    /// Secondary version component, kept as text.
    pub microversion: String,
    /// Monotonically increasing run counter.
    pub build: u64,
}

impl BuildState {
    /// The state used for a first run or after malformed counter content.
    pub fn reset() -> Self {
        BuildState {
            version: "1.0".to_string(),
            microversion: "0".to_string(),
            build: 1,
        }
    }

    /// Parse a `version,microversion,build` counter line.
    pub fn parse(content: &str) -> Option<Self> {
        let mut fields = content.trim().split(',');
        let version = fields.next()?.to_string();
        let microversion = fields.next()?.to_string();
        let build: u64 = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        Some(BuildState {
            version,
            microversion,
            build,
        })
    }

    /// Next state for this run: same version fields, counter bumped by one.
    pub fn bumped(&self) -> Self {
        BuildState {
            version: self.version.clone(),
            microversion: self.microversion.clone(),
            build: self.build + 1,
        }
    }

    /// Text before the first '.' of the version, used by the resource fields.
    pub fn major(&self) -> &str {
        self.version.split('.').next().unwrap_or(&self.version)
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.version, self.microversion, self.build)
    }
}

/// Outcome of reading the counter file, so the caller can report what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedState {
    /// Counter file was present and parsed; holds the prior state.
    Prior(BuildState),
    /// Counter file was absent or empty; first run.
    FirstRun,
    /// Counter file was present but unparsable; holds the offending content.
    Malformed(String),
}

/// Read the counter file. Absent, empty, and malformed content are all
/// recovered locally; only an unreadable existing file is an error.
pub fn load(path: &Path) -> Result<LoadedState> {
    if !path.exists() {
        return Ok(LoadedState::FirstRun);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("{}: failed to read counter file", path.display()))?;
    if content.trim().is_empty() {
        return Ok(LoadedState::FirstRun);
    }
    match BuildState::parse(&content) {
        Some(state) => Ok(LoadedState::Prior(state)),
        None => Ok(LoadedState::Malformed(content.trim().to_string())),
    }
}

/// Write the counter file, creating its parent directory if needed.
pub fn store(path: &Path, state: &BuildState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("{}: failed to create counter directory", parent.display()))?;
    }
    fs::write(path, state.to_string())
        .with_context(|| format!("{}: failed to write counter file", path.display()))
}
