//! Generation of the C header carrying the `BUILD_INFO` macro.

use crate::state::BuildState;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;

/// Render the header text for a state and a preformatted timestamp.
///
/// The macro embeds escaped newlines so consumers get a multi-line string
/// constant out of a single `#define`.
pub fn render(state: &BuildState, timestamp: &str) -> String {
    format!(
        "#pragma once\n\n#define BUILD_INFO \"Version: {}\\nMicroversion: {}\\nBuild Number: {}\\nBuild Date: {}\"\n",
        state.version, state.microversion, state.build, timestamp
    )
}

/// Timestamp captured at write time; not persisted anywhere else.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Write the header, creating its parent directory if needed.
pub fn write(path: &Path, state: &BuildState) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("{}: failed to create header directory", parent.display()))?;
    }
    let content = render(state, &current_timestamp());
    fs::write(path, content)
        .with_context(|| format!("{}: failed to write header file", path.display()))
}
