//! In-place patching of the version-resource (.rc) file.
//!
//! Four fields are rewritten from the current build state; every other line
//! passes through byte-for-byte. Matching is whitespace-sensitive for the
//! `FILEVERSION`/`PRODUCTVERSION` statements (single leading space) and
//! indentation-agnostic for the string-table `VALUE` entries.

use crate::state::BuildState;
use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::Path;

/// Patch the resource text, preserving line count and order.
pub fn patch_lines(content: &str, state: &BuildState) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        out.push_str(&patch_line(line, state));
    }
    out
}

fn patch_line(line: &str, state: &BuildState) -> String {
    if line.starts_with(" FILEVERSION") {
        format!(" FILEVERSION {},{},0,0\n", state.major(), state.build)
    } else if line.starts_with(" PRODUCTVERSION") {
        format!(" PRODUCTVERSION {},0,0,0\n", state.major())
    } else if line.trim_start().starts_with("VALUE \"FileVersion\"") {
        format!(
            "            VALUE \"FileVersion\", \"{}.{}\\0\"\n",
            state.version, state.build
        )
    } else if line.trim_start().starts_with("VALUE \"ProductVersion\"") {
        format!(
            "            VALUE \"ProductVersion\", \"{}\\0\"\n",
            state.version
        )
    } else {
        line.to_string()
    }
}

/// Rewrite the resource file in place. The file must already exist; the
/// counter and header have been written by the time this is called, so a
/// missing resource file fails the run but leaves those artifacts updated.
pub fn rewrite(path: &Path, state: &BuildState) -> Result<()> {
    ensure!(
        path.exists(),
        "{}: resource file not found",
        path.display()
    );
    let content = fs::read_to_string(path)
        .with_context(|| format!("{}: failed to read resource file", path.display()))?;
    let patched = patch_lines(&content, state);
    fs::write(path, patched)
        .with_context(|| format!("{}: failed to write resource file", path.display()))
}
