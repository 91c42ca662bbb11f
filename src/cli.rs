use clap::Parser;
use std::path::PathBuf;

/// Long version string with the compile date stamped by build.rs.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILDSTAMP_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug, Clone)]
#[command(
    name = "buildstamp",
    version,
    long_version = LONG_VERSION,
    about = "Build counter and version stamping utility",
    after_help = "Examples:\n  \
        buildstamp\n  \
        buildstamp --counter build/info.txt --header include/build_info.h\n  \
        buildstamp --skip-resource -v"
)]
pub struct Args {
    /// Counter file holding version,microversion,buildNumber
    #[arg(long = "counter", default_value = "utils/build_info.txt")]
    pub counter: PathBuf,

    /// Generated C header path
    #[arg(long = "header", default_value = "src/build_info.h")]
    pub header: PathBuf,

    /// Version-resource file patched in place
    #[arg(long = "resource", default_value = "version.rc")]
    pub resource: PathBuf,

    /// Leave the version-resource file untouched
    #[arg(long = "skip-resource")]
    pub skip_resource: bool,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
