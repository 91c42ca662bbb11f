//! Orchestration of a single stamping run.

use crate::cli::Args;
use crate::state::{self, BuildState, LoadedState};
use crate::{header, resource};
use anyhow::Result;

/// Run the stamper: load prior state, bump the counter, and regenerate the
/// artifacts. The counter and header are written before the resource file is
/// checked, so a missing resource file fails the run with both of them
/// already updated.
pub fn run(args: &Args) -> Result<BuildState> {
    let next = match state::load(&args.counter)? {
        LoadedState::Prior(prior) => {
            if args.verbose > 0 && !args.quiet {
                eprintln!(
                    "buildstamp: prior state {} in {}",
                    prior,
                    args.counter.display()
                );
            }
            prior.bumped()
        }
        LoadedState::FirstRun => {
            if args.verbose > 0 && !args.quiet {
                eprintln!(
                    "buildstamp: no prior state in {}, starting at build 1",
                    args.counter.display()
                );
            }
            BuildState::reset()
        }
        LoadedState::Malformed(content) => {
            // Recovered locally: warn and continue from the reset state.
            eprintln!(
                "buildstamp: warning: malformed counter content {:?} in {}, resetting to build 1",
                content,
                args.counter.display()
            );
            BuildState::reset()
        }
    };

    state::store(&args.counter, &next)?;
    header::write(&args.header, &next)?;

    if args.skip_resource {
        if args.verbose > 0 && !args.quiet {
            eprintln!("buildstamp: skipping resource file");
        }
    } else {
        resource::rewrite(&args.resource, &next)?;
    }

    if !args.quiet {
        println!(
            "stamped build {} (version {}, microversion {})",
            next.build, next.version, next.microversion
        );
    }

    Ok(next)
}
