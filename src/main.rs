#![forbid(unsafe_code)]
mod cli;
mod header;
mod resource;
mod stamper;
mod state;

use clap::Parser;
use cli::Args;

fn main() {
    let args = Args::parse().validated();
    if let Err(e) = stamper::run(&args) {
        eprintln!("buildstamp: {e:#}");
        std::process::exit(1);
    }
}
