#![forbid(unsafe_code)]
//! buildstamp — increments a persistent build counter and regenerates the
//! version artifacts (counter file, C header, version-resource file) consumed
//! by a native build pipeline.

pub mod cli;
pub mod header;
pub mod resource;
pub mod stamper;
pub mod state;
