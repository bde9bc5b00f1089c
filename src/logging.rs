// ABOUTME: Production logging setup with env-filter and optional JSON output
// ABOUTME: Initialized once by the server binary before any resources are built
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Courtside

//! Logging initialization
//!
//! Log level defaults to `info` and is overridden with `RUST_LOG`. Set
//! `COURTSIDE_LOG_FORMAT=json` for structured output in hosted
//! environments.

use std::env;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `verbose` lowers the default level to `debug`; `RUST_LOG` always wins.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("courtside={default_level},info")));

    let json_output = env::var("COURTSIDE_LOG_FORMAT").as_deref() == Ok("json");
    if json_output {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
