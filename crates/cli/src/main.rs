// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! `rolegate`: check a stored constraint against the clock.
//!
//! ```text
//! rolegate check --constraint teller.json --kind role --at 2011-02-01T09:30:00Z
//! rolegate snapshot --config engine.json
//! ```
//!
//! `check` exits with status `0` when activation is granted, `2` when it is
//! denied and `1` on any error.

mod commands;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use rolegate_domain::EntityKind;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries only the verdict
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.command.run()
}

/// Rolegate - temporal role-activation gate
#[derive(Debug, Parser)]
#[command(name = "rolegate", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Options shared by every subcommand.
#[derive(Clone, Debug, clap::Args)]
struct ClockArgs {
    /// Engine configuration (JSON). Defaults to UTC and the standard rule order.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate at this RFC 3339 instant instead of now
    #[arg(long)]
    at: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Check whether a stored constraint admits activation
    #[command(visible_alias = "c")]
    Check {
        /// Constraint attributes (JSON)
        #[arg(long)]
        constraint: PathBuf,

        /// Kind of entity the constraint belongs to
        #[arg(long, default_value_t = EntityKind::Role)]
        kind: EntityKind,

        /// User on whose behalf the check runs
        #[arg(long, default_value = "cli")]
        user: String,

        /// Session last access in Unix milliseconds; 0 disables the idle check
        #[arg(long, default_value_t = 0)]
        last_access: i64,

        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Print the snapshot the rules would compare against
    #[command(visible_alias = "s")]
    Snapshot {
        #[command(flatten)]
        clock: ClockArgs,
    },
}

impl Command {
    fn run(self) -> Result<ExitCode> {
        match self {
            Self::Check {
                constraint,
                kind,
                user,
                last_access,
                clock,
            } => commands::check(
                &constraint,
                kind,
                &user,
                last_access,
                clock.config.as_deref(),
                clock.at.as_deref(),
            ),
            Self::Snapshot { clock } => {
                commands::snapshot(clock.config.as_deref(), clock.at.as_deref())
            }
        }
    }
}
