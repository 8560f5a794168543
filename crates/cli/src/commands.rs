// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand implementations.

use chrono::{DateTime, FixedOffset};
use color_eyre::Result;
use color_eyre::eyre::{Context, eyre};
use rolegate::{ConstraintOrchestrator, EngineConfig, Rejection};
use rolegate_domain::{
    Constraint, EntityKind, FixedClock, RawConstraint, SessionContext, SystemClock, TimeSnapshot,
};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Exit status for a denied activation.
const DENIED: u8 = 2;

/// Runs `rolegate check`.
pub fn check(
    constraint_path: &Path,
    kind: EntityKind,
    user: &str,
    last_access: i64,
    config_path: Option<&Path>,
    at: Option<&str>,
) -> Result<ExitCode> {
    let config: EngineConfig = load_config(config_path)?;
    let orchestrator: ConstraintOrchestrator = build_orchestrator(&config, at)?;

    let json: String = std::fs::read_to_string(constraint_path)
        .wrap_err_with(|| format!("Failed to read {}", constraint_path.display()))?;
    let constraint: Constraint = parse_constraint(&json)?;
    info!(constraint = constraint.name(), kind = %kind, "Checking constraint");

    let session: SessionContext<'_> = SessionContext::new(user).with_last_access(last_access);
    let result: Result<(), Rejection> = orchestrator.validate(kind, &constraint, &session);

    println!("{}", verdict(&result));
    Ok(match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(DENIED),
    })
}

/// Runs `rolegate snapshot`.
pub fn snapshot(config_path: Option<&Path>, at: Option<&str>) -> Result<ExitCode> {
    let config: EngineConfig = load_config(config_path)?;
    let orchestrator: ConstraintOrchestrator = build_orchestrator(&config, at)?;

    println!("{}", describe(&orchestrator.snapshot()));
    Ok(ExitCode::SUCCESS)
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    EngineConfig::from_json(&json).wrap_err_with(|| format!("Invalid config {}", path.display()))
}

/// Builds the orchestrator, frozen at `at` (in the configured zone) if given.
fn build_orchestrator(config: &EngineConfig, at: Option<&str>) -> Result<ConstraintOrchestrator> {
    let orchestrator: ConstraintOrchestrator = ConstraintOrchestrator::from_config(config)?;
    let Some(at) = at else {
        return Ok(orchestrator);
    };

    let instant: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(at)
        .map_err(|e| eyre!("Invalid --at instant '{at}': {e}"))?;
    let clock: SystemClock = config.clock()?;
    debug!(%instant, timezone = %clock.timezone(), "Freezing clock");

    Ok(orchestrator.with_clock(FixedClock::at(&instant.with_timezone(&clock.timezone()))))
}

fn parse_constraint(json: &str) -> Result<Constraint> {
    let raw: RawConstraint = serde_json::from_str(json).wrap_err("Invalid constraint document")?;
    Ok(Constraint::parse(&raw)?)
}

fn verdict(result: &Result<(), Rejection>) -> String {
    match result {
        Ok(()) => String::from("granted"),
        Err(rejection) => format!("denied: {rejection}"),
    }
}

fn describe(snapshot: &TimeSnapshot) -> String {
    format!(
        "date={} clock={} day={} epoch_millis={}",
        snapshot.date(),
        snapshot.clock(),
        snapshot.day_digit(),
        snapshot.epoch_millis()
    )
}
