//! High-level entry point: construct an engine and drive it in one call.
//!
//! This mirrors the split used throughout the crate: the engine owns the
//! mechanism (one step at a time), [`crate::engine::run::run`] owns the policy,
//! and this module wires the two together for callers who just want an
//! optimized parameter vector.

use crate::engine::{
    errors::EngineResult,
    optimizer::VqeEngine,
    run::run,
    traits::{EngineConfig, RunOutcome, RunPolicy},
};

/// Construct a [`VqeEngine`] from `config` and drive it under `policy`.
///
/// # Behavior
/// - Validates `config` via [`VqeEngine::new`] (random `[0, 2π)`
///   initialization, seeded when `config.random_seed` is `Some`).
/// - Loops [`VqeEngine::step`] via [`run`], accumulating the full history.
///
/// # Errors
/// - Propagates `EngineError::InvalidConfiguration` from construction; the
///   driving loop itself cannot fail.
///
/// # Example
/// ```
/// use vqe_engine::prelude::*;
///
/// let config = EngineConfig::new(3, 0.1, 1.0, Some(42))?;
/// let policy = RunPolicy::default();
/// let outcome = optimize(&config, &policy)?;
/// assert_eq!(outcome.history.len(), outcome.steps);
/// # Ok::<(), EngineError>(())
/// ```
pub fn optimize(config: &EngineConfig, policy: &RunPolicy) -> EngineResult<RunOutcome> {
    let mut engine = VqeEngine::new(config)?;
    Ok(run(&mut engine, policy))
}
