//! engine::traits — the objective seam, configuration records, and outcomes.
//!
//! Purpose
//! -------
//! Define the one trait the engine is generic over ([`Objective`]) and the
//! plain data records that cross the engine boundary: validated
//! configuration ([`EngineConfig`], [`RunPolicy`]) going in, immutable
//! snapshots ([`StepSnapshot`], [`EngineState`], [`HistoryRecord`],
//! [`RunOutcome`]) coming out.
//!
//! Conventions
//! -----------
//! - Configuration constructors validate on construction; once a value of
//!   these types exists it can be assumed internally consistent.
//! - Snapshot records are value types: they own copies of the parameter
//!   vector, never live references into engine state.

use crate::engine::{
    errors::EngineResult,
    types::{DEFAULT_LOSS_TOLERANCE, DEFAULT_MAX_STEPS, Theta},
    validation::{
        verify_dimensionality, verify_learning_rate, verify_loss_tolerance, verify_max_steps,
    },
};

/// A pure scalar objective over a parameter vector.
///
/// Implementations must be stateless with respect to `value`: the same
/// `theta` always yields the same result, with no side effects. The engine
/// differentiates implementations numerically, so no gradient method is
/// required; anything smooth enough for a forward difference at the fixed
/// engine ε works.
pub trait Objective {
    /// Evaluate the observable at `theta`.
    fn value(&self, theta: &Theta) -> f64;
}

/// Validated engine configuration.
///
/// Fields:
/// - `dimensionality: usize` — number of parameters, ≥ 1.
/// - `learning_rate: f64` — gradient-descent step size, finite and > 0.
/// - `target: f64` — value the observable is driven toward. Recommended in
///   `[-1, 1]` since the default observable is bounded there, but not
///   enforced.
/// - `random_seed: Option<u64>` — seed for the uniform `[0, 2π)` parameter
///   initialization. `Some(seed)` makes runs bit-for-bit reproducible;
///   `None` draws from OS entropy.
///
/// Default: 3 parameters, learning rate 0.1, target 1.0, unseeded.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub dimensionality: usize,
    pub learning_rate: f64,
    pub target: f64,
    pub random_seed: Option<u64>,
}

impl EngineConfig {
    /// Construct a validated configuration.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfiguration` if `dimensionality < 1` or if
    ///   `learning_rate` is non-finite or ≤ 0.
    pub fn new(
        dimensionality: usize, learning_rate: f64, target: f64, random_seed: Option<u64>,
    ) -> EngineResult<Self> {
        verify_dimensionality(dimensionality)?;
        verify_learning_rate(learning_rate)?;
        Ok(Self { dimensionality, learning_rate, target, random_seed })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { dimensionality: 3, learning_rate: 0.1, target: 1.0, random_seed: None }
    }
}

/// Caller-side termination policy for the driving loop.
///
/// The engine itself has no stopping condition and will run indefinitely if
/// driven indefinitely; this record belongs to the orchestration layer.
///
/// Fields:
/// - `max_steps: usize` — hard cap on the number of steps, ≥ 1.
/// - `loss_tolerance: f64` — stop and report convergence once the pre-update
///   loss falls below this cutoff; finite and > 0.
///
/// Default: 200 steps, cutoff 1e-10.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunPolicy {
    pub max_steps: usize,
    pub loss_tolerance: f64,
}

impl RunPolicy {
    /// Construct a validated policy.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfiguration` if `max_steps == 0` or if
    ///   `loss_tolerance` is non-finite or ≤ 0.
    pub fn new(max_steps: usize, loss_tolerance: f64) -> EngineResult<Self> {
        verify_max_steps(max_steps)?;
        verify_loss_tolerance(loss_tolerance)?;
        Ok(Self { max_steps, loss_tolerance })
    }
}

impl Default for RunPolicy {
    fn default() -> Self {
        Self { max_steps: DEFAULT_MAX_STEPS, loss_tolerance: DEFAULT_LOSS_TOLERANCE }
    }
}

/// Immutable result of one engine step.
///
/// Pairing contract: `loss` and `observable` are evaluated at the parameter
/// vector as it stood *before* this step, while `theta` and `step` reflect
/// the state *after* the update. The caller records "the loss that justified
/// this update" alongside "the step index after taking it"; `loss` does NOT
/// correspond to the returned `theta`. This asymmetry is preserved from the
/// original behavior as a contract of the snapshot stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSnapshot {
    /// Step counter after this update (first step returns 1).
    pub step: usize,
    /// Post-update parameter vector (owned copy).
    pub theta: Theta,
    /// Loss at the pre-update parameters.
    pub loss: f64,
    /// Observable at the pre-update parameters.
    pub observable: f64,
}

/// Read-only view of engine state between steps.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Current parameter vector (owned copy).
    pub theta: Theta,
    /// Steps taken so far.
    pub step: usize,
}

/// One append-only history entry, as accumulated by the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRecord {
    pub step: usize,
    pub loss: f64,
    pub observable: f64,
}

/// Canonical result returned by [`crate::engine::run::run`].
///
/// - `theta_hat`: final parameter vector after the last step taken.
/// - `loss` / `observable`: the last snapshot's (pre-update) values.
/// - `steps`: total steps taken.
/// - `converged`: `true` if the loss cutoff was reached, `false` if the run
///   stopped at the step cap.
/// - `history`: every snapshot of the run in order, one record per step.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub theta_hat: Theta,
    pub loss: f64,
    pub observable: f64,
    pub steps: usize,
    pub converged: bool,
    pub history: Vec<HistoryRecord>,
}
