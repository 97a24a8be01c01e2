//! engine::optimizer — the steppable descent engine itself.
//!
//! Purpose
//! -------
//! Own the parameter vector, the objective, and the step counter, and expose
//! the three operations of the core contract: construction, [`VqeEngine::step`]
//! (one full evaluate-differentiate-update cycle), and
//! [`VqeEngine::snapshot`] (a side-effect-free read).
//!
//! Key behaviors
//! -------------
//! - Initialize parameters i.i.d. uniform in `[0, 2π)`, from an injected
//!   seed when reproducibility matters, or take an explicit `theta0` from
//!   the caller.
//! - Per step: evaluate the pre-update observable and loss, estimate the
//!   gradient by forward differences against that same pre-update state,
//!   update all parameters simultaneously, and bump the step counter by one.
//! - Never terminate on its own: stopping is the caller's policy
//!   (see [`crate::engine::run::run`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `theta.len()` is constant for the engine's lifetime.
//! - The step counter strictly increases by 1 per `step` call and resets
//!   only via re-creation; there is no in-place reset operation.
//! - Exclusive single-caller access: `step` is not safe to invoke
//!   concurrently on one engine instance, and the engine adds no locking of
//!   its own.

use crate::engine::{
    errors::EngineResult,
    finite_diff::forward_gradient,
    observable::{CosineProduct, quadratic_loss},
    traits::{EngineConfig, EngineState, Objective, StepSnapshot},
    types::Theta,
    validation::{verify_dimensionality, verify_learning_rate},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f64::consts::TAU;

/// Steppable finite-difference gradient-descent engine.
///
/// Generic over the objective so callers can substitute any function that is
/// differentiable by finite differences; defaults to the cosine-product
/// observable.
#[derive(Debug, Clone)]
pub struct VqeEngine<O: Objective = CosineProduct> {
    objective: O,
    theta: Theta,
    learning_rate: f64,
    target: f64,
    step: usize,
}

impl VqeEngine<CosineProduct> {
    /// Construct an engine from a configuration, with random initialization.
    ///
    /// Each parameter is drawn independently and uniformly from `[0, 2π)`;
    /// `config.random_seed` selects between a reproducible seeded stream and
    /// OS entropy. The step counter starts at 0.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfiguration` if the configuration fields
    ///   violate their constraints (the fields are public, so they are
    ///   re-checked here even for configs built via `EngineConfig::new`).
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        verify_dimensionality(config.dimensionality)?;
        verify_learning_rate(config.learning_rate)?;
        let theta = random_theta(config.dimensionality, config.random_seed);
        Ok(Self {
            objective: CosineProduct,
            theta,
            learning_rate: config.learning_rate,
            target: config.target,
            step: 0,
        })
    }

    /// Construct an engine from an explicit initial parameter vector.
    ///
    /// Dimensionality is `theta0.len()`. Useful for resuming from a known
    /// point and for exact scenario tests.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfiguration` if `theta0` is empty or the
    ///   learning rate is non-finite or ≤ 0.
    pub fn from_theta(theta0: Theta, learning_rate: f64, target: f64) -> EngineResult<Self> {
        Self::with_objective(CosineProduct, theta0, learning_rate, target)
    }
}

impl<O: Objective> VqeEngine<O> {
    /// Construct an engine around a substituted objective.
    ///
    /// # Errors
    /// - `EngineError::InvalidConfiguration` if `theta0` is empty or the
    ///   learning rate is non-finite or ≤ 0.
    pub fn with_objective(
        objective: O, theta0: Theta, learning_rate: f64, target: f64,
    ) -> EngineResult<Self> {
        verify_dimensionality(theta0.len())?;
        verify_learning_rate(learning_rate)?;
        Ok(Self { objective, theta: theta0, learning_rate, target, step: 0 })
    }

    /// Number of parameters; constant for the engine's lifetime.
    pub fn dimensionality(&self) -> usize {
        self.theta.len()
    }

    /// The target the observable is driven toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The gradient-descent step size.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Evaluate the observable at the current parameters. Pure, O(n).
    pub fn observable(&self) -> f64 {
        self.objective.value(&self.theta)
    }

    /// Evaluate the loss `(observable − target)²` at the current parameters.
    pub fn loss(&self) -> f64 {
        quadratic_loss(self.observable(), self.target)
    }

    /// Perform one gradient-descent step and return the resulting snapshot.
    ///
    /// 1. Evaluate observable and loss at the current (pre-step) parameters.
    /// 2. Estimate `∂L/∂θᵢ` by forward differences, every perturbation taken
    ///    from the same pre-step vector and differenced against the same
    ///    pre-step loss.
    /// 3. Update all parameters simultaneously:
    ///    `θᵢ ← θᵢ − learning_rate · gradᵢ`.
    /// 4. Increment the step counter by exactly 1.
    ///
    /// The returned snapshot pairs the *pre-update* loss and observable with
    /// the *post-update* parameters and counter; see [`StepSnapshot`] for
    /// the contract. Total: never fails.
    pub fn step(&mut self) -> StepSnapshot {
        let current_observable = self.objective.value(&self.theta);
        let current_loss = quadratic_loss(current_observable, self.target);

        let objective = &self.objective;
        let target = self.target;
        let loss_fn = |theta: &Theta| quadratic_loss(objective.value(theta), target);
        let grad = forward_gradient(&loss_fn, &self.theta, current_loss);

        // The gradient is complete before any parameter moves, so the
        // in-place update is still a simultaneous one.
        self.theta.scaled_add(-self.learning_rate, &grad);
        self.step += 1;

        // Contract: loss/observable are pre-update, theta/step post-update.
        StepSnapshot {
            step: self.step,
            theta: self.theta.clone(),
            loss: current_loss,
            observable: current_observable,
        }
    }

    /// Read current parameters and step counter without stepping.
    ///
    /// Idempotent: repeated calls without an intervening [`VqeEngine::step`]
    /// return identical values.
    pub fn snapshot(&self) -> EngineState {
        EngineState { theta: self.theta.clone(), step: self.step }
    }
}

// ---- Helper methods ----

/// Draw `dim` parameters i.i.d. uniform in `[0, 2π)`.
///
/// A `Some` seed yields a reproducible `StdRng` stream; `None` falls back to
/// OS entropy.
fn random_theta(dim: usize, seed: Option<u64>) -> Theta {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Theta::from_shape_fn(dim, |_| rng.gen_range(0.0..TAU))
}
