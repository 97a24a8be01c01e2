//! engine::types — shared numeric aliases and constants.
//!
//! Purpose
//! -------
//! Centralize the numeric types and tuning constants used across the engine
//! so the rest of the code stays agnostic to `ndarray` and so every module
//! agrees on the finite-difference step and the default driver policy.
//!
//! Conventions
//! -----------
//! - [`Theta`] and [`Grad`] are conceptually column vectors whose length
//!   equals the engine's dimensionality.
//! - [`FD_EPSILON`] is fixed rather than scale-adaptive: it was chosen
//!   empirically as large enough to stay clear of floating-point
//!   cancellation noise and small enough for reasonable local accuracy on
//!   objectives bounded in `[-1, 1]`.
//! - The driver defaults mirror the reference orchestration: stop after
//!   [`DEFAULT_MAX_STEPS`] steps or once the loss falls below
//!   [`DEFAULT_LOSS_TOLERANCE`].

use ndarray::Array1;

/// Parameter vector `θ` for the descent engine.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the engine.
pub type Theta = Array1<f64>;

/// Finite-difference gradient estimate `∇L(θ)`.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Forward-difference perturbation applied to one parameter at a time.
pub const FD_EPSILON: f64 = 1e-3;

/// Default hard cap on driver steps.
pub const DEFAULT_MAX_STEPS: usize = 200;

/// Default loss cutoff below which the driver reports convergence.
pub const DEFAULT_LOSS_TOLERANCE: f64 = 1e-10;
