//! engine — the steppable finite-difference descent core.
//!
//! Purpose
//! -------
//! Provide the whole optimizer surface: numeric aliases and constants
//! ([`types`]), the objective seam and configuration records ([`traits`]),
//! the default cosine-product observable ([`observable`]), forward-difference
//! gradients ([`finite_diff`]), the engine itself ([`optimizer`]), and a
//! reference driving loop (`run`, [`api`]) that owns the termination policy
//! the engine deliberately does not have.
//!
//! Key behaviors
//! -------------
//! - Construct a [`VqeEngine`] from a validated [`EngineConfig`] (random
//!   uniform initialization in `[0, 2π)`, optionally seeded) or from an
//!   explicit initial parameter vector.
//! - Advance the engine one step at a time via [`VqeEngine::step`], each call
//!   returning an immutable [`StepSnapshot`].
//! - Read current state without side effects via [`VqeEngine::snapshot`].
//! - Drive the engine to termination with [`run::run`] or [`api::optimize`],
//!   accumulating an append-only history of `(step, loss, observable)`
//!   records.
//!
//! Conventions
//! -----------
//! - Parameters and gradients use the [`Theta`] / [`Grad`] aliases over
//!   `ndarray::Array1<f64>`.
//! - Constructors that can fail return [`EngineResult<T>`]; `step` and
//!   `snapshot` are total and never fail.
//! - The snapshot returned by `step` pairs the *pre-update* loss and
//!   observable with the *post-update* parameters and step counter; see
//!   [`StepSnapshot`] for the rationale. This pairing is a contract, not a
//!   bug.
//! - This module and its children avoid I/O and logging; reporting progress
//!   belongs to the layers that consume the snapshot stream.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover constructor validation, gradient
//!   accuracy on analytic objectives, the step contract, and driver
//!   termination.
//! - `tests/integration_descent.rs` exercises full seeded descent runs end
//!   to end.

pub mod api;
pub mod errors;
pub mod finite_diff;
pub mod observable;
pub mod optimizer;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::optimize;
pub use self::errors::{EngineError, EngineResult};
pub use self::observable::CosineProduct;
pub use self::optimizer::VqeEngine;
pub use self::run::run;
pub use self::traits::{
    EngineConfig, EngineState, HistoryRecord, Objective, RunOutcome, RunPolicy, StepSnapshot,
};
pub use self::types::{FD_EPSILON, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::api::optimize;
    pub use super::errors::{EngineError, EngineResult};
    pub use super::observable::CosineProduct;
    pub use super::optimizer::VqeEngine;
    pub use super::run::run;
    pub use super::traits::{EngineConfig, Objective, RunOutcome, RunPolicy, StepSnapshot};
    pub use super::types::{Grad, Theta};
}
