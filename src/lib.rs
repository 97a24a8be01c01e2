//! vqe_engine — steppable finite-difference gradient descent for a toy VQE objective.
//!
//! Purpose
//! -------
//! Model a parameterized scalar observable (by default the product of the
//! cosines of each parameter, standing in for a variational quantum circuit
//! expectation value) and drive it toward a target value by repeated
//! finite-difference gradient-descent steps. The engine is deliberately a
//! pure step function: one call to [`engine::VqeEngine::step`] performs one
//! full evaluate-differentiate-update cycle and returns a snapshot, and the
//! caller decides when to stop.
//!
//! Key behaviors
//! -------------
//! - Own a parameter vector `θ`, a fixed target, and a step counter, and
//!   expose exactly three operations on them: construction, `step`, and
//!   `snapshot`.
//! - Estimate `∂L/∂θᵢ` by forward differences at a fixed ε, always against
//!   the same pre-step parameter vector, then update every parameter
//!   simultaneously.
//! - Report each step as an immutable [`engine::StepSnapshot`]; an optional
//!   driver ([`engine::run::run`]) accumulates those into a history and
//!   applies the caller-side termination policy.
//!
//! Invariants & assumptions
//! ------------------------
//! - The parameter vector length is fixed for the engine's lifetime and the
//!   step counter increases by exactly one per `step` call.
//! - Loss is `(observable − target)²` and therefore never negative.
//! - `step` and `snapshot` are total over a validly constructed engine; the
//!   only failure surface is constructor validation
//!   ([`engine::EngineError::InvalidConfiguration`]).
//! - The engine is single-threaded and assumes exclusive single-caller
//!   access; callers needing shared access must add their own locking.
//!
//! Downstream usage
//! ----------------
//! - Presentation layers (rendering, charting, text generation) are external
//!   consumers of the snapshot stream and are intentionally absent here.
//! - Most callers want `use vqe_engine::prelude::*;` and either drive
//!   [`engine::VqeEngine`] themselves or call [`engine::api::optimize`].

pub mod engine;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use vqe_engine::prelude::*;
//
// to import the main engine surface in a single line.

pub mod prelude {
    pub use crate::engine::prelude::*;
}
