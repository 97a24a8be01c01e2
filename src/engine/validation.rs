//! Constructor-constraint checks for the descent engine.
//!
//! This module centralizes the validation used by the fallible constructors:
//!
//! - **Dimensionality**: [`verify_dimensionality`] requires at least one
//!   parameter.
//! - **Learning rate**: [`verify_learning_rate`] requires a finite, strictly
//!   positive value.
//! - **Driver policy**: [`verify_max_steps`] and [`verify_loss_tolerance`]
//!   guard the caller-side termination policy.
//!
//! All helpers report failures as [`EngineError::InvalidConfiguration`] with
//! the offending parameter name, making higher-level code uniform and easy
//! to debug. The target value is deliberately *not* validated: it is
//! recommended to lie in `[-1, 1]` because the default observable is bounded
//! there, but any real value is accepted.

use crate::engine::errors::{EngineError, EngineResult};

/// Validate the number of parameters.
///
/// # Errors
/// Returns [`EngineError::InvalidConfiguration`] if `dim` is zero.
pub fn verify_dimensionality(dim: usize) -> EngineResult<()> {
    if dim == 0 {
        return Err(EngineError::InvalidConfiguration {
            parameter: "dimensionality",
            value: dim as f64,
            reason: "Dimensionality must be at least one.",
        });
    }
    Ok(())
}

/// Validate the gradient-descent learning rate.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`EngineError::InvalidConfiguration`] if the value is non-finite
/// or ≤ 0.0.
pub fn verify_learning_rate(rate: f64) -> EngineResult<()> {
    if !rate.is_finite() {
        return Err(EngineError::InvalidConfiguration {
            parameter: "learning_rate",
            value: rate,
            reason: "Learning rate must be finite.",
        });
    }
    if rate <= 0.0 {
        return Err(EngineError::InvalidConfiguration {
            parameter: "learning_rate",
            value: rate,
            reason: "Learning rate must be strictly positive.",
        });
    }
    Ok(())
}

/// Validate the driver's hard step cap.
///
/// # Errors
/// Returns [`EngineError::InvalidConfiguration`] if `max_steps` is zero.
pub fn verify_max_steps(max_steps: usize) -> EngineResult<()> {
    if max_steps == 0 {
        return Err(EngineError::InvalidConfiguration {
            parameter: "max_steps",
            value: max_steps as f64,
            reason: "Maximum steps must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the driver's loss cutoff.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`EngineError::InvalidConfiguration`] if the value is non-finite
/// or ≤ 0.0.
pub fn verify_loss_tolerance(tol: f64) -> EngineResult<()> {
    if !tol.is_finite() {
        return Err(EngineError::InvalidConfiguration {
            parameter: "loss_tolerance",
            value: tol,
            reason: "Loss tolerance must be finite.",
        });
    }
    if tol <= 0.0 {
        return Err(EngineError::InvalidConfiguration {
            parameter: "loss_tolerance",
            value: tol,
            reason: "Loss tolerance must be strictly positive.",
        });
    }
    Ok(())
}
