//! Caller-side driving loop: the termination policy the engine refuses to own.
//!
//! The engine is a pure step function and will run indefinitely if driven
//! indefinitely. This module is the reference orchestration: it calls
//! [`VqeEngine::step`] in a loop, appends every snapshot to an append-only
//! history, and stops once the pre-update loss falls below the policy cutoff
//! (convergence) or the step cap is reached. Cancellation needs no
//! primitive: stopping the loop is the cancellation.

use crate::engine::{
    optimizer::VqeEngine,
    traits::{HistoryRecord, Objective, RunOutcome, RunPolicy},
};

/// Drive `engine` until the policy says stop.
///
/// Each step's snapshot becomes one [`HistoryRecord`]; records are immutable
/// once appended and their step indices run `1..=steps` with no gaps. The
/// engine is left at its post-run state, so a caller may inspect it or even
/// keep stepping with a fresh policy; the loop itself never re-creates or
/// resets the engine.
///
/// Stop conditions, checked after every step in this order:
/// - `snapshot.loss < policy.loss_tolerance` → `converged = true`;
/// - `snapshot.step >= policy.max_steps` → `converged = false`.
///
/// Note that the loss inspected here is the snapshot's pre-update loss, so a
/// run that converges reports the loss that was observed *before* the final
/// update, matching the step contract.
pub fn run<O: Objective>(engine: &mut VqeEngine<O>, policy: &RunPolicy) -> RunOutcome {
    let mut history = Vec::new();
    loop {
        let snap = engine.step();
        history.push(HistoryRecord {
            step: snap.step,
            loss: snap.loss,
            observable: snap.observable,
        });

        let converged = snap.loss < policy.loss_tolerance;
        if converged || snap.step >= policy.max_steps {
            return RunOutcome {
                theta_hat: snap.theta,
                loss: snap.loss,
                observable: snap.observable,
                steps: snap.step,
                converged,
                history,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Termination at the step cap and at the loss cutoff.
    // - History shape: one record per step, contiguous step indices.
    //
    // They intentionally DO NOT cover:
    // - Descent quality over long runs (integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // With an unreachable loss cutoff the driver must stop exactly at the
    // step cap and report converged = false.
    fn run_stops_at_the_step_cap() {
        // Arrange
        let mut engine = VqeEngine::from_theta(array![1.0, 2.0], 0.1, 0.9).unwrap();
        let policy = RunPolicy::new(25, 1e-300).unwrap();

        // Act
        let outcome = run(&mut engine, &policy);

        // Assert
        assert_eq!(outcome.steps, 25);
        assert!(!outcome.converged);
        assert_eq!(outcome.history.len(), 25);
        for (i, record) in outcome.history.iter().enumerate() {
            assert_eq!(record.step, i + 1);
            assert!(record.loss >= 0.0);
        }
        assert_eq!(engine.snapshot().step, 25);
    }

    #[test]
    // Purpose
    // -------
    // Starting at the loss minimum, the very first snapshot reports loss 0,
    // which is below any positive cutoff: the driver must stop after one
    // step and report convergence.
    fn run_converges_immediately_at_the_minimum() {
        // Arrange
        let mut engine = VqeEngine::from_theta(array![0.0], 0.1, 1.0).unwrap();
        let policy = RunPolicy::default();

        // Act
        let outcome = run(&mut engine, &policy);

        // Assert
        assert!(outcome.converged);
        assert_eq!(outcome.steps, 1);
        assert_eq!(outcome.loss, 0.0);
        assert_eq!(outcome.observable, 1.0);
        assert_eq!(outcome.history.len(), 1);
    }

    #[test]
    fn outcome_mirrors_the_last_history_record() {
        let mut engine = VqeEngine::from_theta(array![0.3, 0.9, 1.5], 0.1, 1.0).unwrap();
        let policy = RunPolicy::new(40, 1e-12).unwrap();

        let outcome = run(&mut engine, &policy);

        let last = outcome.history.last().expect("History is never empty");
        assert_eq!(outcome.steps, last.step);
        assert_eq!(outcome.loss, last.loss);
        assert_eq!(outcome.observable, last.observable);
        assert_eq!(outcome.theta_hat, engine.snapshot().theta);
    }
}
