//! engine::observable — the default cosine-product observable and the loss.
//!
//! Purpose
//! -------
//! Provide the mock expectation value the engine optimizes by default,
//! `⟨O⟩(θ) = ∏ᵢ cos(θᵢ)`, together with the squared-deviation loss shared by
//! every objective. On a real quantum device the observable would be
//! measured from circuit results; here it is a closed-form stand-in that is
//! bounded in `[-1, 1]` and cheap to evaluate.
//!
//! Conventions
//! -----------
//! - Both functions are pure: no state, no side effects, O(n) in the number
//!   of parameters.
//! - The product is commutative, so the observable does not depend on
//!   iteration order over `theta`.

use crate::engine::{traits::Objective, types::Theta};

/// Mock expectation value `⟨O⟩(θ) = cos(θ₀) · cos(θ₁) · …`.
///
/// The engine's default objective. Each factor lies in `[-1, 1]`, so the
/// product does too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineProduct;

impl Objective for CosineProduct {
    fn value(&self, theta: &Theta) -> f64 {
        theta.iter().map(|t| t.cos()).product()
    }
}

/// Squared deviation of the observable from the target:
/// `L(θ) = (⟨O⟩(θ) − target)²`.
///
/// Always ≥ 0, and exactly 0 when the observable hits the target.
pub fn quadratic_loss(observable: f64, target: f64) -> f64 {
    (observable - target).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form values of the cosine product at known angles.
    // - Permutation invariance of the product.
    // - The loss identity L = (O - target)^2 and its non-negativity.
    // -------------------------------------------------------------------------

    #[test]
    fn cosine_product_at_zero_angles_is_one() {
        let theta: Theta = Array1::zeros(4);
        assert_eq!(CosineProduct.value(&theta), 1.0);
    }

    #[test]
    fn cosine_product_matches_closed_form() {
        let theta: Theta = array![0.3, 1.1, -0.7];
        let expected = 0.3_f64.cos() * 1.1_f64.cos() * (-0.7_f64).cos();
        assert!((CosineProduct.value(&theta) - expected).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // The observable is a pure product, so simultaneously permuting the
    // parameter vector must not change its value.
    fn cosine_product_is_permutation_invariant() {
        let theta: Theta = array![0.2, 1.4, -0.9, 2.5];
        let permuted: Theta = array![2.5, 0.2, -0.9, 1.4];
        assert_eq!(CosineProduct.value(&theta), CosineProduct.value(&permuted));
    }

    #[test]
    fn quadratic_loss_matches_identity_and_is_non_negative() {
        for (obs, target) in [(1.0, 1.0), (0.5, -0.25), (-1.0, 1.0), (0.0, 0.7)] {
            let loss = quadratic_loss(obs, target);
            assert_eq!(loss, (obs - target) * (obs - target));
            assert!(loss >= 0.0);
        }
    }
}
