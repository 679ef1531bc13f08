//! Momentum, direction, and the angular distance used for matching.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Momentum magnitude and direction of a reconstructed object.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kinematics {
    /// Momentum magnitude (GeV).
    pub p: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Azimuthal angle (radians).
    pub phi: f64,
}

impl Kinematics {
    /// Creates kinematics from momentum magnitude, pseudorapidity and azimuth.
    #[must_use]
    pub const fn new(p: f64, eta: f64, phi: f64) -> Self {
        Self { p, eta, phi }
    }

    /// Builds kinematics from transverse momentum instead of |p|.
    #[must_use]
    pub fn from_pt(pt: f64, eta: f64, phi: f64) -> Self {
        Self {
            p: pt * eta.cosh(),
            eta,
            phi,
        }
    }

    /// Transverse momentum.
    #[must_use]
    pub fn pt(&self) -> f64 {
        self.p / self.eta.cosh()
    }
}

/// Anything with a momentum and direction.
pub trait Momentum {
    /// Returns the object's kinematics.
    fn kinematics(&self) -> &Kinematics;

    /// Momentum magnitude.
    fn p(&self) -> f64 {
        self.kinematics().p
    }

    /// Pseudorapidity.
    fn eta(&self) -> f64 {
        self.kinematics().eta
    }

    /// Azimuthal angle.
    fn phi(&self) -> f64 {
        self.kinematics().phi
    }
}

impl Momentum for Kinematics {
    fn kinematics(&self) -> &Kinematics {
        self
    }
}

/// Azimuthal difference wrapped into `[-pi, pi]`.
#[must_use]
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    let mut diff = phi1 - phi2;
    while diff > PI {
        diff -= 2.0 * PI;
    }
    while diff < -PI {
        diff += 2.0 * PI;
    }
    diff
}

/// Squared angular separation; avoids the square root in hot loops.
#[must_use]
pub fn delta_r2<A: Momentum + ?Sized, B: Momentum + ?Sized>(a: &A, b: &B) -> f64 {
    let d_eta = a.eta() - b.eta();
    let d_phi = delta_phi(a.phi(), b.phi());
    d_eta * d_eta + d_phi * d_phi
}

/// Angular separation `sqrt(d_eta^2 + d_phi^2)`.
#[must_use]
pub fn delta_r<A: Momentum + ?Sized, B: Momentum + ?Sized>(a: &A, b: &B) -> f64 {
    delta_r2(a, b).sqrt()
}
