use serde::Serialize;
use std::ops::Add;

/// The first three positive roots of the characteristic equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EigenvalueSet {
    pub lambda1: f64,
    pub lambda2: f64,
    pub lambda3: f64,
}

impl EigenvalueSet {
    pub fn as_array(&self) -> [f64; 3] {
        [self.lambda1, self.lambda2, self.lambda3]
    }

    pub fn is_strictly_increasing(&self) -> bool {
        0.0 < self.lambda1 && self.lambda1 < self.lambda2 && self.lambda2 < self.lambda3
    }
}

impl From<[f64; 3]> for EigenvalueSet {
    fn from(roots: [f64; 3]) -> Self {
        Self {
            lambda1: roots[0],
            lambda2: roots[1],
            lambda3: roots[2],
        }
    }
}

/// One term of the series, evaluated for a single eigenvalue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeriesTerm {
    /// Amplitude coefficient `A(λ)`.
    pub value_a: f64,
    /// Decayed amplitude `θ0 = A·exp(-λ²·Fo)`, the center temperature term.
    pub value_theta_o: f64,
    /// Local dimensionless temperature `θ0·shape(λ, ξ)`.
    pub value_theta: f64,
    /// Remaining-energy fraction `θ0·flux(λ)`.
    pub value_q: f64,
}

impl Add for SeriesTerm {
    type Output = SeriesTerm;

    fn add(self, rhs: SeriesTerm) -> SeriesTerm {
        SeriesTerm {
            value_a: self.value_a + rhs.value_a,
            value_theta_o: self.value_theta_o + rhs.value_theta_o,
            value_theta: self.value_theta + rhs.value_theta,
            value_q: self.value_q + rhs.value_q,
        }
    }
}

/// Componentwise sum of the three series terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateResult {
    pub value_a: f64,
    pub value_theta_o: f64,
    pub value_theta: f64,
    pub value_q: f64,
}

impl From<SeriesTerm> for AggregateResult {
    fn from(sum: SeriesTerm) -> Self {
        Self {
            value_a: sum.value_a,
            value_theta_o: sum.value_theta_o,
            value_theta: sum.value_theta,
            value_q: sum.value_q,
        }
    }
}

/// Final temperature and transferred heat in physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalResult {
    /// Aggregated dimensionless temperature the result was mapped from.
    pub theta: f64,
    /// Aggregated remaining-energy fraction.
    pub q_fraction: f64,
    pub q_max: f64,
    /// `T = θ·(T_init − T_amb) + T_amb`.
    pub tem: f64,
    /// `Q = (1 − q)·q_max`.
    pub q: f64,
}
