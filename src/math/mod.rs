// src/math/mod.rs

pub mod equation;
pub mod error;
pub mod integrator;

pub use equation::{advance, Equation, EquationKind};
pub use error::ApproximationError;
pub use integrator::{euler_step, heun_step, runge_kutta_step, Method};
