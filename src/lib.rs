// src/lib.rs

//! 一階常微分方程式 dy/dx = F(x, y) を Euler法・Heun法・4次Runge-Kutta法の
//! 固定刻みで近似し、各手法の軌跡を比較する。

pub mod config;
pub mod math;
pub mod simulation;
