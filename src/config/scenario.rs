// src/config/scenario.rs

use serde::Deserialize;

use crate::config::parameters::StepParameters;
use crate::math::equation::EquationKind;

/// 近似するシナリオ（微分方程式と初期条件・刻み幅の組）
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub equation: EquationKind,
    pub parameters: StepParameters,
}
