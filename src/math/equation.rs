// src/math/equation.rs

use std::fmt;

use serde::Deserialize;

/// 一階常微分方程式 dy/dx = F(x, y) の右辺
///
/// `Fn(f64, f64) -> f64` を満たすクロージャはそのまま方程式として使える。
pub trait Equation {
    /// 点 (x, y) における傾き dy/dx を返す
    fn slope(&self, x: f64, y: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(f64, f64) -> f64,
{
    fn slope(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// x を刻み幅 h だけ進める
pub fn advance(x: f64, h: f64) -> f64 {
    x + h
}

/// シナリオから名前で選べる組み込みの方程式
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    /// F(x, y) = (x - y)^2
    #[default]
    SquaredDifference,
    /// F(x, y) = y
    ExponentialGrowth,
    /// F(x, y) = -y
    LinearDecay,
}

impl Equation for EquationKind {
    fn slope(&self, x: f64, y: f64) -> f64 {
        match self {
            EquationKind::SquaredDifference => (x - y) * (x - y),
            EquationKind::ExponentialGrowth => y,
            EquationKind::LinearDecay => -y,
        }
    }
}

impl EquationKind {
    /// 初期条件 (x0, y0) を通る解析解の x における値
    ///
    /// (x - y)^2 は u = x - y と置くと u' = 1 - u^2 となり、
    /// |u| < 1 では tanh、|u| > 1 では coth の形で解ける。
    pub fn exact_solution(&self, x0: f64, y0: f64, x: f64) -> f64 {
        let dx = x - x0;
        match self {
            EquationKind::SquaredDifference => {
                let u0 = x0 - y0;
                let u = if u0.abs() < 1.0 {
                    (dx + u0.atanh()).tanh()
                } else if u0.abs() > 1.0 {
                    let acoth = 0.5 * ((u0 + 1.0) / (u0 - 1.0)).ln();
                    1.0 / (dx + acoth).tanh()
                } else {
                    u0
                };
                x - u
            }
            EquationKind::ExponentialGrowth => y0 * dx.exp(),
            EquationKind::LinearDecay => y0 * (-dx).exp(),
        }
    }
}

impl fmt::Display for EquationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EquationKind::SquaredDifference => "dy/dx = (x - y)^2",
            EquationKind::ExponentialGrowth => "dy/dx = y",
            EquationKind::LinearDecay => "dy/dx = -y",
        };
        f.write_str(text)
    }
}
