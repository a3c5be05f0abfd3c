// src/math/integrator.rs

use std::fmt;

use crate::math::equation::{advance, Equation};

/// 比較する固定刻みの積分手法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Euler,
    Heun,
    RungeKutta4,
}

impl Method {
    /// 出力する順序（Euler → Heun → Runge-Kutta）
    pub const ALL: [Method; 3] = [Method::Euler, Method::Heun, Method::RungeKutta4];

    /// 出力の見出し
    pub fn title(&self) -> &'static str {
        match self {
            Method::Euler => "Euler's Method",
            Method::Heun => "Heun's Method",
            Method::RungeKutta4 => "Runge-Kutta Method",
        }
    }

    /// 1ステップあたりの F(x, y) の評価回数
    pub fn evaluations(&self) -> usize {
        match self {
            Method::Euler => 1,
            Method::Heun => 2,
            Method::RungeKutta4 => 4,
        }
    }

    /// 手法に応じて次のyの値を計算する
    pub fn step<E: Equation + ?Sized>(&self, equation: &E, x: f64, y: f64, h: f64) -> f64 {
        match self {
            Method::Euler => euler_step(equation, x, y, h),
            Method::Heun => heun_step(equation, x, y, h),
            Method::RungeKutta4 => runge_kutta_step(equation, x, y, h),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Euler法による1ステップ
///
/// # 引数
/// - `equation`: 微分方程式 F(x, y)
/// - `x`, `y`: 現在の点
/// - `h`: 刻み幅
///
/// # 戻り値
/// - x + h におけるyの近似値 y + h·F(x, y)
pub fn euler_step<E: Equation + ?Sized>(equation: &E, x: f64, y: f64, h: f64) -> f64 {
    y + h * equation.slope(x, y)
}

/// Heun法（改良Euler法）による1ステップ
///
/// Euler法で予測した点の傾きと現在の傾きを平均する（台形則）。
///
/// # 戻り値
/// - y + h/2·(F(x, y) + F(x + h, y_pred))
pub fn heun_step<E: Equation + ?Sized>(equation: &E, x: f64, y: f64, h: f64) -> f64 {
    let slope = equation.slope(x, y);
    let predicted = y + h * slope;
    let corrected = equation.slope(advance(x, h), predicted);
    y + h * ((slope + corrected) / 2.0)
}

/// Runge-Kutta法の4つの傾き k1..k4
///
/// k2 は k1、k3 は k2、k4 は k3 に依存するので、この順で計算する。
/// いずれも外側のステップと同じ (x, y, h) を基準にする。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RungeKuttaSlopes {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

impl RungeKuttaSlopes {
    pub fn new<E: Equation + ?Sized>(equation: &E, x: f64, y: f64, h: f64) -> Self {
        let half = 0.5 * h;
        let k1 = h * equation.slope(x, y);
        let k2 = h * equation.slope(x + half, y + 0.5 * k1);
        let k3 = h * equation.slope(x + half, y + 0.5 * k2);
        let k4 = h * equation.slope(advance(x, h), y + k3);
        RungeKuttaSlopes { k1, k2, k3, k4 }
    }

    /// 重み 1, 2, 2, 1 の加重平均 (k1 + 2k2 + 2k3 + k4) / 6
    pub fn weighted_sum(&self) -> f64 {
        (self.k1 + 2.0 * self.k2 + 2.0 * self.k3 + self.k4) / 6.0
    }
}

/// 4次のRunge-Kutta法による1ステップ
///
/// # 引数
/// - `equation`: 微分方程式 F(x, y)
/// - `x`, `y`: 現在の点
/// - `h`: 刻み幅
///
/// # 戻り値
/// - x + h におけるyの近似値
pub fn runge_kutta_step<E: Equation + ?Sized>(equation: &E, x: f64, y: f64, h: f64) -> f64 {
    y + RungeKuttaSlopes::new(equation, x, y, h).weighted_sum()
}
