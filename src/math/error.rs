// src/math/error.rs

use thiserror::Error;

use crate::config::ConfigError;
use crate::math::integrator::Method;

#[derive(Error, Debug)]
pub enum ApproximationError {
    #[error("設定が不正です: {0}")]
    Config(#[from] ConfigError),
    #[error("{method}: ステップ {step} で非有限値が発生しました (x: {x}, y: {y})")]
    NonFiniteValue {
        method: Method,
        step: usize,
        x: f64,
        y: f64,
    },
    #[error("{method}: ステップ {step} で x = {x} が刻み幅を加えても進みません")]
    StalledStep { method: Method, step: usize, x: f64 },
    #[error("出力に失敗しました: {0}")]
    Io(#[from] std::io::Error),
}
