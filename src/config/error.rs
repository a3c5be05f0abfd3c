// src/config/error.rs

use thiserror::Error;

/// 設定の読み込み・検証で発生するエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("刻み幅は正の有限値である必要があります: h = {0}")]
    InvalidStepSize(f64),
    #[error("許容誤差は正の有限値である必要があります: epsilon = {0}")]
    InvalidTolerance(f64),
    #[error("パラメータ `{name}` が有限値ではありません: {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("シナリオのYAMLを解析できません: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
