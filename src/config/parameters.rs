// src/config/parameters.rs

use serde::Deserialize;

use crate::config::error::ConfigError;

/// 固定刻みの近似計算に共通するパラメータ
///
/// 3つの手法で同じ値を共有し、実行中は変更しない。
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct StepParameters {
    pub x_initial: f64, // 初期x値
    pub y_initial: f64, // 初期y値
    pub step_size: f64, // 刻み幅 h
    pub target: f64,    // 近似を終えるx値
    pub epsilon: f64,   // 終了判定 x - target < epsilon の許容誤差
}

impl Default for StepParameters {
    fn default() -> Self {
        StepParameters {
            x_initial: 0.0,
            y_initial: 0.5,
            step_size: 0.1,
            target: 0.5,
            epsilon: 1e-7,
        }
    }
}

impl StepParameters {
    /// 近似を開始する前にパラメータを検証する
    ///
    /// 刻み幅や許容誤差が正でない場合、終了判定が成立せず無限ループになるため
    /// ここで拒否する。
    ///
    /// # 戻り値
    /// - 問題がなければ `Ok(())`
    /// - 不正な値があれば対応する `ConfigError`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(ConfigError::InvalidStepSize(self.step_size));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(ConfigError::InvalidTolerance(self.epsilon));
        }
        let values = [
            ("x_initial", self.x_initial),
            ("y_initial", self.y_initial),
            ("target", self.target),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter { name, value });
            }
        }
        Ok(())
    }

    /// 初期x値がすでに目標値を許容誤差以上に超えているか
    pub fn starts_past_target(&self) -> bool {
        self.x_initial - self.target >= self.epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let params = StepParameters::default();
        assert!(params.validate().is_ok());
        assert!(!params.starts_past_target());
    }

    #[test]
    fn test_zero_step_size_rejected() {
        let params = StepParameters {
            step_size: 0.0,
            ..StepParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidStepSize(h)) if h == 0.0
        ));
    }

    #[test]
    fn test_negative_step_size_rejected() {
        let params = StepParameters {
            step_size: -0.1,
            ..StepParameters::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::InvalidStepSize(_))));
    }

    #[test]
    fn test_nan_step_size_rejected() {
        let params = StepParameters {
            step_size: f64::NAN,
            ..StepParameters::default()
        };
        assert!(matches!(params.validate(), Err(ConfigError::InvalidStepSize(_))));
    }

    #[test]
    fn test_non_positive_epsilon_rejected() {
        for epsilon in [0.0, -1e-7] {
            let params = StepParameters {
                epsilon,
                ..StepParameters::default()
            };
            assert!(matches!(params.validate(), Err(ConfigError::InvalidTolerance(_))));
        }
    }

    #[test]
    fn test_infinite_target_rejected() {
        let params = StepParameters {
            target: f64::INFINITY,
            ..StepParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFiniteParameter { name: "target", .. })
        ));
    }

    #[test]
    fn test_starts_past_target() {
        let params = StepParameters {
            x_initial: 1.0,
            ..StepParameters::default()
        };
        assert!(params.validate().is_ok());
        assert!(params.starts_past_target());
    }
}
