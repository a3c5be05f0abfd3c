// src/simulation/load_parameters.rs

use serde_yaml::from_str;

use crate::config::{ConfigError, Scenario};

/// ビルド時に埋め込む既定のシナリオ
const DEFAULT_SCENARIO: &str = include_str!("../../config/default.yaml");

/// YAML文字列からシナリオを読み込み、パラメータを検証する
pub fn load_scenario_from_str(yaml: &str) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = from_str(yaml)?;
    scenario.parameters.validate()?;
    Ok(scenario)
}

/// 既定のシナリオの読み込み
pub fn load_default_scenario() -> Result<Scenario, ConfigError> {
    load_scenario_from_str(DEFAULT_SCENARIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StepParameters;
    use crate::math::EquationKind;

    #[test]
    fn test_default_scenario_matches_defaults() {
        let scenario = load_default_scenario().unwrap();
        assert_eq!(scenario.equation, EquationKind::SquaredDifference);
        assert_eq!(scenario.parameters, StepParameters::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let yaml = "equation: linear_decay\nparameters:\n  step_size: 0.25\n  target: 1.0\n";
        let scenario = load_scenario_from_str(yaml).unwrap();
        assert_eq!(scenario.equation, EquationKind::LinearDecay);
        assert_eq!(scenario.parameters.step_size, 0.25);
        assert_eq!(scenario.parameters.target, 1.0);
        assert_eq!(scenario.parameters.y_initial, 0.5);
        assert_eq!(scenario.parameters.epsilon, 1e-7);
    }

    #[test]
    fn test_invalid_step_size_rejected() {
        let yaml = "parameters:\n  step_size: -0.1\n";
        assert!(matches!(
            load_scenario_from_str(yaml),
            Err(ConfigError::InvalidStepSize(_))
        ));
    }

    #[test]
    fn test_unknown_equation_rejected() {
        let yaml = "equation: cubic\n";
        assert!(matches!(load_scenario_from_str(yaml), Err(ConfigError::Yaml(_))));
    }
}
