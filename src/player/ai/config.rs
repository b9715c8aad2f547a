use serde::{Deserialize, Serialize};

/// Scoring weights for all three strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub evader: EvaderWeights,
    pub interceptor: InterceptorWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaderWeights {
    /// 目標への接近ボーナス (goal_weight / (dist + 1))
    pub goal_weight: f64,
    /// Pursuers closer than this (Manhattan) trigger the threat penalty.
    pub threat_radius: f64,
    pub threat_weight: f64,
    /// Added to the pursuer distance so that a distance of zero stays finite.
    pub threat_epsilon: f64,
    /// Upper bound of the uniform noise term.
    pub jitter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterceptorWeights {
    pub proximity_weight: f64,
    pub on_path_bonus: f64,
    /// How far off the evader-to-goal path a cell may be and still earn the bonus.
    pub path_slack: f64,
    pub jitter: f64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            evader: EvaderWeights::default(),
            interceptor: InterceptorWeights::default(),
        }
    }
}

impl Default for EvaderWeights {
    fn default() -> Self {
        EvaderWeights {
            goal_weight: 100.0,
            threat_radius: 2.0,
            threat_weight: 50.0,
            threat_epsilon: 0.1,
            jitter: 5.0,
        }
    }
}

impl Default for InterceptorWeights {
    fn default() -> Self {
        InterceptorWeights {
            proximity_weight: 50.0,
            on_path_bonus: 30.0,
            path_slack: 1.0,
            jitter: 3.0,
        }
    }
}
