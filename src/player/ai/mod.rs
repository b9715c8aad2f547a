pub mod aggressive;
pub mod config;
pub mod evader;
pub mod interceptor;

pub use aggressive::AggressiveAI;
pub use config::StrategyConfig;
pub use evader::EvaderAI;
pub use interceptor::InterceptorAI;
