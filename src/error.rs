use crate::core::{Position, Role};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{role} placed out of bounds at {pos}")]
    OutOfBounds { role: String, pos: Position },

    #[error("initial positions overlap at {0}")]
    OverlappingSetup(Position),

    #[error("evader starts on a goal at {0}")]
    EvaderOnGoal(Position),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{role} task failed: {source}")]
    ActorFailed {
        role: Role,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
