//! Error types for trap construction and evaluation.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrapError {
    #[error("Trap depth {trap_depth} T must lie within [0, {background_field}] T")]
    TrapDepthOutOfRange {
        trap_depth: f64,
        background_field: f64,
    },

    #[error("Unsupported trap configuration: {0}")]
    DegenerateConfiguration(String),

    #[error("Invalid electron kinematics: {0}")]
    InvalidKinematics(String),

    #[error("Electron and receiver positions coincide, line of sight is undefined")]
    ZeroLengthProjection,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Pitch angle {pitch_angle} rad is below the minimum trapped angle {minimum} rad")]
    Untrapped { pitch_angle: f64, minimum: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, TrapError>;
