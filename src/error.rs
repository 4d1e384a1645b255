//! Error types for phase-stepper.
//!
//! Provides unified error handling across configuration, motor hardware, and motion commands.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all phase-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware collaborator error
    Motor(MotorError),
    /// Rejected motion command
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Step period must be greater than zero
    InvalidStepPeriod(u32),
    /// Steps per revolution must be greater than zero
    InvalidStepsPerRevolution(u32),
    /// Wait poll interval must be greater than zero
    InvalidWaitPoll(u32),
    /// A phase table needs at least one phase vector
    EmptyPhaseTable,
    /// A required builder component was not supplied
    MissingComponent(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware collaborator errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Output pin operation failed
    PinError,
    /// Periodic timer could not be armed or cancelled
    TimerError,
}

/// Motion command errors.
///
/// All of these are detected before any state is touched, so the motor
/// stays usable and the command can be retried with corrected input.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Direction was not exactly +1 or -1
    InvalidDirection(i32),
    /// Target outside `[0, max]`
    InvalidTarget {
        /// Requested target in steps
        target: i64,
        /// Steps per revolution of the motor
        max: u32,
    },
    /// Angle outside `[0, 360]`
    InvalidAngle(f32),
    /// A motion is already in progress
    AlreadyRunning,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::InvalidStepPeriod(v) => {
                write!(f, "Invalid step period: {} ms. Must be > 0", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidWaitPoll(v) => {
                write!(f, "Invalid wait poll interval: {} us. Must be > 0", v)
            }
            ConfigError::EmptyPhaseTable => write!(f, "Phase table must not be empty"),
            ConfigError::MissingComponent(what) => write!(f, "{} is required", what),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::TimerError => write!(f, "Periodic timer operation failed"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::InvalidDirection(d) => {
                write!(f, "Invalid direction {}. Must be 1 or -1", d)
            }
            MotionError::InvalidTarget { target, max } => {
                write!(f, "Target {} outside [0, {}]", target, max)
            }
            MotionError::InvalidAngle(a) => write!(f, "Angle {} outside [0, 360]", a),
            MotionError::AlreadyRunning => write!(f, "Motor is already running"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
