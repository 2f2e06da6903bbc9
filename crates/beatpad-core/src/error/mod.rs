use error_location::ErrorLocation;
use thiserror::Error;

/// Sound asset and audio device errors with source location tracking.
///
/// Trigger routing, recording and playback never produce these; they only
/// surface from setup (loading samples, opening the output device) and from
/// the sound backend, where the pad registry logs and swallows them.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A sample file could not be opened or decoded.
    #[error("Failed to load sample {path:?}: {reason} {location}")]
    SampleLoad {
        /// Path to the sample file.
        path: std::path::PathBuf,
        /// Description of the decode failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A sample file uses an encoding that is not supported.
    #[error("Unsupported sample format in {path:?}: {reason} {location}")]
    UnsupportedFormat {
        /// Path to the sample file.
        path: std::path::PathBuf,
        /// Which part of the format was rejected.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Sample rate conversion failed.
    #[error("Resampling error: {reason} {location}")]
    Resampling {
        /// Description of the resampling error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio output device found.
    #[error("No output device found {location}")]
    NoOutputDevice {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The audio callback has not drained its command queue.
    #[error("Audio command queue is full {location}")]
    AudioQueueFull {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
