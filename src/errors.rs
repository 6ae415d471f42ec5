// Error types for lunchwheel

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum LunchwheelError {
    // Wheel engine errors
    #[snafu(display("Cannot build a wheel from an empty option set"))]
    InvalidOptions,
    #[snafu(display("A spin is already in progress"))]
    AlreadySpinning,

    // Restaurant provider errors
    #[snafu(display("Restaurant search failed: {reason}"))]
    Network { reason: String },
    #[snafu(display("No restaurants found for the current search"))]
    NoResults,

    // Key-value store errors
    #[snafu(display("Could not find application data directory for the key-value store"))]
    NoDataDir,
    #[snafu(display("Error reading or writing the key-value store"))]
    StorageIo { source: io::Error },
    #[snafu(display("Error serializing stored value"))]
    StorageSerialize { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid setting: {field} - {reason}"))]
    InvalidSetting { field: String, reason: String },
}
