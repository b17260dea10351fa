use thiserror::Error; // Import the `Error` derive macro from the `thiserror` crate

// Define an enum for the ways a host can fail a close request
#[derive(Debug, Error)] // Automatically implement `Debug` and `Error` traits for the enum
pub enum HostError {
    // The host understood the request but declined it, e.g. the context
    // was not script-opened, with a host-supplied reason
    #[error("close refused: {0}")] // Custom error message formatting for this variant
    Refused(String),

    // The host has no close capability at all
    #[error("close unsupported by host")] // Custom error message formatting for this variant
    Unsupported,
}

// Type alias for results that use `HostError` as the error type
pub type Result<T> = std::result::Result<T, HostError>;
