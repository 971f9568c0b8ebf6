use std::time::Duration;

/// Message signed during the reference run
pub const DEFAULT_MESSAGE: &str = "Hello, Fantom Foundation!";

/// Minimum group order size of the reference run
pub const DEFAULT_SECURITY_LEVEL: usize = 160;

/// Base field size of the reference run
pub const DEFAULT_FIELD_SIZE: usize = 512;

/// How long a party waits for its peer on any channel operation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings of a single handshake run. The default is the reference run.
#[derive(Clone, Debug, PartialEq)]
pub struct HandshakeConfig {
    pub security_level: usize,
    pub field_size: usize,
    /// The message the signer signs and publishes
    pub message: String,
    pub timeout: Duration,
    /// Flip one byte of the signature while it is in transit
    pub tamper: bool,
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            security_level: DEFAULT_SECURITY_LEVEL,
            field_size: DEFAULT_FIELD_SIZE,
            message: DEFAULT_MESSAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            tamper: false,
        }
    }
}
