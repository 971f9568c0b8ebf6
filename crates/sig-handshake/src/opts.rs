use crate::config::{
    HandshakeConfig, DEFAULT_FIELD_SIZE, DEFAULT_MESSAGE, DEFAULT_SECURITY_LEVEL,
    DEFAULT_TIMEOUT,
};
use gumdrop::Options;
use std::time::Duration;

/// Runs a BLS signature handshake between a simulated signer and verifier.
/// Without any option the reference run is performed.
#[derive(Debug, Options, Clone)]
pub struct Opts {
    help: bool,

    #[options(help = "the message the signer signs")]
    pub message: Option<String>,

    #[options(help = "minimum bit length of the group order")]
    pub security_level: Option<usize>,

    #[options(help = "base field size of the reference degree-2 construction")]
    pub field_size: Option<usize>,

    #[options(help = "seconds a party waits for its peer")]
    pub timeout: Option<u64>,

    #[options(no_short, help = "flip one byte of the signature in transit")]
    pub tamper: bool,

    #[options(help = "log filter directive (e.g. debug)", default = "info")]
    pub log_level: String,
}

impl From<Opts> for HandshakeConfig {
    fn from(opts: Opts) -> Self {
        Self {
            security_level: opts.security_level.unwrap_or(DEFAULT_SECURITY_LEVEL),
            field_size: opts.field_size.unwrap_or(DEFAULT_FIELD_SIZE),
            message: opts
                .message
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            timeout: opts
                .timeout
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            tamper: opts.tamper,
        }
    }
}
