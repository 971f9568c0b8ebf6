//! # Signature Handshake
//!
//! Simulates two parties, a signer and a verifier, running a one-shot BLS
//! signature handshake. The coordinator generates the domain setup once and
//! gives each party its own copy, then the signer publishes its public key
//! and a signed message over rendezvous channels and the verifier checks the
//! pairing equation.

/// Rendezvous channels standing in for a network transport
pub mod channel;

/// Settings of a run
pub mod config;

/// Runs both parties concurrently
pub mod coordinator;

/// Data exchanged on the message channel
pub mod message;

/// Command line options
pub mod opts;

/// Shared domain setup
pub mod setup;

/// The signing party
pub mod signer;

/// The verifying party
pub mod verifier;

use bls_sig::{group::EncodingError, params::SetupError, sig::BLSError};
use channel::ChannelError;
use thiserror::Error;

pub use coordinator::run;
pub use verifier::Verdict;

/// Result type alias which returns `HandshakeError`
pub type HandshakeResult<T> = std::result::Result<T, HandshakeError>;

/// Errors which abort a party. A signature which does not verify is not one
/// of them, see [`Verdict`].
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// The domain setup could not be generated or loaded
    #[error("setup failed: {0}")]
    Setup(#[from] SetupError),

    /// Bytes received from the peer are not a valid encoding
    #[error("could not decode the received {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: EncodingError,
    },

    #[error("signature scheme error: {0}")]
    Signing(#[from] BLSError),

    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("{0} did not complete: {1}")]
    Join(&'static str, tokio::task::JoinError),
}

impl HandshakeError {
    /// True when the party failed only because its peer went away.
    pub fn is_peer_gone(&self) -> bool {
        matches!(self, HandshakeError::Channel(ChannelError::Closed))
    }
}
