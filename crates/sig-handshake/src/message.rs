/// What the signer publishes on the message channel: the plaintext message
/// and the encoded signature over it. The digest is not part of it, the
/// verifier recomputes it from `message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedMessage {
    pub message: String,
    pub signature: Vec<u8>,
}

impl SignedMessage {
    /// Flips one byte of the signature, simulating a corrupting transport.
    pub fn tamper(&mut self) {
        if let Some(b) = self.signature.last_mut() {
            *b ^= 0x01;
        }
    }
}
