use crate::{
    channel::RendezvousReceiver, message::SignedMessage, setup::SharedSetup, HandshakeError,
    HandshakeResult,
};
use bls_sig::{group::PairingCurve, sig::G2Scheme};
use std::fmt;
use tracing::{debug, info, instrument};

/// Outcome of a verification. A rejected signature is a regular result, not
/// an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Verified,
    Rejected,
}

impl Verdict {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Verified
        } else {
            Verdict::Rejected
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Verified => f.write_str("Signature verified correctly - e(h,g^x)=e(sig,g)"),
            Verdict::Rejected => f.write_str("*BUG* Signature check failed *BUG*"),
        }
    }
}

/// Runs the verifying party.
///
/// Receives the signer's public key on `keys` and the signed message on
/// `messages`, recomputes the digest of the message and checks
/// `e(h, y) == e(sig, g)`. Received bytes which do not decode fail with
/// [`HandshakeError::Decode`].
#[instrument(level = "info", name = "verifier", skip_all)]
pub async fn run_verifier<C: PairingCurve>(
    setup: SharedSetup,
    mut messages: RendezvousReceiver<SignedMessage>,
    mut keys: RendezvousReceiver<Vec<u8>>,
) -> HandshakeResult<Verdict> {
    let (ctx, g) = setup.load::<C>()?;

    let public = keys.recv().await?;
    let public = ctx
        .decode_g2(&public)
        .map_err(|source| HandshakeError::Decode {
            what: "public key",
            source,
        })?;
    info!(%public, "received public key");

    let SignedMessage { message, signature } = messages.recv().await?;
    let signature = ctx
        .decode_g1(&signature)
        .map_err(|source| HandshakeError::Decode {
            what: "signature",
            source,
        })?;
    info!(%message, %signature, "received signed message");

    let verification =
        G2Scheme::<C>::verify_element(&public, &g, message.as_bytes(), &signature)?;
    debug!(
        digest_pairing = %verification.digest_pairing,
        signature_pairing = %verification.signature_pairing,
        "e(h, g^x) and e(sig, g)"
    );

    let verdict = Verdict::from(verification.is_valid());
    info!(%verdict);
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::rendezvous;
    use bls_sig::{
        curve::bls12381::PairingCurve as PCurve,
        group::encode,
        sig::{Scheme, SignatureScheme},
    };
    use rand::thread_rng;
    use std::time::Duration;

    type S = G2Scheme<PCurve>;

    const WAIT: Duration = Duration::from_secs(5);
    const MSG: &str = "Hello, Fantom Foundation!";

    // plays the signer side by hand so that each input can be altered
    async fn verify_with(
        setup: SharedSetup,
        public: Vec<u8>,
        signed: SignedMessage,
    ) -> HandshakeResult<Verdict> {
        let (keys_tx, keys_rx) = rendezvous(WAIT);
        let (messages_tx, messages_rx) = rendezvous(WAIT);
        let verifier = tokio::spawn(run_verifier::<PCurve>(setup, messages_rx, keys_rx));
        // the verifier may stop before reading the message
        if keys_tx.send(public).await.is_ok() {
            let _ = messages_tx.send(signed).await;
        }
        verifier.await.unwrap()
    }

    fn setup() -> SharedSetup {
        SharedSetup::generate::<PCurve, _>(160, 512, &mut thread_rng()).unwrap()
    }

    #[tokio::test]
    async fn verifies_valid_signature() {
        let setup = setup();
        let (_, g) = setup.load::<PCurve>().unwrap();
        let (private, public) = S::keypair(&g, &mut thread_rng());
        let signed = SignedMessage {
            message: MSG.to_string(),
            signature: S::sign(&private, MSG.as_bytes()).unwrap(),
        };
        let verdict = verify_with(setup, encode(&public).unwrap(), signed).await;
        assert_eq!(verdict.unwrap(), Verdict::Verified);
    }

    #[tokio::test]
    async fn rejects_other_key() {
        let setup = setup();
        let (_, g) = setup.load::<PCurve>().unwrap();
        let (private, _) = S::keypair(&g, &mut thread_rng());
        let (_, other_public) = S::keypair(&g, &mut thread_rng());
        let signed = SignedMessage {
            message: MSG.to_string(),
            signature: S::sign(&private, MSG.as_bytes()).unwrap(),
        };
        let verdict = verify_with(setup, encode(&other_public).unwrap(), signed).await;
        assert_eq!(verdict.unwrap(), Verdict::Rejected);
    }

    #[tokio::test]
    async fn rejects_other_message() {
        let setup = setup();
        let (_, g) = setup.load::<PCurve>().unwrap();
        let (private, public) = S::keypair(&g, &mut thread_rng());
        let signed = SignedMessage {
            message: "Hello, Fantom Foundation?".to_string(),
            signature: S::sign(&private, MSG.as_bytes()).unwrap(),
        };
        let verdict = verify_with(setup, encode(&public).unwrap(), signed).await;
        assert_eq!(verdict.unwrap(), Verdict::Rejected);
    }

    #[tokio::test]
    async fn malformed_public_key_is_a_decode_error() {
        let setup = setup();
        let signed = SignedMessage {
            message: MSG.to_string(),
            signature: vec![],
        };
        match verify_with(setup, vec![1, 2, 3], signed).await {
            Err(HandshakeError::Decode { what, .. }) => assert_eq!(what, "public key"),
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[tokio::test]
    async fn malformed_signature_is_a_decode_error() {
        let setup = setup();
        let (_, g) = setup.load::<PCurve>().unwrap();
        let (_, public) = S::keypair(&g, &mut thread_rng());
        let signed = SignedMessage {
            message: MSG.to_string(),
            signature: vec![0xff; 4],
        };
        match verify_with(setup, encode(&public).unwrap(), signed).await {
            Err(HandshakeError::Decode { what, .. }) => assert_eq!(what, "signature"),
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn verdict_strings() {
        assert_eq!(
            Verdict::Rejected.to_string(),
            "*BUG* Signature check failed *BUG*"
        );
        assert!(Verdict::from(true).is_verified());
        assert!(!Verdict::from(false).is_verified());
    }
}
