//! Wires the two parties together for a single run.
use crate::{
    channel::{rendezvous, RendezvousReceiver, RendezvousSender},
    config::HandshakeConfig,
    message::SignedMessage,
    setup::SharedSetup,
    signer::run_signer,
    verifier::{run_verifier, Verdict},
    HandshakeError, HandshakeResult,
};
use bls_sig::group::PairingCurve;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use tracing::{info, instrument, warn};

/// Generates the shared setup, runs the signer and the verifier concurrently
/// and waits for both of them.
pub async fn run<C: PairingCurve>(config: &HandshakeConfig) -> HandshakeResult<Verdict> {
    let setup = SharedSetup::generate::<C, _>(
        config.security_level,
        config.field_size,
        &mut thread_rng(),
    )?;
    run_with_setup::<C>(setup, config).await
}

/// Runs both parties over an existing setup.
#[instrument(level = "info", name = "coordinator", skip_all, fields(tamper = config.tamper))]
pub async fn run_with_setup<C: PairingCurve>(
    setup: SharedSetup,
    config: &HandshakeConfig,
) -> HandshakeResult<Verdict> {
    let (keys_tx, keys_rx) = rendezvous(config.timeout);
    let (messages_tx, mut messages_rx) = rendezvous(config.timeout);

    let relay = if config.tamper {
        let (relay_tx, relay_rx) = rendezvous(config.timeout);
        let relay = tokio::spawn(tamper_relay(messages_rx, relay_tx));
        messages_rx = relay_rx;
        Some(relay)
    } else {
        None
    };

    info!("starting signer and verifier");
    let signer = tokio::spawn(run_signer::<C, _>(
        setup.clone(),
        config.message.clone(),
        messages_tx,
        keys_tx,
        StdRng::from_entropy(),
    ));
    let verifier = tokio::spawn(run_verifier::<C>(setup, messages_rx, keys_rx));

    let (signer, verifier) = tokio::join!(signer, verifier);
    let signer = signer.map_err(|e| HandshakeError::Join("signer", e))?;
    let verifier = verifier.map_err(|e| HandshakeError::Join("verifier", e))?;

    if let Some(relay) = relay {
        match relay.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("tampering relay failed: {}", e),
            Err(e) => warn!("tampering relay did not complete: {}", e),
        }
    }

    match (signer, verifier) {
        (Ok(()), verifier) => verifier,
        (Err(e), Ok(_)) => Err(e),
        // a party which saw its peer leave reports the other one's failure
        (Err(s), Err(v)) => Err(if v.is_peer_gone() { s } else { v }),
    }
}

/// Forwards the signed message, flipping one byte of its signature.
async fn tamper_relay(
    mut from: RendezvousReceiver<SignedMessage>,
    to: RendezvousSender<SignedMessage>,
) -> HandshakeResult<()> {
    let mut msg = from.recv().await?;
    msg.tamper();
    to.send(msg).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls_sig::{
        curve::bls12381::{PairingCurve as PCurve, G2},
        group::{encode, Element},
        params::SetupError,
    };
    use std::time::Duration;

    #[tokio::test]
    async fn reference_run_verifies() {
        let verdict = run::<PCurve>(&HandshakeConfig::default()).await.unwrap();
        assert_eq!(verdict, Verdict::Verified);
        assert_eq!(
            verdict.to_string(),
            "Signature verified correctly - e(h,g^x)=e(sig,g)"
        );
    }

    #[tokio::test]
    async fn custom_message_verifies() {
        let config = HandshakeConfig {
            message: String::new(),
            ..Default::default()
        };
        assert!(run::<PCurve>(&config).await.unwrap().is_verified());
    }

    #[tokio::test]
    async fn tampered_signature_is_not_accepted() {
        let config = HandshakeConfig {
            tamper: true,
            ..Default::default()
        };
        // the flipped byte leaves a compressed point that does not decode
        match run::<PCurve>(&config).await {
            Err(HandshakeError::Decode { what, .. }) => assert_eq!(what, "signature"),
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[tokio::test]
    async fn infeasible_parameters_abort() {
        let config = HandshakeConfig {
            security_level: 1024,
            ..Default::default()
        };
        assert!(matches!(
            run::<PCurve>(&config).await,
            Err(HandshakeError::Setup(SetupError::Infeasible { .. }))
        ));
    }

    #[tokio::test]
    async fn invalid_generator_is_a_setup_error() {
        let mut setup = SharedSetup::generate::<PCurve, _>(160, 512, &mut thread_rng()).unwrap();
        setup.generator = encode(&G2::zero()).unwrap();
        let config = HandshakeConfig {
            timeout: Duration::from_millis(200),
            ..Default::default()
        };
        assert!(matches!(
            run_with_setup::<PCurve>(setup, &config).await,
            Err(HandshakeError::Setup(SetupError::InvalidGenerator(_)))
        ));
    }
}
