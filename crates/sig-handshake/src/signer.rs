use crate::{
    channel::RendezvousSender, message::SignedMessage, setup::SharedSetup, HandshakeResult,
};
use bls_sig::{
    group::PairingCurve,
    sig::{BLSError, G2Scheme, Scheme},
};
use rand::RngCore;
use tracing::{debug, info, instrument};

/// Runs the signing party.
///
/// Generates a keypair under the shared generator, publishes the public key
/// on `keys`, then signs `message` and publishes it with its signature on
/// `messages`. The private key never leaves this function.
#[instrument(level = "info", name = "signer", skip_all)]
pub async fn run_signer<C, R>(
    setup: SharedSetup,
    message: String,
    messages: RendezvousSender<SignedMessage>,
    keys: RendezvousSender<Vec<u8>>,
    mut rng: R,
) -> HandshakeResult<()>
where
    C: PairingCurve,
    R: RngCore + Send,
{
    let (ctx, g) = setup.load::<C>()?;

    let private = ctx.random_scalar(&mut rng);
    let public = G2Scheme::<C>::derive_public(&g, &private);
    info!(%public, "generated keypair");

    let public = ctx.encode(&public).map_err(BLSError::SerializationError)?;
    keys.send(public).await?;
    debug!("public key delivered");

    let signature = G2Scheme::<C>::sign_element(&private, message.as_bytes())?;
    info!(%message, %signature, "signed message");

    let signature = ctx.encode(&signature).map_err(BLSError::SerializationError)?;
    messages.send(SignedMessage { message, signature }).await?;
    debug!("signed message delivered");

    Ok(())
}
