use crate::group::{decode, encode, hash_to_point, Element, EncodingError, PairingCurve};
use crate::sig::{Scheme, SignatureScheme};
use std::{fmt, marker::PhantomData};
use thiserror::Error;

/// BLSError are thrown out when using the BLS signature scheme.
#[derive(Debug, Error)]
pub enum BLSError {
    #[error("could not hash to curve")]
    HashingError,

    #[error("could not serialize: {0}")]
    SerializationError(#[source] EncodingError),

    /// The signature bytes are not the encoding of a group element. This is
    /// distinct from a well-formed signature which fails to verify.
    #[error("could not deserialize: {0}")]
    DeserializationError(#[source] EncodingError),
}

/// Both sides of the pairing equation checked during verification.
pub struct Verification<C: PairingCurve> {
    /// e(H(m), pub)
    pub digest_pairing: C::GT,
    /// e(sig, g)
    pub signature_pairing: C::GT,
}

impl<C: PairingCurve> Verification<C> {
    /// The signature is valid iff both pairings are equal.
    pub fn is_valid(&self) -> bool {
        self.digest_pairing == self.signature_pairing
    }
}

impl<C: PairingCurve> fmt::Debug for Verification<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verification")
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// G2Scheme implements the BLS signature scheme with G2 as private / public
/// keys and G1 as signature elements over the given pairing curve.
/// The message digest lives in G1 as well.
#[derive(Clone, Debug)]
pub struct G2Scheme<C: PairingCurve> {
    m: PhantomData<C>,
}

impl<C> Scheme for G2Scheme<C>
where
    C: PairingCurve,
{
    type Private = C::Scalar;
    type Public = C::G2;
    type Signature = C::G1;
}

impl<C> G2Scheme<C>
where
    C: PairingCurve,
{
    /// Returns H(m), the SHA-256 digest of the message mapped to G1.
    pub fn digest(msg: &[u8]) -> Result<C::G1, BLSError> {
        hash_to_point::<C::G1>(msg).map_err(|_| BLSError::HashingError)
    }

    /// Returns sig = H(m)^{private}.
    pub fn sign_element(private: &C::Scalar, msg: &[u8]) -> Result<C::G1, BLSError> {
        let mut h = Self::digest(msg)?;
        h.mul(private);
        Ok(h)
    }

    /// Evaluates e(H(m), pub) and e(sig, g) for an already decoded signature.
    pub fn verify_element(
        public: &C::G2,
        generator: &C::G2,
        msg: &[u8],
        sig: &C::G1,
    ) -> Result<Verification<C>, BLSError> {
        // the digest is always recomputed from the plaintext
        let h = Self::digest(msg)?;
        // e(H(m),g)^x == e(H(m)^x,g)
        Ok(Verification {
            digest_pairing: C::pair(&h, public),
            signature_pairing: C::pair(sig, generator),
        })
    }
}

impl<C> SignatureScheme for G2Scheme<C>
where
    C: PairingCurve,
{
    type Error = BLSError;
    type Verification = Verification<C>;

    fn sign(private: &Self::Private, msg: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let sig = Self::sign_element(private, msg)?;
        encode(&sig).map_err(BLSError::SerializationError)
    }

    /// Verifies the signature by the provided public key
    fn verify(
        public: &Self::Public,
        generator: &Self::Public,
        msg: &[u8],
        sig_bytes: &[u8],
    ) -> Result<Self::Verification, Self::Error> {
        let sig: C::G1 =
            decode("signature", sig_bytes).map_err(BLSError::DeserializationError)?;
        Self::verify_element(public, generator, msg, &sig)
    }
}
