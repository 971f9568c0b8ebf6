//! Traits for operating on Groups and Elliptic Curves.
//!
//! These traits are the capability set the signature protocol consumes from a
//! pairing engine: sampling, exponentiation, pairing, hash-to-group, equality
//! and byte encoding. Group operations are written in additive notation, so
//! "exponentiation" `g^x` of the multiplicative literature is `g.mul(&x)` here.

use rand_core::RngCore;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::{Debug, Display};
use thiserror::Error;

/// Element represents an element of a group with the additive notation
/// which is also equipped with a multiplication transformation.
/// Two implementations are for Scalar which forms a ring so RHS is the same
/// and Point which can be multiplied by a scalar of its prime field.
pub trait Element:
    Clone + Display + Debug + Eq + Serialize + for<'a> Deserialize<'a> + PartialEq + Send + Sync
{
    /// The right-hand-side argument for multiplication
    type RHS;

    /// Returns the zero element of the group
    fn new() -> Self;

    /// Returns the one element of the group
    fn one() -> Self;

    /// Adds the RHS  element to the LHS element in place
    fn add(&mut self, s2: &Self);

    /// Multiplies the LHS element by the RHS element in place
    fn mul(&mut self, mul: &Self::RHS);

    /// Samples a random element using the provided RNG
    fn rand<R: RngCore>(rng: &mut R) -> Self;

    /// Returns the zero element of the group
    fn zero() -> Self {
        Self::new()
    }
}

/// Scalar can be multiplied by only a Scalar, no other elements.
pub trait Scalar: Element {
    fn set_int(&mut self, i: u64);
}

/// Basic point functionality that can be multiplied by a scalar
pub trait Point: Element {
    /// Error which may occur while mapping to the group
    type Error: Debug;

    /// Maps the provided data to a group element
    fn map(&mut self, data: &[u8]) -> Result<(), <Self as Point>::Error>;
}

/// A curve equipped with a bilinear pairing operation.
///
/// Besides the groups themselves, an engine describes its own sizes so that
/// domain parameters can be checked against what it is able to provide.
pub trait PairingCurve: Debug + Send + Sync + 'static {
    /// Name written into the domain parameters
    const NAME: &'static str;

    /// Bit length of the prime order of G1, G2 and GT
    const ORDER_BITS: usize;

    /// Bit length of the base field modulus
    const BASE_FIELD_BITS: usize;

    /// Embedding degree of the curve, GT lives in the degree-k extension
    const EMBEDDING_DEGREE: usize;

    type Scalar: Scalar<RHS = Self::Scalar>;

    type G1: Point<RHS = Self::Scalar>;

    type G2: Element<RHS = Self::Scalar>;

    type GT: Element;

    /// Performs a pairing operation between the 2 group elements
    fn pair(a: &Self::G1, b: &Self::G2) -> Self::GT;
}

/// Error raised when an element can not be turned into or recovered from its
/// byte encoding.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("could not serialize: {0}")]
    Serialize(#[source] bincode::Error),

    #[error("could not deserialize {kind}: {source}")]
    Deserialize {
        kind: &'static str,
        #[source]
        source: bincode::Error,
    },
}

/// Returns the byte encoding of the element.
pub fn encode<E: Serialize>(element: &E) -> Result<Vec<u8>, EncodingError> {
    bincode::serialize(element).map_err(EncodingError::Serialize)
}

/// Decodes an element from its byte encoding. `kind` names the expected
/// element in the returned error.
pub fn decode<E: DeserializeOwned>(kind: &'static str, bytes: &[u8]) -> Result<E, EncodingError> {
    bincode::deserialize(bytes).map_err(|source| EncodingError::Deserialize { kind, source })
}

/// Hashes the message with SHA-256 and maps the digest into the group.
/// Both the signer and the verifier derive the digest this way, it is never
/// transmitted.
pub fn hash_to_point<P: Point>(msg: &[u8]) -> Result<P, <P as Point>::Error> {
    let digest = Sha256::digest(msg);
    let mut h = P::new();
    h.map(digest.as_slice())?;
    Ok(h)
}
