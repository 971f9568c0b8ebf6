use crate::group::{Element, Point, Scalar};
use rand_core::RngCore;
use std::{error::Error, fmt::Debug};

/// The `Scheme` trait contains the basic information of the groups over
/// which the signing operations takes places and a way to create a valid key
/// pair.
///
/// Keys are always derived from an explicit generator which both the signer
/// and the verifier obtained from the shared setup, never from a fixed one.
pub trait Scheme: Debug {
    /// `Private` represents the field over which private keys are represented.
    type Private: Scalar<RHS = Self::Private>;
    /// `Public` represents the group over which the public keys are
    /// represented.
    type Public: Element<RHS = Self::Private>;
    /// `Signature` represents the group over which the signatures are reresented.
    type Signature: Point<RHS = Self::Private>;

    /// Returns `generator^private`.
    fn derive_public(generator: &Self::Public, private: &Self::Private) -> Self::Public {
        let mut public = generator.clone();
        public.mul(private);
        public
    }

    /// Returns a new fresh keypair usable by the scheme.
    fn keypair<R: RngCore>(
        generator: &Self::Public,
        rng: &mut R,
    ) -> (Self::Private, Self::Public) {
        let private = Self::Private::rand(rng);
        let public = Self::derive_public(generator, &private);
        (private, public)
    }
}

/// SignatureScheme is the trait that defines the operations of a signature
/// scheme, namely `sign` and `verify`.
///
/// ```
///  # #[cfg(feature = "bls12_381")]
///  # {
///  use rand::prelude::*;
///  use bls_sig::{sig::{SignatureScheme, Scheme, G2Scheme}, group::Element};
///  use bls_sig::curve::bls12381::{PairingCurve as PC, G2};
///
///  let msg = b"Hello, Fantom Foundation!";
///  let generator = G2::rand(&mut thread_rng());
///
///  let (private, public) = G2Scheme::<PC>::keypair(&generator, &mut thread_rng());
///  let signature = G2Scheme::<PC>::sign(&private, &msg[..]).unwrap();
///  let verification = G2Scheme::<PC>::verify(&public, &generator, &msg[..], &signature).unwrap();
///  assert!(verification.is_valid());
/// # }
/// ```
/// Note signature scheme handles the format of the signature itself.
/// A signature which does not verify is a regular outcome reported by
/// `verify`, the error type only covers inputs which could not be processed.
pub trait SignatureScheme: Scheme {
    type Error: Error;

    /// The outcome of a verification
    type Verification;

    fn sign(private: &Self::Private, msg: &[u8]) -> Result<Vec<u8>, Self::Error>;

    fn verify(
        public: &Self::Public,
        generator: &Self::Public,
        msg: &[u8],
        sig: &[u8],
    ) -> Result<Self::Verification, Self::Error>;
}
