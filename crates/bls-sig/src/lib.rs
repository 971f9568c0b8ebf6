//! # BLS Signatures over a Pairing Engine
//!
//! This crate provides BLS signatures with public keys on G2 and message
//! digests and signatures on G1, verified with the pairing equality
//! `e(H(m), g^x) == e(H(m)^x, g)`.
//!
//! The generator `g` is not fixed by the curve: it is sampled once as part of
//! the domain setup and shared with every party, together with the textual
//! [domain parameters](params).
//!
//! ```rust
//! # #[cfg(feature = "bls12_381")]
//! # {
//! use bls_sig::{
//!     curve::bls12381::PairingCurve as PC,
//!     params::{derive_pairing, generate_parameters, sample_generator},
//!     sig::{G2Scheme, Scheme, SignatureScheme},
//! };
//!
//! let rng = &mut rand::thread_rng();
//! let params = generate_parameters::<PC>(160, 512).unwrap();
//! let ctx = derive_pairing::<PC>(&params).unwrap();
//! let g = sample_generator(&ctx, rng);
//!
//! let (private, public) = G2Scheme::<PC>::keypair(&g, rng);
//! let msg = b"hello";
//! let sig = G2Scheme::<PC>::sign(&private, &msg[..]).unwrap();
//! let verification = G2Scheme::<PC>::verify(&public, &g, &msg[..], &sig).unwrap();
//! assert!(verification.is_valid());
//! # }
//! ```
//!
//! ### Supporting a new curve
//!
//! Curves are implemented in the [`curve`] module. In order to support a new curve,
//! the trait [`PairingCurve`](group::PairingCurve) must be implemented for it. This
//! in turn requires that you define the pairing-friendly curve's `Scalar` and `G_T`
//! fields, its G1 and G2 groups and implement the `Scalar`, `Element` and `Point`
//! traits for them.

/// Curve implementations for the traits defined in the [`group`](group/index.html) module.
pub mod curve;

/// Definitions of generic traits with scalars of prime fields and points on elliptic curves.
pub mod group;

/// Domain parameters and the pairing context derived from them.
pub mod params;

/// BLS Signature implementation.
pub mod sig;

