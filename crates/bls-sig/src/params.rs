//! Domain parameters shared by every party of a run, and the pairing context
//! each party derives from them.
//!
//! Parameters are generated once, turned into text with `to_string()` and
//! handed by value to whoever needs them. A party rebuilds its own
//! [`PairingContext`] with [`derive_pairing`]; two parties holding the same
//! text obtain equivalent contexts.
use crate::group::{decode, encode, Element, EncodingError, PairingCurve};
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use std::{fmt, marker::PhantomData, str::FromStr};
use thiserror::Error;
use tracing::debug;

/// Errors raised while generating, parsing or applying domain parameters.
/// None of them can be recovered from within a run.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A requested size was zero.
    #[error("invalid parameter size: {0} must be positive")]
    InvalidSize(&'static str),

    /// The engine can not provide groups of the requested sizes.
    #[error("{curve} cannot satisfy {what} of {requested} bits (supports {supported})")]
    Infeasible {
        curve: &'static str,
        what: &'static str,
        requested: usize,
        supported: usize,
    },

    /// The textual parameters could not be parsed.
    #[error("malformed domain parameters: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The parameters describe another pairing engine.
    #[error("parameters are for curve {found}, expected {expected}")]
    CurveMismatch {
        expected: &'static str,
        found: String,
    },

    /// The parameters name the right engine with different sizes.
    #[error("parameters for {0} do not match the engine sizes")]
    ParameterMismatch(&'static str),

    /// The shared generator could not be decoded or is the identity.
    #[error("invalid shared generator: {0}")]
    InvalidGenerator(String),
}

/// Description of the pairing-friendly curve used by a run, along with the
/// sizes which were requested when generating it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParameters {
    /// Name of the pairing engine
    pub curve: String,
    /// Bit length of the prime order of the groups
    pub order_bits: usize,
    /// Bit length of the base field
    pub base_field_bits: usize,
    /// Embedding degree, GT is a subgroup of the degree-k extension field
    pub embedding_degree: usize,
    /// Minimum group order size which was requested
    pub security_level: usize,
    /// Base field size of the degree-2 construction which was requested
    pub field_size: usize,
}

impl fmt::Display for DomainParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

impl FromStr for DomainParameters {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Generates the domain parameters for the pairing engine `C`.
///
/// `security_level` is the minimum bit length of the group order.
/// `field_size` is the base field size of a degree-2 pairing, so the engine
/// must offer a target field of at least `2 * field_size` bits.
pub fn generate_parameters<C: PairingCurve>(
    security_level: usize,
    field_size: usize,
) -> Result<DomainParameters, SetupError> {
    if security_level == 0 {
        return Err(SetupError::InvalidSize("security level"));
    }
    if field_size == 0 {
        return Err(SetupError::InvalidSize("field size"));
    }

    if security_level > C::ORDER_BITS {
        return Err(SetupError::Infeasible {
            curve: C::NAME,
            what: "a group order",
            requested: security_level,
            supported: C::ORDER_BITS,
        });
    }

    let target_bits = C::BASE_FIELD_BITS * C::EMBEDDING_DEGREE;
    if 2 * field_size > target_bits {
        return Err(SetupError::Infeasible {
            curve: C::NAME,
            what: "a target field",
            requested: 2 * field_size,
            supported: target_bits,
        });
    }

    let params = DomainParameters {
        curve: C::NAME.to_string(),
        order_bits: C::ORDER_BITS,
        base_field_bits: C::BASE_FIELD_BITS,
        embedding_degree: C::EMBEDDING_DEGREE,
        security_level,
        field_size,
    };
    debug!(%params, "generated domain parameters");
    Ok(params)
}

/// Rebuilds the pairing context described by the parameters. Fails if the
/// parameters were generated for another engine.
pub fn derive_pairing<C: PairingCurve>(
    params: &DomainParameters,
) -> Result<PairingContext<C>, SetupError> {
    if params.curve != C::NAME {
        return Err(SetupError::CurveMismatch {
            expected: C::NAME,
            found: params.curve.clone(),
        });
    }
    if params.order_bits != C::ORDER_BITS
        || params.base_field_bits != C::BASE_FIELD_BITS
        || params.embedding_degree != C::EMBEDDING_DEGREE
        || params.security_level > C::ORDER_BITS
    {
        return Err(SetupError::ParameterMismatch(C::NAME));
    }

    Ok(PairingContext {
        params: params.clone(),
        m: PhantomData,
    })
}

/// Samples the generator of G2 shared by both parties. The identity is never
/// returned.
pub fn sample_generator<C: PairingCurve, R: RngCore>(
    _ctx: &PairingContext<C>,
    rng: &mut R,
) -> C::G2 {
    loop {
        let g = C::G2::rand(rng);
        if g != C::G2::zero() {
            return g;
        }
    }
}

/// Operations of the engine `C` under a given set of domain parameters.
#[derive(Clone, Debug)]
pub struct PairingContext<C: PairingCurve> {
    params: DomainParameters,
    m: PhantomData<C>,
}

impl<C: PairingCurve> PairingContext<C> {
    /// Parses the textual parameters and derives the context from them.
    pub fn from_params_str(params: &str) -> Result<Self, SetupError> {
        let params: DomainParameters = params.parse()?;
        derive_pairing(&params)
    }

    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// Samples a uniformly random scalar.
    pub fn random_scalar<R: RngCore>(&self, rng: &mut R) -> C::Scalar {
        C::Scalar::rand(rng)
    }

    pub fn encode<E: Element>(&self, e: &E) -> Result<Vec<u8>, EncodingError> {
        encode(e)
    }

    pub fn decode_scalar(&self, bytes: &[u8]) -> Result<C::Scalar, EncodingError> {
        decode("scalar", bytes)
    }

    pub fn decode_g1(&self, bytes: &[u8]) -> Result<C::G1, EncodingError> {
        decode("G1 element", bytes)
    }

    pub fn decode_g2(&self, bytes: &[u8]) -> Result<C::G2, EncodingError> {
        decode("G2 element", bytes)
    }

    pub fn decode_gt(&self, bytes: &[u8]) -> Result<C::GT, EncodingError> {
        decode("GT element", bytes)
    }

    /// Decodes the shared generator. A generator which does not decode, or
    /// decodes to the identity, makes the whole setup unusable.
    pub fn generator_from_bytes(&self, bytes: &[u8]) -> Result<C::G2, SetupError> {
        let g = self
            .decode_g2(bytes)
            .map_err(|e| SetupError::InvalidGenerator(e.to_string()))?;
        if g == C::G2::zero() {
            return Err(SetupError::InvalidGenerator("identity element".to_string()));
        }
        Ok(g)
    }
}

#[cfg(all(test, feature = "bls12_381"))]
mod tests {
    use super::*;
    use crate::curve::bls12381::PairingCurve as PCurve;
    use rand::prelude::*;

    #[test]
    fn reference_sizes() {
        let params = generate_parameters::<PCurve>(160, 512).unwrap();
        assert_eq!(params.curve, "bls12_381");
        assert_eq!(params.security_level, 160);
        assert_eq!(params.field_size, 512);
    }

    #[test]
    fn text_roundtrip() {
        let params = generate_parameters::<PCurve>(160, 512).unwrap();
        let shared = params.to_string();
        let parsed: DomainParameters = shared.parse().unwrap();
        assert_eq!(params, parsed);

        let ctx = PairingContext::<PCurve>::from_params_str(&shared).unwrap();
        assert_eq!(ctx.params(), &params);
    }

    #[test]
    fn infeasible_sizes() {
        match generate_parameters::<PCurve>(300, 512) {
            Err(SetupError::Infeasible { requested, .. }) => assert_eq!(requested, 300),
            r => panic!("unexpected result {:?}", r),
        }
        match generate_parameters::<PCurve>(160, 4096) {
            Err(SetupError::Infeasible { requested, .. }) => assert_eq!(requested, 8192),
            r => panic!("unexpected result {:?}", r),
        }
        assert!(matches!(
            generate_parameters::<PCurve>(0, 512),
            Err(SetupError::InvalidSize(_))
        ));
        assert!(matches!(
            generate_parameters::<PCurve>(160, 0),
            Err(SetupError::InvalidSize(_))
        ));
    }

    #[test]
    fn malformed_text() {
        let res = PairingContext::<PCurve>::from_params_str("type a q 8780710799663312522437781984754049815806883199414208211028653399266475630880222957078625179422662221423155858769582317459277713367317481324925129998224791");
        assert!(matches!(res, Err(SetupError::Malformed(_))));
    }

    #[test]
    fn foreign_parameters() {
        let mut params = generate_parameters::<PCurve>(160, 512).unwrap();
        params.curve = "bn254".to_string();
        assert!(matches!(
            derive_pairing::<PCurve>(&params),
            Err(SetupError::CurveMismatch { .. })
        ));

        let mut params = generate_parameters::<PCurve>(160, 512).unwrap();
        params.order_bits = 160;
        assert!(matches!(
            derive_pairing::<PCurve>(&params),
            Err(SetupError::ParameterMismatch(_))
        ));
    }

    #[test]
    fn context_encoding_roundtrip() {
        let params = generate_parameters::<PCurve>(160, 512).unwrap();
        let ctx = derive_pairing::<PCurve>(&params).unwrap();
        let rng = &mut thread_rng();

        let x = ctx.random_scalar(rng);
        assert_eq!(ctx.decode_scalar(&ctx.encode(&x).unwrap()).unwrap(), x);

        let g = sample_generator(&ctx, rng);
        assert_eq!(ctx.decode_g2(&ctx.encode(&g).unwrap()).unwrap(), g);

        let h = <PCurve as PairingCurve>::G1::rand(rng);
        assert_eq!(ctx.decode_g1(&ctx.encode(&h).unwrap()).unwrap(), h);

        let t = PCurve::pair(&h, &g);
        assert_eq!(ctx.decode_gt(&ctx.encode(&t).unwrap()).unwrap(), t);

        match ctx.decode_gt(&ctx.encode(&h).unwrap()) {
            Err(EncodingError::Deserialize { kind, .. }) => assert_eq!(kind, "GT element"),
            r => panic!("unexpected result {:?}", r),
        }
    }

    #[test]
    fn generator_bytes() {
        let params = generate_parameters::<PCurve>(160, 512).unwrap();
        let ctx = derive_pairing::<PCurve>(&params).unwrap();
        let g = sample_generator(&ctx, &mut thread_rng());
        let bytes = ctx.encode(&g).unwrap();
        assert_eq!(ctx.generator_from_bytes(&bytes).unwrap(), g);

        let zero = ctx.encode(&<PCurve as PairingCurve>::G2::zero()).unwrap();
        assert!(matches!(
            ctx.generator_from_bytes(&zero),
            Err(SetupError::InvalidGenerator(_))
        ));
        assert!(matches!(
            ctx.generator_from_bytes(&bytes[..4]),
            Err(SetupError::InvalidGenerator(_))
        ));
    }
}
