use bls_sig::{
    group::PairingCurve,
    params::{derive_pairing, generate_parameters, sample_generator, PairingContext, SetupError},
};
use rand::RngCore;
use tracing::info;

/// The by-value snapshot of the domain setup handed to each party: the
/// textual domain parameters and the encoded generator of G2. Parties never
/// share the decoded values, each rebuilds its own copy with [`load`].
///
/// [`load`]: SharedSetup::load
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedSetup {
    pub params: String,
    pub generator: Vec<u8>,
}

impl SharedSetup {
    /// Generates the parameters and samples the generator, once per run.
    pub fn generate<C, R>(
        security_level: usize,
        field_size: usize,
        rng: &mut R,
    ) -> Result<Self, SetupError>
    where
        C: PairingCurve,
        R: RngCore,
    {
        let params = generate_parameters::<C>(security_level, field_size)?;
        let ctx = derive_pairing::<C>(&params)?;
        let g = sample_generator(&ctx, rng);
        info!(generator = %g, "sampled shared generator");

        let generator = ctx
            .encode(&g)
            .map_err(|e| SetupError::InvalidGenerator(e.to_string()))?;
        Ok(Self {
            params: params.to_string(),
            generator,
        })
    }

    /// Rebuilds the pairing context and the generator from their encodings.
    pub fn load<C: PairingCurve>(&self) -> Result<(PairingContext<C>, C::G2), SetupError> {
        let ctx = PairingContext::<C>::from_params_str(&self.params)?;
        let g = ctx.generator_from_bytes(&self.generator)?;
        Ok((ctx, g))
    }
}
