use super::{AcceptanceSatEncoding, PropositionalMapping, SatEncoding};
use crate::adf::{AdfFramework, LabelType};
use crate::sat::ClauseSink;
use anyhow::Result;

/// The encoding whose models are the two-valued models of an ADF.
///
/// On top of the acceptance variable definitions of [AcceptanceSatEncoding], this
/// encoding asserts for each argument the equivalence between its argument variable and
/// its acceptance variable.
/// A model of the resulting clause set, restricted to the argument variables, is thus
/// exactly a total assignment under which every argument carries the value of its own
/// acceptance condition.
#[derive(Default)]
pub struct TwoValuedModelSatEncoding;

impl<T> SatEncoding<T> for TwoValuedModelSatEncoding
where
    T: LabelType,
{
    fn encode(
        &self,
        sink: &mut dyn ClauseSink,
        adf: &AdfFramework<T>,
        mapping: &PropositionalMapping,
    ) -> Result<()> {
        AcceptanceSatEncoding.encode(sink, adf, mapping)?;
        for id in 0..adf.n_arguments() {
            let argument = mapping.argument_literal_of_id(id);
            let acceptance = mapping.acceptance_literal_of_id(id);
            sink.add_clause(vec![argument.negate(), acceptance])?;
            sink.add_clause(vec![argument, acceptance.negate()])?;
        }
        Ok(())
    }
}
