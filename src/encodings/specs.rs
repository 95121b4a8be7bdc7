use super::PropositionalMapping;
use crate::adf::{AdfFramework, LabelType};
use crate::sat::ClauseSink;
use anyhow::Result;

/// The trait for encodings from ADF semantics to SAT.
///
/// An encoding is a pure function streaming clauses into a sink.
/// Since both solver states and clause vectors are sinks, an encoding can be applied
/// directly as a solver mutation or collected for inspection.
///
/// Encoding the same framework and mapping twice produces the same clause stream.
pub trait SatEncoding<T>
where
    T: LabelType,
{
    /// Encodes the underlying constraints into the sink.
    fn encode(
        &self,
        sink: &mut dyn ClauseSink,
        adf: &AdfFramework<T>,
        mapping: &PropositionalMapping,
    ) -> Result<()>;
}
