use crate::adf::{Interpretation, LabelType};
use crate::sat::{ClauseSink, SatSolverState};
use anyhow::Result;

/// A trait for the objects producing candidate interpretations from a solver state.
///
/// A generator never produces the same candidate twice within a session: each generated
/// candidate is refined away from the solver state before being returned.
/// Once the state has no further witness, the generator is exhausted and keeps
/// returning [Option::None]; this is the normal termination of an enumeration, not a
/// failure.
/// The order in which candidates are produced depends on the underlying solver and must
/// not be relied upon.
pub trait CandidateGenerator<T>
where
    T: LabelType,
{
    /// Emits the encodings needed before any solve call into the sink.
    ///
    /// This must be invoked exactly once, before the first call to
    /// [generate](CandidateGenerator::generate), with a sink backed by the solver state
    /// the candidates will be generated from.
    fn prepare(&self, sink: &mut dyn ClauseSink) -> Result<()>;

    /// Produces the next candidate interpretation, or [Option::None] if no more exists.
    fn generate(&mut self, state: &mut SatSolverState) -> Result<Option<Interpretation>>;
}

/// A trait for the objects checking a semantic property of an interpretation, like
/// admissibility.
///
/// A verifier decides its property against the framework itself, independently of the
/// SAT encoding the candidate was generated from.
/// Verification is idempotent: verifying the same interpretation twice returns the same
/// result.
pub trait Verifier {
    /// Performs one-time initializations.
    ///
    /// This must be called before the first [verify](Verifier::verify) call.
    fn prepare(&mut self) -> Result<()>;

    /// Decides whether the interpretation satisfies the underlying property.
    fn verify(&mut self, interpretation: &Interpretation) -> Result<bool>;

    /// Releases the resources owned by this verifier.
    ///
    /// Any operation invoked after this call fails, including a second close.
    fn close(&mut self) -> Result<()>;
}
