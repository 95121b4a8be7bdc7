use super::{InterpretationIterator, ModelGenerator, StableVerifier, Verifier};
use crate::adf::{AdfFramework, Interpretation, LabelType};
use crate::encodings::PropositionalMapping;
use crate::sat::{self, SatSolverFactoryFn};
use anyhow::Result;
use std::rc::Rc;

/// A SAT-based solver computing the stable models of an ADF.
///
/// The enumeration chains the two-valued model generator with a stability verifier:
/// each generated model is kept iff the grounded interpretation of its reduct accepts
/// every argument the model accepts.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    solver_factory: Rc<SatSolverFactoryFn>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new SAT-based solver for the stable semantics.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(adf, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new SAT-based solver for the stable semantics.
    ///
    /// The SAT solver in use is given through the solver factory; both the generation
    /// and the verification states are built by it.
    pub fn new_with_sat_solver_factory(
        adf: &'a AdfFramework<T>,
        solver_factory: Rc<SatSolverFactoryFn>,
    ) -> Self {
        let mapping = Rc::new(PropositionalMapping::new(adf));
        Self {
            adf,
            mapping,
            solver_factory,
        }
    }

    /// Starts the enumeration of the stable models.
    ///
    /// Each call opens a fresh reasoning session; the returned sequence is lazy and
    /// cannot be restarted.
    pub fn iter_interpretations(&self) -> Result<InterpretationIterator<'a, T>> {
        let generator = ModelGenerator::new(self.adf, Rc::clone(&self.mapping));
        let verifier =
            StableVerifier::new_with_sat_solver_factory(self.adf, Rc::clone(&self.solver_factory));
        let verifiers: Vec<Box<dyn Verifier + 'a>> = vec![Box::new(verifier)];
        InterpretationIterator::new((self.solver_factory)(), Box::new(generator), verifiers)
    }

    /// Computes a single stable model, or [Option::None] if none exists.
    pub fn compute_one_interpretation(&self) -> Result<Option<Interpretation>> {
        self.iter_interpretations()?.next().transpose()
    }
}
