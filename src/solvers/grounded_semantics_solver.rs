use super::{GroundGenerator, InterpretationIterator};
use crate::adf::{AdfFramework, Interpretation, LabelType};
use crate::encodings::PropositionalMapping;
use crate::sat::{self, SatSolverFactoryFn};
use anyhow::{anyhow, Result};
use std::rc::Rc;

/// A SAT-based solver computing the grounded interpretation of an ADF.
///
/// Every ADF has exactly one grounded interpretation, so the enumeration this solver
/// offers always yields a single element, which
/// [compute_grounded_interpretation](GroundedSemanticsSolver::compute_grounded_interpretation)
/// returns directly.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    solver_factory: Rc<SatSolverFactoryFn>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new SAT-based solver for the grounded semantics.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(adf, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new SAT-based solver for the grounded semantics.
    ///
    /// The SAT solver in use is given through the solver factory.
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

    /// Starts the enumeration of the grounded interpretation.
    pub fn iter_interpretations(&self) -> Result<InterpretationIterator<'a, T>> {
        let generator = GroundGenerator::new(self.adf, Rc::clone(&self.mapping));
        InterpretationIterator::new((self.solver_factory)(), Box::new(generator), vec![])
    }

    /// Computes the grounded interpretation.
    pub fn compute_grounded_interpretation(&self) -> Result<Interpretation> {
        self.iter_interpretations()?
            .next()
            .transpose()?
            .ok_or_else(|| anyhow!("no grounded interpretation generated"))
    }
}
