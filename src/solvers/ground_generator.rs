use super::CandidateGenerator;
use crate::adf::{AdfFramework, Interpretation, LabelType, TruthValue};
use crate::encodings::{AcceptanceSatEncoding, PropositionalMapping, SatEncoding};
use crate::sat::{ClauseSink, Literal, SatSolverState};
use anyhow::Result;
use log::debug;
use std::rc::Rc;

/// A generator producing the unique grounded interpretation of an ADF.
///
/// The grounded interpretation is the least fixpoint of the characteristic operator,
/// computed by iterated assumption-based SAT queries: an undecided argument becomes
/// accepted when its condition holds under every two-valued completion of the current
/// interpretation, and rejected when it holds under none.
/// The generator reports exhaustion after this single interpretation.
pub struct GroundGenerator<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    exhausted: bool,
}

impl<'a, T> GroundGenerator<'a, T>
where
    T: LabelType,
{
    /// Builds a new generator for the grounded interpretation of the given framework.
    pub fn new(adf: &'a AdfFramework<T>, mapping: Rc<PropositionalMapping>) -> Self {
        Self {
            adf,
            mapping,
            exhausted: false,
        }
    }
}

impl<T> CandidateGenerator<T> for GroundGenerator<'_, T>
where
    T: LabelType,
{
    fn prepare(&self, sink: &mut dyn ClauseSink) -> Result<()> {
        AcceptanceSatEncoding.encode(sink, self.adf, &self.mapping)
    }

    fn generate(&mut self, state: &mut SatSolverState) -> Result<Option<Interpretation>> {
        if self.exhausted {
            return Ok(None);
        }
        self.exhausted = true;
        grounded_fixpoint(self.adf.n_arguments(), &self.mapping, state).map(Some)
    }
}

// Computes the least fixpoint of the characteristic operator on a state holding the
// acceptance variable definitions of the framework.
//
// The state is only queried under assumptions; no clause is asserted, so it can be
// reused afterwards.
pub(crate) fn grounded_fixpoint(
    n_arguments: usize,
    mapping: &PropositionalMapping,
    state: &mut SatSolverState,
) -> Result<Interpretation> {
    let mut values = vec![TruthValue::Undecided; n_arguments];
    let mut n_rounds = 0;
    loop {
        n_rounds += 1;
        let mut changed = false;
        let fixes = mapping.decided_literals(&Interpretation::from_values(values.clone()));
        for id in 0..n_arguments {
            if values[id].is_decided() {
                continue;
            }
            let acceptance = mapping.acceptance_literal_of_id(id);
            if always_evaluates_to(state, &fixes, acceptance)? {
                values[id] = TruthValue::True;
                changed = true;
            } else if always_evaluates_to(state, &fixes, acceptance.negate())? {
                values[id] = TruthValue::False;
                changed = true;
            }
        }
        if !changed {
            debug!("grounded fixpoint reached after {} rounds", n_rounds);
            return Ok(Interpretation::from_values(values));
        }
    }
}

// Checks that a literal holds under every completion of the fixed arguments.
fn always_evaluates_to(
    state: &mut SatSolverState,
    fixes: &[Literal],
    literal: Literal,
) -> Result<bool> {
    let mut assumptions = Vec::with_capacity(fixes.len() + 1);
    assumptions.extend_from_slice(fixes);
    assumptions.push(literal.negate());
    Ok(state.witness_under_assumptions(&[], &assumptions)?.is_none())
}
