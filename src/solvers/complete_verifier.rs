use super::admissible_verifier::refutes_decided_arguments;
use super::Verifier;
use crate::adf::{AdfFramework, Interpretation, LabelType, TruthValue};
use crate::encodings::{AcceptanceSatEncoding, PropositionalMapping, SatEncoding};
use crate::sat::{self, Literal, SatSolverFactoryFn, SatSolverState};
use anyhow::{anyhow, Result};
use std::rc::Rc;

/// A verifier for the completeness of an interpretation.
///
/// An interpretation is complete when it decides exactly the arguments the
/// characteristic operator decides: decided arguments must keep their value under every
/// two-valued completion (admissibility), and no undecided argument may have a
/// condition which evaluates the same way under all completions.
pub struct CompleteVerifier<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    solver_factory: Rc<SatSolverFactoryFn>,
    state: Option<SatSolverState>,
    next_free_var: usize,
    closed: bool,
}

impl<'a, T> CompleteVerifier<'a, T>
where
    T: LabelType,
{
    /// Builds a new verifier for the completeness of interpretations of the given
    /// framework.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>, mapping: Rc<PropositionalMapping>) -> Self {
        Self::new_with_sat_solver_factory(adf, mapping, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new verifier for the completeness of interpretations of the given
    /// framework.
    ///
    /// The SAT solver in use is given through the solver factory.
    pub fn new_with_sat_solver_factory(
        adf: &'a AdfFramework<T>,
        mapping: Rc<PropositionalMapping>,
        solver_factory: Rc<SatSolverFactoryFn>,
    ) -> Self {
        let next_free_var = mapping.n_vars() + 1;
        Self {
            adf,
            mapping,
            solver_factory,
            state: None,
            next_free_var,
            closed: false,
        }
    }
}

impl<T> Verifier for CompleteVerifier<'_, T>
where
    T: LabelType,
{
    fn prepare(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        let mut state = SatSolverState::new((self.solver_factory)());
        AcceptanceSatEncoding.encode(&mut state, self.adf, &self.mapping)?;
        self.state = Some(state);
        Ok(())
    }

    fn verify(&mut self, interpretation: &Interpretation) -> Result<bool> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        let selector = Literal::from(self.next_free_var as isize);
        self.next_free_var += 1;
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| anyhow!("verifier must be prepared before verifying"))?;
        if refutes_decided_arguments(state, &self.mapping, interpretation, selector)? {
            return Ok(false);
        }
        let fixes = self.mapping.decided_literals(interpretation);
        for id in 0..interpretation.n_arguments() {
            if interpretation.value_of_id(id) != TruthValue::Undecided {
                continue;
            }
            let acceptance = self.mapping.acceptance_literal_of_id(id);
            for polarity in [acceptance, acceptance.negate()] {
                let mut assumptions = fixes.clone();
                assumptions.push(polarity);
                if state.witness_under_assumptions(&[], &assumptions)?.is_none() {
                    // the condition is forced, the argument cannot stay undecided
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier already closed"));
        }
        self.closed = true;
        match self.state.take() {
            Some(mut state) => state.close(),
            None => Ok(()),
        }
    }
}
