use super::Verifier;
use crate::adf::{AdfFramework, Interpretation, LabelType, TruthValue};
use crate::encodings::{AcceptanceSatEncoding, PropositionalMapping, SatEncoding};
use crate::sat::{self, Clause, Literal, SatSolverFactoryFn, SatSolverState};
use anyhow::{anyhow, Result};
use std::rc::Rc;

/// A verifier for the admissibility of an interpretation.
///
/// An interpretation is admissible when every argument it decides keeps the decided
/// value under every two-valued completion of the interpretation: no completion may
/// make the condition of an accepted argument false, nor the condition of a rejected
/// argument true.
///
/// The check is a single refutation query on a private solver state holding the
/// acceptance variable definitions: the decided arguments are fixed through
/// assumptions, and a clause asserting that some decided argument's condition disagrees
/// with its value is activated through a fresh selector literal.
/// The candidate is admissible iff the query is unsatisfiable.
pub struct AdmissibleVerifier<'a, T>
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

impl<'a, T> AdmissibleVerifier<'a, T>
where
    T: LabelType,
{
    /// Builds a new verifier for the admissibility of interpretations of the given
    /// framework.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>, mapping: Rc<PropositionalMapping>) -> Self {
        Self::new_with_sat_solver_factory(adf, mapping, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new verifier for the admissibility of interpretations of the given
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

    fn fresh_selector(&mut self) -> Literal {
        let selector = Literal::from(self.next_free_var as isize);
        self.next_free_var += 1;
        selector
    }
}

impl<T> Verifier for AdmissibleVerifier<'_, T>
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
        let selector = self.fresh_selector();
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| anyhow!("verifier must be prepared before verifying"))?;
        refutes_decided_arguments(state, &self.mapping, interpretation, selector)
            .map(|refuted| !refuted)
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

// Checks that some two-valued completion of the interpretation makes the condition of a
// decided argument disagree with the decided value.
//
// The per-candidate clause is activated by assuming the selector and retired by a unit
// clause on its negation, so the state stays reusable for later candidates.
pub(crate) fn refutes_decided_arguments(
    state: &mut SatSolverState,
    mapping: &PropositionalMapping,
    interpretation: &Interpretation,
    selector: Literal,
) -> Result<bool> {
    let mut disagreement: Clause = vec![selector.negate()];
    for id in 0..interpretation.n_arguments() {
        match interpretation.value_of_id(id) {
            TruthValue::True => disagreement.push(mapping.acceptance_literal_of_id(id).negate()),
            TruthValue::False => disagreement.push(mapping.acceptance_literal_of_id(id)),
            TruthValue::Undecided => {}
        }
    }
    if disagreement.len() == 1 {
        // no decided argument, nothing to refute
        return Ok(false);
    }
    state.add(disagreement)?;
    let mut assumptions = mapping.decided_literals(interpretation);
    assumptions.push(selector);
    let refuted = state.witness_under_assumptions(&[], &assumptions)?.is_some();
    state.add(vec![selector.negate()])?;
    Ok(refuted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet};

    fn mutual_exclusion_adf() -> AdfFramework<&'static str> {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(
            &"a",
            AcceptanceCondition::negation(AcceptanceCondition::argument("b")),
        )
        .unwrap();
        adf.set_acceptance_condition(
            &"b",
            AcceptanceCondition::negation(AcceptanceCondition::argument("a")),
        )
        .unwrap();
        adf
    }

    fn prepared_verifier<'a>(adf: &'a AdfFramework<&'static str>) -> AdmissibleVerifier<'a, &'static str> {
        let mapping = Rc::new(PropositionalMapping::new(adf));
        let mut verifier = AdmissibleVerifier::new(adf, mapping);
        verifier.prepare().unwrap();
        verifier
    }

    #[test]
    fn test_admissible_interpretations_of_mutual_exclusion() {
        let adf = mutual_exclusion_adf();
        let mut verifier = prepared_verifier(&adf);
        let admissible = [
            Interpretation::all_undecided(2),
            Interpretation::from_values(vec![TruthValue::True, TruthValue::False]),
            Interpretation::from_values(vec![TruthValue::False, TruthValue::True]),
        ];
        for interpretation in &admissible {
            assert!(verifier.verify(interpretation).unwrap(), "{:?}", interpretation);
        }
        let not_admissible = [
            Interpretation::from_values(vec![TruthValue::True, TruthValue::Undecided]),
            Interpretation::from_values(vec![TruthValue::Undecided, TruthValue::False]),
            Interpretation::from_values(vec![TruthValue::True, TruthValue::True]),
        ];
        for interpretation in &not_admissible {
            assert!(!verifier.verify(interpretation).unwrap(), "{:?}", interpretation);
        }
    }

    #[test]
    fn test_verify_is_idempotent() {
        let adf = mutual_exclusion_adf();
        let mut verifier = prepared_verifier(&adf);
        let interpretation = Interpretation::from_values(vec![TruthValue::True, TruthValue::False]);
        let first = verifier.verify(&interpretation).unwrap();
        let second = verifier.verify(&interpretation).unwrap();
        assert_eq!(first, second);
        let rejected = Interpretation::from_values(vec![TruthValue::True, TruthValue::Undecided]);
        assert_eq!(
            verifier.verify(&rejected).unwrap(),
            verifier.verify(&rejected).unwrap()
        );
    }

    #[test]
    fn test_use_after_close() {
        let adf = mutual_exclusion_adf();
        let mut verifier = prepared_verifier(&adf);
        verifier.close().unwrap();
        assert!(verifier.verify(&Interpretation::all_undecided(2)).is_err());
        assert!(verifier.prepare().is_err());
        assert!(verifier.close().is_err());
    }

    #[test]
    fn test_verify_before_prepare() {
        let adf = mutual_exclusion_adf();
        let mapping = Rc::new(PropositionalMapping::new(&adf));
        let mut verifier = AdmissibleVerifier::new(&adf, mapping);
        assert!(verifier.verify(&Interpretation::all_undecided(2)).is_err());
    }
}
