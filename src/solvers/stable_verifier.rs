use super::ground_generator::grounded_fixpoint;
use super::Verifier;
use crate::adf::{AdfFramework, ArgumentSet, Condition, Interpretation, LabelType, TruthValue};
use crate::encodings::{AcceptanceSatEncoding, PropositionalMapping, SatEncoding};
use crate::sat::{self, SatSolverFactoryFn, SatSolverState};
use anyhow::{anyhow, Result};
use std::rc::Rc;

/// A verifier for the stability of an interpretation.
///
/// A stable model is a two-valued model whose accepted arguments are exactly the ones
/// grounded in its reduct: the framework restricted to the accepted arguments, with the
/// rejected ones replaced by a contradiction inside the acceptance conditions.
/// The candidate passes iff the grounded interpretation of its reduct accepts every
/// remaining argument.
///
/// The grounded computation runs on a per-candidate private solver state, since the
/// reduct depends on the candidate.
pub struct StableVerifier<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    solver_factory: Rc<SatSolverFactoryFn>,
    prepared: bool,
    closed: bool,
}

impl<'a, T> StableVerifier<'a, T>
where
    T: LabelType,
{
    /// Builds a new verifier for the stable models of the given framework.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(adf, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new verifier for the stable models of the given framework.
    ///
    /// The SAT solver in use is given through the solver factory.
    pub fn new_with_sat_solver_factory(
        adf: &'a AdfFramework<T>,
        solver_factory: Rc<SatSolverFactoryFn>,
    ) -> Self {
        Self {
            adf,
            solver_factory,
            prepared: false,
            closed: false,
        }
    }

    fn reduct(&self, interpretation: &Interpretation) -> AdfFramework<T> {
        let n = self.adf.n_arguments();
        let mut id_map: Vec<Option<usize>> = vec![None; n];
        let mut labels = Vec::new();
        for id in 0..n {
            if interpretation.value_of_id(id) == TruthValue::True {
                id_map[id] = Some(labels.len());
                labels.push(self.adf.argument_set().get_argument_by_id(id).label().clone());
            }
        }
        let arguments = ArgumentSet::new_with_labels(&labels);
        let conditions: Vec<Condition> = (0..n)
            .filter(|id| id_map[*id].is_some())
            .map(|id| self.adf.condition_of_id(id).reduce(&id_map))
            .collect();
        AdfFramework::new_with_conditions(arguments, conditions)
    }
}

impl<T> Verifier for StableVerifier<'_, T>
where
    T: LabelType,
{
    fn prepare(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        self.prepared = true;
        Ok(())
    }

    fn verify(&mut self, interpretation: &Interpretation) -> Result<bool> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        if !self.prepared {
            return Err(anyhow!("verifier must be prepared before verifying"));
        }
        if !interpretation.is_two_valued() {
            return Ok(false);
        }
        let value_of = |id: usize| interpretation.value_of_id(id) == TruthValue::True;
        if (0..self.adf.n_arguments())
            .any(|id| self.adf.condition_of_id(id).eval(&value_of) != value_of(id))
        {
            return Ok(false);
        }
        let reduct = self.reduct(interpretation);
        let reduct_mapping = PropositionalMapping::new(&reduct);
        let mut state = SatSolverState::new((self.solver_factory)());
        let verified = AcceptanceSatEncoding
            .encode(&mut state, &reduct, &reduct_mapping)
            .and_then(|_| grounded_fixpoint(reduct.n_arguments(), &reduct_mapping, &mut state))
            .map(|grounded| grounded.iter_values().all(|v| v == TruthValue::True));
        state.close()?;
        verified
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier already closed"));
        }
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet};

    fn prepared_verifier<'a>(adf: &'a AdfFramework<&'static str>) -> StableVerifier<'a, &'static str> {
        let mut verifier = StableVerifier::new(adf);
        verifier.prepare().unwrap();
        verifier
    }

    #[test]
    fn test_self_support_is_not_stable() {
        // both total interpretations are models, only the rejecting one is stable
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(&"a", AcceptanceCondition::argument("a"))
            .unwrap();
        let mut verifier = prepared_verifier(&adf);
        assert!(verifier
            .verify(&Interpretation::from_values(vec![TruthValue::False]))
            .unwrap());
        assert!(!verifier
            .verify(&Interpretation::from_values(vec![TruthValue::True]))
            .unwrap());
    }

    #[test]
    fn test_stable_models_of_mutual_exclusion() {
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
        let mut verifier = prepared_verifier(&adf);
        assert!(verifier
            .verify(&Interpretation::from_values(vec![
                TruthValue::True,
                TruthValue::False
            ]))
            .unwrap());
        assert!(verifier
            .verify(&Interpretation::from_values(vec![
                TruthValue::False,
                TruthValue::True
            ]))
            .unwrap());
    }

    #[test]
    fn test_non_model_is_not_stable() {
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(&"a", AcceptanceCondition::Tautology)
            .unwrap();
        let mut verifier = prepared_verifier(&adf);
        assert!(!verifier
            .verify(&Interpretation::from_values(vec![TruthValue::False]))
            .unwrap());
        assert!(!verifier.verify(&Interpretation::all_undecided(1)).unwrap());
        assert!(verifier
            .verify(&Interpretation::from_values(vec![TruthValue::True]))
            .unwrap());
    }

    #[test]
    fn test_use_after_close() {
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let adf = AdfFramework::new_with_argument_set(arguments);
        let mut verifier = prepared_verifier(&adf);
        verifier.close().unwrap();
        assert!(verifier
            .verify(&Interpretation::from_values(vec![TruthValue::False]))
            .is_err());
        assert!(verifier.close().is_err());
    }
}
