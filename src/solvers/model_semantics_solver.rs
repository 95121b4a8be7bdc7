use super::{InterpretationIterator, ModelGenerator};
use crate::adf::{AdfFramework, Interpretation, LabelType};
use crate::encodings::PropositionalMapping;
use crate::sat::{self, SatSolverFactoryFn};
use anyhow::Result;
use std::rc::Rc;

/// A SAT-based solver computing the two-valued models of an ADF.
///
/// The two-valued models are the total interpretations assigning to every argument the
/// value of its own acceptance condition.
///
/// # Example
///
/// ```
/// # use rustadf::adf::{AcceptanceCondition, AdfFramework, ArgumentSet};
/// # use rustadf::solvers::ModelSemanticsSolver;
/// let arguments = ArgumentSet::new_with_labels(&["a"]);
/// let mut adf = AdfFramework::new_with_argument_set(arguments);
/// adf.set_acceptance_condition(&"a", AcceptanceCondition::argument("a")).unwrap();
/// let solver = ModelSemanticsSolver::new(&adf);
/// // the self-supporting argument may be accepted or rejected
/// assert_eq!(2, solver.iter_interpretations().unwrap().count());
/// ```
pub struct ModelSemanticsSolver<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    solver_factory: Rc<SatSolverFactoryFn>,
}

impl<'a, T> ModelSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new SAT-based solver for the two-valued model semantics.
    ///
    /// The underlying SAT solver is one returned by
    /// [default_solver](crate::sat::default_solver).
    pub fn new(adf: &'a AdfFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(adf, Rc::new(|| sat::default_solver()))
    }

    /// Builds a new SAT-based solver for the two-valued model semantics.
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

    /// Starts the enumeration of the two-valued models.
    ///
    /// Each call opens a fresh reasoning session; the returned sequence is lazy and
    /// cannot be restarted.
    pub fn iter_interpretations(&self) -> Result<InterpretationIterator<'a, T>> {
        let generator = ModelGenerator::new(self.adf, Rc::clone(&self.mapping));
        InterpretationIterator::new((self.solver_factory)(), Box::new(generator), vec![])
    }

    /// Computes a single two-valued model, or [Option::None] if none exists.
    pub fn compute_one_interpretation(&self) -> Result<Option<Interpretation>> {
        self.iter_interpretations()?.next().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet, TruthValue};
    use std::collections::HashSet;

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

    fn negation_cycle_adf() -> AdfFramework<&'static str> {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        for (arg, parent) in [("a", "b"), ("b", "c"), ("c", "a")] {
            adf.set_acceptance_condition(
                &arg,
                AcceptanceCondition::negation(AcceptanceCondition::argument(parent)),
            )
            .unwrap();
        }
        adf
    }

    macro_rules! test_model_enumeration {
        ($suffix:ident, $adf:expr, $expected:expr) => {
            paste::item! {
                #[test]
                fn [< test_models_of_ $suffix >]() {
                    let adf = $adf;
                    let solver = ModelSemanticsSolver::new(&adf);
                    let models = solver
                        .iter_interpretations()
                        .unwrap()
                        .collect::<Result<HashSet<Interpretation>>>()
                        .unwrap();
                    let expected = $expected
                        .into_iter()
                        .collect::<HashSet<Interpretation>>();
                    assert_eq!(expected, models);
                }
            }
        };
    }

    test_model_enumeration!(
        mutual_exclusion,
        mutual_exclusion_adf(),
        vec![
            Interpretation::from_values(vec![TruthValue::True, TruthValue::False]),
            Interpretation::from_values(vec![TruthValue::False, TruthValue::True]),
        ]
    );

    test_model_enumeration!(
        odd_negation_cycle,
        negation_cycle_adf(),
        Vec::<Interpretation>::new()
    );

    #[test]
    fn test_compute_one_interpretation() {
        let adf = mutual_exclusion_adf();
        let solver = ModelSemanticsSolver::new(&adf);
        let model = solver.compute_one_interpretation().unwrap().unwrap();
        assert!(model.is_two_valued());
        let a = adf.argument_set().get_argument(&"a").unwrap();
        let b = adf.argument_set().get_argument(&"b").unwrap();
        assert_ne!(model.value_of(a), model.value_of(b));
        let no_model_adf = negation_cycle_adf();
        let solver = ModelSemanticsSolver::new(&no_model_adf);
        assert!(solver.compute_one_interpretation().unwrap().is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let adf = mutual_exclusion_adf();
        let solver = ModelSemanticsSolver::new(&adf);
        let first = solver
            .iter_interpretations()
            .unwrap()
            .collect::<Result<HashSet<Interpretation>>>()
            .unwrap();
        let second = solver
            .iter_interpretations()
            .unwrap()
            .collect::<Result<HashSet<Interpretation>>>()
            .unwrap();
        assert_eq!(first, second);
    }
}
