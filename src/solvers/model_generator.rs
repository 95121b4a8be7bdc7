use super::CandidateGenerator;
use crate::adf::{AdfFramework, Interpretation, LabelType};
use crate::encodings::{
    PropositionalMapping, RefineUnequalSatEncoding, SatEncoding, TwoValuedModelSatEncoding,
};
use crate::sat::{ClauseSink, SatSolverState};
use anyhow::Result;
use log::debug;
use std::rc::Rc;

/// A generator producing the two-valued models of an ADF.
///
/// The generator encodes the two-valued model constraints once, then maps each witness
/// of the solver state to an interpretation and refines the state so that the same
/// model cannot be generated again.
pub struct ModelGenerator<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    mapping: Rc<PropositionalMapping>,
    exhausted: bool,
}

impl<'a, T> ModelGenerator<'a, T>
where
    T: LabelType,
{
    /// Builds a new generator for the two-valued models of the given framework.
    pub fn new(adf: &'a AdfFramework<T>, mapping: Rc<PropositionalMapping>) -> Self {
        Self {
            adf,
            mapping,
            exhausted: false,
        }
    }
}

impl<T> CandidateGenerator<T> for ModelGenerator<'_, T>
where
    T: LabelType,
{
    fn prepare(&self, sink: &mut dyn ClauseSink) -> Result<()> {
        TwoValuedModelSatEncoding.encode(sink, self.adf, &self.mapping)
    }

    fn generate(&mut self, state: &mut SatSolverState) -> Result<Option<Interpretation>> {
        if self.exhausted {
            return Ok(None);
        }
        match state.witness(&self.mapping.argument_literals())? {
            Some(witness) => {
                let model = Interpretation::from_witness(&witness, &self.mapping);
                RefineUnequalSatEncoding::new(&model).encode(state, self.adf, &self.mapping)?;
                Ok(Some(model))
            }
            None => {
                debug!("model generation exhausted the solver state");
                self.exhausted = true;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet, TruthValue};
    use crate::sat::default_solver;
    use std::collections::HashSet;

    fn enumerate_models<T>(adf: &AdfFramework<T>) -> Vec<Interpretation>
    where
        T: LabelType,
    {
        let mapping = Rc::new(PropositionalMapping::new(adf));
        let mut generator = ModelGenerator::new(adf, Rc::clone(&mapping));
        let mut state = SatSolverState::new(default_solver());
        generator.prepare(&mut state).unwrap();
        let mut models = Vec::new();
        while let Some(model) = generator.generate(&mut state).unwrap() {
            models.push(model);
        }
        // the generator stays exhausted
        assert!(generator.generate(&mut state).unwrap().is_none());
        models
    }

    fn brute_force_models<T>(adf: &AdfFramework<T>) -> HashSet<Interpretation>
    where
        T: LabelType,
    {
        let n = adf.n_arguments();
        (0..1_usize << n)
            .filter_map(|bits| {
                let value_of = |id: usize| bits & (1 << id) != 0;
                if (0..n).all(|id| adf.condition_of_id(id).eval(&value_of) == value_of(id)) {
                    Some(Interpretation::from_values(
                        (0..n).map(|id| TruthValue::from_bool(value_of(id))).collect(),
                    ))
                } else {
                    None
                }
            })
            .collect()
    }

    fn check_generator_against_brute_force<T>(adf: &AdfFramework<T>)
    where
        T: LabelType,
    {
        let models = enumerate_models(adf);
        let distinct = models.iter().cloned().collect::<HashSet<Interpretation>>();
        assert_eq!(models.len(), distinct.len(), "a model was generated twice");
        assert_eq!(brute_force_models(adf), distinct);
    }

    #[test]
    fn test_models_of_mutual_exclusion() {
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
        let models = enumerate_models(&adf);
        assert_eq!(2, models.len());
        let expected = [
            Interpretation::from_values(vec![TruthValue::True, TruthValue::False]),
            Interpretation::from_values(vec![TruthValue::False, TruthValue::True]),
        ];
        assert!(expected.iter().all(|m| models.contains(m)));
        check_generator_against_brute_force(&adf);
    }

    #[test]
    fn test_models_of_self_supporting_argument() {
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(&"a", AcceptanceCondition::argument("a"))
            .unwrap();
        let models = enumerate_models(&adf);
        assert_eq!(2, models.len());
        check_generator_against_brute_force(&adf);
    }

    #[test]
    fn test_brute_force_cross_check() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(
            &"a",
            AcceptanceCondition::disjunction(vec![
                AcceptanceCondition::argument("b"),
                AcceptanceCondition::argument("c"),
            ]),
        )
        .unwrap();
        adf.set_acceptance_condition(
            &"b",
            AcceptanceCondition::implication(
                AcceptanceCondition::argument("c"),
                AcceptanceCondition::argument("a"),
            ),
        )
        .unwrap();
        adf.set_acceptance_condition(
            &"c",
            AcceptanceCondition::negation(AcceptanceCondition::argument("b")),
        )
        .unwrap();
        check_generator_against_brute_force(&adf);
    }

    #[test]
    fn test_empty_adf_has_one_model() {
        let adf = AdfFramework::new_with_argument_set(ArgumentSet::new_with_labels(
            &[] as &[&'static str],
        ));
        let models = enumerate_models(&adf);
        assert_eq!(vec![Interpretation::from_values(vec![])], models);
    }
}
