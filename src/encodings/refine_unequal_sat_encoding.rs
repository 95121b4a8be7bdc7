use super::{PropositionalMapping, SatEncoding};
use crate::adf::{AdfFramework, Interpretation, LabelType, TruthValue};
use crate::sat::{Clause, ClauseSink};
use anyhow::Result;

/// The encoding excluding a previously found model from future witnesses.
///
/// A single blocking clause is emitted: the disjunction of the flip literals of the
/// model, that is, the negative literal of every accepted argument and the positive
/// literal of every rejected one.
/// Asserting it guarantees the exact same two-valued assignment of the argument
/// variables can never satisfy the growing clause set again, which turns one-shot
/// solving into a duplicate-free enumeration.
pub struct RefineUnequalSatEncoding<'a> {
    interpretation: &'a Interpretation,
}

impl<'a> RefineUnequalSatEncoding<'a> {
    /// Builds the encoding refining away the provided interpretation.
    pub fn new(interpretation: &'a Interpretation) -> Self {
        Self { interpretation }
    }
}

impl<T> SatEncoding<T> for RefineUnequalSatEncoding<'_>
where
    T: LabelType,
{
    fn encode(
        &self,
        sink: &mut dyn ClauseSink,
        _adf: &AdfFramework<T>,
        mapping: &PropositionalMapping,
    ) -> Result<()> {
        let clause: Clause = (0..self.interpretation.n_arguments())
            .filter_map(|id| match self.interpretation.value_of_id(id) {
                TruthValue::True => Some(mapping.argument_literal_of_id(id).negate()),
                TruthValue::False => Some(mapping.argument_literal_of_id(id)),
                TruthValue::Undecided => None,
            })
            .collect();
        sink.add_clause(clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adf::{AcceptanceCondition, ArgumentSet};
    use crate::encodings::TwoValuedModelSatEncoding;
    use crate::sat::{default_solver, SatSolverState};

    #[test]
    fn test_refined_model_never_returned_again() {
        // a single self-supporting argument admits two models
        let arguments = ArgumentSet::new_with_labels(&["a"]);
        let mut adf = AdfFramework::new_with_argument_set(arguments);
        adf.set_acceptance_condition(&"a", AcceptanceCondition::argument("a"))
            .unwrap();
        let mapping = PropositionalMapping::new(&adf);
        let mut state = SatSolverState::new(default_solver());
        TwoValuedModelSatEncoding
            .encode(&mut state, &adf, &mapping)
            .unwrap();
        let first = Interpretation::from_witness(
            &state.witness(&mapping.argument_literals()).unwrap().unwrap(),
            &mapping,
        );
        RefineUnequalSatEncoding::new(&first)
            .encode(&mut state, &adf, &mapping)
            .unwrap();
        let second = Interpretation::from_witness(
            &state.witness(&mapping.argument_literals()).unwrap().unwrap(),
            &mapping,
        );
        assert_ne!(first, second);
        RefineUnequalSatEncoding::new(&second)
            .encode(&mut state, &adf, &mapping)
            .unwrap();
        assert!(state.witness(&mapping.argument_literals()).unwrap().is_none());
    }

    #[test]
    fn test_blocking_clause_shape() {
        let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
        let adf = AdfFramework::new_with_argument_set(arguments);
        let mapping = PropositionalMapping::new(&adf);
        let interpretation =
            Interpretation::from_values(vec![TruthValue::True, TruthValue::False]);
        let mut clauses: Vec<Clause> = Vec::new();
        RefineUnequalSatEncoding::new(&interpretation)
            .encode(&mut clauses, &adf, &mapping)
            .unwrap();
        assert_eq!(1, clauses.len());
        assert_eq!(
            vec![
                mapping.argument_literal_of_id(0).negate(),
                mapping.argument_literal_of_id(1)
            ],
            clauses[0]
        );
    }
}
