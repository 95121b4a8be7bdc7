use crate::adf::{AdfFramework, Argument, Interpretation, LabelType, TruthValue};
use crate::sat::{Literal, Variable};
use anyhow::{anyhow, Result};

/// The bijection between the arguments of an ADF and SAT literals.
///
/// The mapping assigns the variable `2 * (id + 1)` to the argument with id `id`, and
/// reserves the variable `2 * (id + 1) - 1` for the Tseitin root of its acceptance
/// condition.
/// Further auxiliary variables used to encode the connectives of the conditions are
/// allocated in per-argument blocks above `2 * n`, so that encoding a framework twice
/// yields the same variable numbering.
///
/// A mapping is built once per reasoning session and never changes afterwards; it can
/// be shared read-only between the components of the session.
pub struct PropositionalMapping {
    n_args: usize,
    aux_offsets: Vec<usize>,
    n_vars: usize,
}

impl PropositionalMapping {
    /// Builds the mapping for the given framework.
    pub fn new<T>(adf: &AdfFramework<T>) -> Self
    where
        T: LabelType,
    {
        let n_args = adf.n_arguments();
        let mut aux_offsets = Vec::with_capacity(n_args);
        let mut next = 2 * n_args + 1;
        for id in 0..n_args {
            aux_offsets.push(next);
            next += adf.condition_of_id(id).n_connectives();
        }
        Self {
            n_args,
            aux_offsets,
            n_vars: next - 1,
        }
    }

    /// Returns the positive literal associated with an argument.
    ///
    /// An error is returned if the argument does not belong to the mapped framework.
    pub fn literal<T>(&self, argument: &Argument<T>) -> Result<Literal>
    where
        T: LabelType,
    {
        if argument.id() >= self.n_args {
            return Err(anyhow!("no such argument: {}", argument.label()));
        }
        Ok(self.argument_literal_of_id(argument.id()))
    }

    /// Returns the positive literals of all the arguments, by increasing argument id.
    ///
    /// Auxiliary encoding variables are excluded; this is the literal set witness
    /// queries are restricted to when building interpretations.
    pub fn argument_literals(&self) -> Vec<Literal> {
        (0..self.n_args)
            .map(|id| self.argument_literal_of_id(id))
            .collect()
    }

    /// Returns the number of arguments known to this mapping.
    pub fn n_arguments(&self) -> usize {
        self.n_args
    }

    /// Returns the highest variable this mapping may hand out.
    pub fn n_vars(&self) -> usize {
        self.n_vars
    }

    pub(crate) fn argument_literal_of_id(&self, id: usize) -> Literal {
        Literal::from((2 * (id + 1)) as isize)
    }

    pub(crate) fn acceptance_literal_of_id(&self, id: usize) -> Literal {
        Literal::from((2 * (id + 1) - 1) as isize)
    }

    pub(crate) fn argument_id_of_var(&self, var: Variable) -> Option<usize> {
        let v = usize::from(var);
        if v % 2 == 0 && v <= 2 * self.n_args {
            Some(v / 2 - 1)
        } else {
            None
        }
    }

    pub(crate) fn first_aux_var_of_id(&self, id: usize) -> usize {
        self.aux_offsets[id]
    }

    // The literals fixing the decided arguments of an interpretation to their values.
    pub(crate) fn decided_literals(&self, interpretation: &Interpretation) -> Vec<Literal> {
        (0..self.n_args)
            .filter_map(|id| match interpretation.value_of_id(id) {
                TruthValue::True => Some(self.argument_literal_of_id(id)),
                TruthValue::False => Some(self.argument_literal_of_id(id).negate()),
                TruthValue::Undecided => None,
            })
            .collect()
    }
}
