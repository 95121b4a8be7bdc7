use super::{Argument, LabelType};
use crate::encodings::PropositionalMapping;
use crate::sat::Literal;
use std::fmt::Display;

/// A truth value of three-valued logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TruthValue {
    /// The argument is accepted.
    True,
    /// The argument is rejected.
    False,
    /// The argument is neither accepted nor rejected.
    Undecided,
}

impl TruthValue {
    /// Returns the two-valued truth value corresponding to a Boolean.
    pub fn from_bool(value: bool) -> Self {
        if value {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }

    /// Returns `true` iff this value is not [TruthValue::Undecided].
    pub fn is_decided(&self) -> bool {
        !matches!(self, TruthValue::Undecided)
    }
}

impl Display for TruthValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruthValue::True => write!(f, "t"),
            TruthValue::False => write!(f, "f"),
            TruthValue::Undecided => write!(f, "u"),
        }
    }
}

/// A three-valued truth assignment over the arguments of an ADF.
///
/// Interpretations are immutable value objects; two interpretations are equal iff they
/// assign the same value to every argument.
/// An interpretation with no undecided argument is said to be two-valued.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interpretation {
    values: Vec<TruthValue>,
}

impl Interpretation {
    /// Builds an interpretation from the values assigned to the arguments, given by
    /// increasing argument id.
    pub fn from_values(values: Vec<TruthValue>) -> Self {
        Interpretation { values }
    }

    /// Builds the interpretation in which all the arguments are undecided.
    pub fn all_undecided(n_arguments: usize) -> Self {
        Interpretation {
            values: vec![TruthValue::Undecided; n_arguments],
        }
    }

    /// Builds an interpretation from a SAT witness restricted to argument literals.
    ///
    /// An argument is made true if its positive literal belongs to the witness, false if
    /// its negative literal does, and left undecided otherwise.
    /// Literals that do not correspond to an argument of the mapping are ignored.
    pub fn from_witness(witness: &[Literal], mapping: &PropositionalMapping) -> Self {
        let mut values = vec![TruthValue::Undecided; mapping.n_arguments()];
        for literal in witness {
            if let Some(id) = mapping.argument_id_of_var(literal.var()) {
                values[id] = TruthValue::from_bool(isize::from(*literal) > 0);
            }
        }
        Interpretation { values }
    }

    /// Returns the truth value assigned to an argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument id is out of the range of this interpretation.
    pub fn value_of<T>(&self, argument: &Argument<T>) -> TruthValue
    where
        T: LabelType,
    {
        self.values[argument.id()]
    }

    pub(crate) fn value_of_id(&self, id: usize) -> TruthValue {
        self.values[id]
    }

    /// Returns `true` iff no argument is undecided.
    pub fn is_two_valued(&self) -> bool {
        self.values.iter().all(TruthValue::is_decided)
    }

    /// Returns the number of arguments this interpretation assigns a value to.
    pub fn n_arguments(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the assigned truth values, by increasing argument id.
    pub fn iter_values(&self) -> impl Iterator<Item = TruthValue> + '_ {
        self.values.iter().copied()
    }
}
