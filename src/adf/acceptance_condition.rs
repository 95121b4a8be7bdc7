use super::{ArgumentSet, LabelType};
use anyhow::Result;
use std::collections::BTreeSet;

/// A propositional formula over argument labels, used as the acceptance condition of an argument.
///
/// Conditions are built over the labels of the arguments they refer to and are resolved
/// against the argument set of an [`AdfFramework`](crate::adf::AdfFramework) when they are
/// installed in it.
/// At this point, a label which does not belong to the framework's vocabulary triggers an error.
///
/// # Example
///
/// ```
/// # use rustadf::adf::AcceptanceCondition;
/// // accepted iff b is accepted and c is not
/// let condition = AcceptanceCondition::conjunction(vec![
///     AcceptanceCondition::argument("b"),
///     AcceptanceCondition::negation(AcceptanceCondition::argument("c")),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptanceCondition<T>
where
    T: LabelType,
{
    /// The condition which always holds.
    Tautology,
    /// The condition which never holds.
    Contradiction,
    /// The condition given by the truth value of a single argument.
    Argument(T),
    /// The negation of a condition.
    Negation(Box<AcceptanceCondition<T>>),
    /// The conjunction of any number of conditions; an empty conjunction always holds.
    Conjunction(Vec<AcceptanceCondition<T>>),
    /// The disjunction of any number of conditions; an empty disjunction never holds.
    Disjunction(Vec<AcceptanceCondition<T>>),
    /// The material implication between two conditions.
    Implication(Box<AcceptanceCondition<T>>, Box<AcceptanceCondition<T>>),
    /// The equivalence between two conditions.
    Equivalence(Box<AcceptanceCondition<T>>, Box<AcceptanceCondition<T>>),
}

impl<T> AcceptanceCondition<T>
where
    T: LabelType,
{
    /// Builds the condition given by the truth value of the argument with the given label.
    pub fn argument(label: T) -> Self {
        AcceptanceCondition::Argument(label)
    }

    /// Builds the negation of a condition.
    pub fn negation(condition: AcceptanceCondition<T>) -> Self {
        AcceptanceCondition::Negation(Box::new(condition))
    }

    /// Builds the conjunction of a set of conditions.
    pub fn conjunction(conditions: Vec<AcceptanceCondition<T>>) -> Self {
        AcceptanceCondition::Conjunction(conditions)
    }

    /// Builds the disjunction of a set of conditions.
    pub fn disjunction(conditions: Vec<AcceptanceCondition<T>>) -> Self {
        AcceptanceCondition::Disjunction(conditions)
    }

    /// Builds the implication from `premise` to `conclusion`.
    pub fn implication(premise: AcceptanceCondition<T>, conclusion: AcceptanceCondition<T>) -> Self {
        AcceptanceCondition::Implication(Box::new(premise), Box::new(conclusion))
    }

    /// Builds the equivalence between two conditions.
    pub fn equivalence(first: AcceptanceCondition<T>, second: AcceptanceCondition<T>) -> Self {
        AcceptanceCondition::Equivalence(Box::new(first), Box::new(second))
    }

    pub(crate) fn resolve(&self, arguments: &ArgumentSet<T>) -> Result<Condition> {
        match self {
            AcceptanceCondition::Tautology => Ok(Condition::Tautology),
            AcceptanceCondition::Contradiction => Ok(Condition::Contradiction),
            AcceptanceCondition::Argument(label) => {
                Ok(Condition::Argument(arguments.get_argument_index(label)?))
            }
            AcceptanceCondition::Negation(c) => {
                Ok(Condition::Negation(Box::new(c.resolve(arguments)?)))
            }
            AcceptanceCondition::Conjunction(cs) => Ok(Condition::Conjunction(
                cs.iter()
                    .map(|c| c.resolve(arguments))
                    .collect::<Result<Vec<Condition>>>()?,
            )),
            AcceptanceCondition::Disjunction(cs) => Ok(Condition::Disjunction(
                cs.iter()
                    .map(|c| c.resolve(arguments))
                    .collect::<Result<Vec<Condition>>>()?,
            )),
            AcceptanceCondition::Implication(p, q) => Ok(Condition::Implication(
                Box::new(p.resolve(arguments)?),
                Box::new(q.resolve(arguments)?),
            )),
            AcceptanceCondition::Equivalence(p, q) => Ok(Condition::Equivalence(
                Box::new(p.resolve(arguments)?),
                Box::new(q.resolve(arguments)?),
            )),
        }
    }
}

// The id-based form of an acceptance condition, as stored in a framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Condition {
    Tautology,
    Contradiction,
    Argument(usize),
    Negation(Box<Condition>),
    Conjunction(Vec<Condition>),
    Disjunction(Vec<Condition>),
    Implication(Box<Condition>, Box<Condition>),
    Equivalence(Box<Condition>, Box<Condition>),
}

impl Condition {
    // Evaluates the condition under a two-valued assignment of the arguments.
    pub(crate) fn eval(&self, value_of: &dyn Fn(usize) -> bool) -> bool {
        match self {
            Condition::Tautology => true,
            Condition::Contradiction => false,
            Condition::Argument(id) => value_of(*id),
            Condition::Negation(c) => !c.eval(value_of),
            Condition::Conjunction(cs) => cs.iter().all(|c| c.eval(value_of)),
            Condition::Disjunction(cs) => cs.iter().any(|c| c.eval(value_of)),
            Condition::Implication(p, q) => !p.eval(value_of) || q.eval(value_of),
            Condition::Equivalence(p, q) => p.eval(value_of) == q.eval(value_of),
        }
    }

    pub(crate) fn parent_ids(&self, acc: &mut BTreeSet<usize>) {
        match self {
            Condition::Tautology | Condition::Contradiction => {}
            Condition::Argument(id) => {
                acc.insert(*id);
            }
            Condition::Negation(c) => c.parent_ids(acc),
            Condition::Conjunction(cs) | Condition::Disjunction(cs) => {
                cs.iter().for_each(|c| c.parent_ids(acc))
            }
            Condition::Implication(p, q) | Condition::Equivalence(p, q) => {
                p.parent_ids(acc);
                q.parent_ids(acc);
            }
        }
    }

    // An upper bound on the number of auxiliary SAT variables needed to encode this condition.
    pub(crate) fn n_connectives(&self) -> usize {
        match self {
            Condition::Tautology | Condition::Contradiction | Condition::Argument(_) => 0,
            Condition::Negation(c) => c.n_connectives(),
            Condition::Conjunction(cs) | Condition::Disjunction(cs) => {
                1 + cs.iter().map(Condition::n_connectives).sum::<usize>()
            }
            Condition::Implication(p, q) | Condition::Equivalence(p, q) => {
                1 + p.n_connectives() + q.n_connectives()
            }
        }
    }

    // Rewrites the condition for a reduct: arguments mapped to None are replaced by a
    // contradiction, the other ones are renumbered according to the map.
    pub(crate) fn reduce(&self, id_map: &[Option<usize>]) -> Condition {
        match self {
            Condition::Tautology => Condition::Tautology,
            Condition::Contradiction => Condition::Contradiction,
            Condition::Argument(id) => match id_map[*id] {
                Some(new_id) => Condition::Argument(new_id),
                None => Condition::Contradiction,
            },
            Condition::Negation(c) => Condition::Negation(Box::new(c.reduce(id_map))),
            Condition::Conjunction(cs) => {
                Condition::Conjunction(cs.iter().map(|c| c.reduce(id_map)).collect())
            }
            Condition::Disjunction(cs) => {
                Condition::Disjunction(cs.iter().map(|c| c.reduce(id_map)).collect())
            }
            Condition::Implication(p, q) => Condition::Implication(
                Box::new(p.reduce(id_map)),
                Box::new(q.reduce(id_map)),
            ),
            Condition::Equivalence(p, q) => Condition::Equivalence(
                Box::new(p.reduce(id_map)),
                Box::new(q.reduce(id_map)),
            ),
        }
    }
}
