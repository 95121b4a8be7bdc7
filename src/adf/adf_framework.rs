use super::{AcceptanceCondition, Argument, ArgumentSet, Condition, LabelType};
use anyhow::Result;
use std::collections::BTreeSet;

/// The type of a dependency link between two arguments.
///
/// The type describes how the truth value of the link's source argument may change the
/// evaluation of the target's acceptance condition.
/// Classifying links is not the job of this crate; links derived from acceptance
/// conditions are registered as [LinkType::Dependent].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkType {
    /// The source may only help the target's condition to hold.
    Supporting,
    /// The source may only prevent the target's condition from holding.
    Attacking,
    /// The source may both help and prevent the target's condition.
    Dependent,
    /// The source never changes the evaluation of the target's condition.
    Redundant,
}

/// A dependency link between two arguments.
///
/// Links are built by [`AdfFramework`] objects when acceptance conditions are installed.
pub struct Link<'a, T>(&'a Argument<T>, &'a Argument<T>, LinkType)
where
    T: LabelType;

impl<'a, T> Link<'a, T>
where
    T: LabelType,
{
    /// Returns the source of the link, that is, the argument the target depends on.
    pub fn from(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the target of the link.
    pub fn to(&self) -> &'a Argument<T> {
        self.1
    }

    /// Returns the type of the link.
    pub fn link_type(&self) -> LinkType {
        self.2
    }
}

/// An Abstract Dialectical Framework.
///
/// An ADF is given by a set of arguments and one acceptance condition per argument.
/// The vocabulary is fixed at construction time; acceptance conditions default to
/// [`AcceptanceCondition::Contradiction`] until they are set.
///
/// # Example
///
/// ```
/// # use rustadf::adf::{AcceptanceCondition, AdfFramework, ArgumentSet};
/// let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
/// let mut adf = AdfFramework::new_with_argument_set(arguments);
/// adf.set_acceptance_condition(&"a", AcceptanceCondition::Tautology).unwrap();
/// adf.set_acceptance_condition(&"b", AcceptanceCondition::argument("a")).unwrap();
/// assert_eq!(1, adf.iter_links().count());
/// ```
pub struct AdfFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    conditions: Vec<Condition>,
    links: Vec<(usize, usize, LinkType)>,
}

impl<T> AdfFramework<T>
where
    T: LabelType,
{
    /// Builds an ADF given its set of arguments.
    ///
    /// Every acceptance condition is initially a contradiction.
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let conditions = (0..arguments.len()).map(|_| Condition::Contradiction).collect();
        AdfFramework {
            arguments,
            conditions,
            links: vec![],
        }
    }

    pub(crate) fn new_with_conditions(arguments: ArgumentSet<T>, conditions: Vec<Condition>) -> Self {
        debug_assert_eq!(arguments.len(), conditions.len());
        let mut adf = AdfFramework {
            arguments,
            conditions: vec![],
            links: vec![],
        };
        for (id, condition) in conditions.into_iter().enumerate() {
            adf.register_links(id, &condition);
            adf.conditions.push(condition);
        }
        adf
    }

    /// Sets the acceptance condition of the argument with the given label.
    ///
    /// The condition is resolved against the vocabulary of this framework; an error is
    /// returned if the label or any label occurring in the condition is not the one of a
    /// known argument.
    /// The dependency links of the argument are derived again from the new condition.
    pub fn set_acceptance_condition(
        &mut self,
        label: &T,
        condition: AcceptanceCondition<T>,
    ) -> Result<()> {
        let id = self.arguments.get_argument_index(label)?;
        let resolved = condition.resolve(&self.arguments)?;
        self.links.retain(|l| l.1 != id);
        self.register_links(id, &resolved);
        self.conditions[id] = resolved;
        Ok(())
    }

    fn register_links(&mut self, id: usize, condition: &Condition) {
        let mut parents = BTreeSet::new();
        condition.parent_ids(&mut parents);
        parents
            .into_iter()
            .for_each(|p| self.links.push((p, id, LinkType::Dependent)));
    }

    /// Returns the set of arguments of this framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns an iterator over the dependency links of this framework.
    pub fn iter_links(&self) -> impl Iterator<Item = Link<T>> + '_ {
        self.links.iter().map(|(from, to, link_type)| {
            Link(
                self.arguments.get_argument_by_id(*from),
                self.arguments.get_argument_by_id(*to),
                *link_type,
            )
        })
    }

    pub(crate) fn condition_of_id(&self, id: usize) -> &Condition {
        &self.conditions[id]
    }
}
