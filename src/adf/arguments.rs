use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits allowing their use
/// in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// The id is the index of the argument in the set it belongs to.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an ADF.
///
/// An ADF vocabulary is built once and never changes afterwards; this set thus has no
/// removal operation.
#[derive(Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument is assigned an id equal to its index in the provided slice of labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Example
    ///
    /// ```
    /// # use rustadf::adf::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels
            .iter()
            .for_each(|l| argument_set.new_argument(l.clone()));
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, no argument is added.
    pub fn new_argument(&mut self, label: T) {
        self.label_to_id.entry(label.clone()).or_insert_with(|| {
            self.arguments.push(Argument {
                id: self.arguments.len(),
                label,
            });
            self.arguments.len() - 1
        });
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated with an argument label.
    ///
    /// If no such label exists, an error is returned.
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .ok_or_else(|| anyhow!("no such argument: {}", label))
            .map(|i| *i)
    }

    /// Returns the argument associated with an argument label.
    ///
    /// # Example
    ///
    /// ```
    /// # use rustadf::adf::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator over the arguments, by increasing id.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.iter().enumerate() {
            assert_eq!(i, a.id());
            assert_eq!(arg_labels[i], *a.label());
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_new_repeated_labels() {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        assert_eq!(2, args.len());
    }

    #[test]
    fn test_get_argument() {
        let labels = vec!["a", "b", "c"];
        let arguments = ArgumentSet::new_with_labels(&labels);
        assert!(arguments.get_argument(&"a").is_ok());
        assert!(arguments.get_argument(&"d").is_err());
    }

    #[test]
    fn test_get_argument_index() {
        let labels = vec!["a", "b", "c"];
        let arguments = ArgumentSet::new_with_labels(&labels);
        assert_eq!(0, arguments.get_argument_index(&"a").unwrap());
        assert_eq!(2, arguments.get_argument_index(&"c").unwrap());
        assert!(arguments.get_argument_index(&"d").is_err());
    }

    #[test]
    fn test_add_arguments() {
        let arg_labels = vec!["a".to_string(), "b".to_string()];
        let mut args = ArgumentSet::new_with_labels(&arg_labels);
        args.new_argument("c".to_string());
        args.new_argument("c".to_string());
        assert_eq!(3, args.len());
        assert_eq!(2, args.get_argument(&"c".to_string()).unwrap().id())
    }
}
