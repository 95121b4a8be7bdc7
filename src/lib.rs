//! RustADF is a SAT-based reasoner for Abstract Dialectical Frameworks.
//!
//! An Abstract Dialectical Framework (ADF) is a directed graph of arguments in which
//! each argument carries an acceptance condition, that is, a propositional formula
//! over the arguments it depends on.
//! This crate computes ADF semantics (two-valued models, grounded and stable
//! interpretations, admissibility and completeness checks) by repeatedly querying
//! an incremental SAT solver through a generate-and-verify loop.
//!
//! # Example
//!
//! ```
//! use rustadf::adf::{AcceptanceCondition, AdfFramework, ArgumentSet};
//! use rustadf::solvers::ModelSemanticsSolver;
//!
//! // a and b exclude each other
//! let arguments = ArgumentSet::new_with_labels(&["a", "b"]);
//! let mut adf = AdfFramework::new_with_argument_set(arguments);
//! adf.set_acceptance_condition(
//!     &"a",
//!     AcceptanceCondition::negation(AcceptanceCondition::argument("b")),
//! )
//! .unwrap();
//! adf.set_acceptance_condition(
//!     &"b",
//!     AcceptanceCondition::negation(AcceptanceCondition::argument("a")),
//! )
//! .unwrap();
//! let solver = ModelSemanticsSolver::new(&adf);
//! let models = solver
//!     .iter_interpretations()
//!     .unwrap()
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(2, models.len());
//! ```

#![warn(missing_docs)]

pub mod adf;

pub mod encodings;

pub mod sat;

pub mod solvers;
