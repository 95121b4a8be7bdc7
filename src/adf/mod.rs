//! Objects used to represent Abstract Dialectical Frameworks and their interpretations.

mod acceptance_condition;
pub use acceptance_condition::AcceptanceCondition;
pub(crate) use acceptance_condition::Condition;

mod adf_framework;
pub use adf_framework::AdfFramework;
pub use adf_framework::Link;
pub use adf_framework::LinkType;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;

mod interpretation;
pub use interpretation::Interpretation;
pub use interpretation::TruthValue;
