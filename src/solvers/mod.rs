//! SAT-based solvers for the semantics of Abstract Dialectical Frameworks.
//!
//! Each semantics is computed by a generate-and-verify loop: a
//! [CandidateGenerator] produces candidate interpretations from an incremental
//! solver state while asserting refinement clauses against it, and a chain of
//! [Verifier] objects discards the candidates which do not satisfy the target
//! semantics.

mod admissible_verifier;
pub use admissible_verifier::AdmissibleVerifier;

mod complete_verifier;
pub use complete_verifier::CompleteVerifier;

mod ground_generator;
pub use ground_generator::GroundGenerator;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod interpretation_iterator;
pub use interpretation_iterator::InterpretationIterator;

mod model_generator;
pub use model_generator::ModelGenerator;

mod model_semantics_solver;
pub use model_semantics_solver::ModelSemanticsSolver;

mod model_verifier;
pub use model_verifier::ModelVerifier;

mod specs;
pub use specs::CandidateGenerator;
pub use specs::Verifier;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod stable_verifier;
pub use stable_verifier::StableVerifier;
