//! SAT solver interfaces used by the ADF reasoning algorithms.

mod cadical_solver;
pub use cadical_solver::CadicalSolver;

mod ipasir_sat_solver;
pub use ipasir_sat_solver::IpasirSatSolver;

mod sat_solver;
pub(crate) use crate::clause;
pub use sat_solver::default_solver;
pub use sat_solver::Assignment;
pub use sat_solver::Clause;
pub use sat_solver::ClauseSink;
pub use sat_solver::Literal;
pub use sat_solver::SatSolver;
pub use sat_solver::SatSolverFactoryFn;
pub use sat_solver::SolvingResult;
pub use sat_solver::Variable;

mod solver_state;
pub use solver_state::SatSolverState;
