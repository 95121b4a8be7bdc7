use super::{Assignment, Clause, Literal, SatSolver, SolvingResult};
use ipasir_loading::IpasirSolverWrapper;

/// A wrapper for solvers that implement the IPASIR interface.
///
/// Any solver loaded this way can replace the default one in the reasoning algorithms;
/// the reasoner logic is oblivious to the underlying implementation.
pub struct IpasirSatSolver {
    solver: IpasirSolverWrapper,
    n_vars: i32,
}

impl IpasirSatSolver {
    /// Builds a new [`IpasirSatSolver`] given the underlying solver.
    pub fn new(solver: IpasirSolverWrapper) -> Self {
        Self { solver, n_vars: 0 }
    }
}

impl SatSolver for IpasirSatSolver {
    fn add_clause(&mut self, cl: Clause) {
        for l in cl {
            let i32_lit = isize::from(l) as i32;
            self.solver.ipasir_add(i32_lit).unwrap();
            self.n_vars = i32::max(self.n_vars, i32_lit.abs());
        }
        self.solver.ipasir_add(0).unwrap();
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        for l in assumptions {
            let i32_lit = isize::from(*l) as i32;
            self.solver.ipasir_assume(i32_lit).unwrap();
            self.n_vars = i32::max(self.n_vars, i32_lit.abs());
        }
        match self.solver.ipasir_solve().unwrap() {
            Some(true) => {
                let assignment = Assignment::new(
                    (1..=self.n_vars)
                        .map(|i| self.solver.ipasir_val(i).unwrap())
                        .collect(),
                );
                SolvingResult::Satisfiable(assignment)
            }
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        }
    }

    fn n_vars(&self) -> usize {
        self.n_vars as usize
    }
}
