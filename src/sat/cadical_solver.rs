use super::{Assignment, Clause, Literal, SatSolver, SolvingResult};
use cadical::Solver as CadicalCSolver;

/// A wrapper around the Cadical SAT solver.
#[derive(Default)]
pub struct CadicalSolver {
    solver: CadicalCSolver,
}

impl SatSolver for CadicalSolver {
    fn add_clause(&mut self, cl: Clause) {
        self.solver
            .add_clause(cl.into_iter().map(|l| isize::from(l) as i32))
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        match self
            .solver
            .solve_with(assumptions.iter().map(|l| isize::from(*l) as i32))
        {
            Some(true) => {
                let assignment = Assignment::new(
                    (1..=self.solver.max_variable())
                        .map(|i| self.solver.value(i))
                        .collect(),
                );
                SolvingResult::Satisfiable(assignment)
            }
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        }
    }

    fn n_vars(&self) -> usize {
        self.solver.max_variable() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::{clause, Variable};

    #[test]
    fn test_sat() {
        let mut s = CadicalSolver::default();
        s.add_clause(clause![-1, 2]);
        match s.solve() {
            SolvingResult::Satisfiable(assignment) => {
                assert!(
                    assignment.value_of(Variable::from(1_usize)) == Some(false)
                        || assignment.value_of(Variable::from(2_usize)) == Some(true)
                )
            }
            _ => panic!("expected a model"),
        }
    }

    #[test]
    fn test_unsat() {
        let mut s = CadicalSolver::default();
        s.add_clause(clause![-1, 2]);
        s.add_clause(clause![-1, -2]);
        s.add_clause(clause![1]);
        assert_eq!(SolvingResult::Unsatisfiable, s.solve());
    }

    #[test]
    fn test_incremental_solving() {
        let mut s = CadicalSolver::default();
        s.add_clause(clause![1, 2]);
        assert!(matches!(s.solve(), SolvingResult::Satisfiable(_)));
        s.add_clause(clause![-1]);
        s.add_clause(clause![-2]);
        assert_eq!(SolvingResult::Unsatisfiable, s.solve());
    }

    #[test]
    fn test_solve_under_assumptions() {
        let mut s = CadicalSolver::default();
        s.add_clause(clause![1]);
        assert_eq!(
            SolvingResult::Unsatisfiable,
            s.solve_under_assumptions(&[Literal::from(-1)])
        );
        assert!(matches!(s.solve(), SolvingResult::Satisfiable(_)));
    }
}
