use super::{Clause, ClauseSink, Literal, SatSolver, SolvingResult};
use anyhow::{anyhow, Result};

/// The incremental solver state owned by a reasoning session.
///
/// A state accumulates clauses monotonically and answers witness queries, that is,
/// satisfiability checks whose models are projected onto a set of requested literals.
/// An unsatisfiable clause set is not an error: it is reported as [Option::None] and
/// signals the exhaustion of an enumeration.
///
/// The state must be released with [close](SatSolverState::close) at the end of the
/// session; any operation invoked afterwards fails.
/// Dropping the state also releases the underlying solver.
pub struct SatSolverState {
    solver: Option<Box<dyn SatSolver>>,
}

impl SatSolverState {
    /// Builds a new state wrapping the provided solver.
    pub fn new(solver: Box<dyn SatSolver>) -> Self {
        Self {
            solver: Some(solver),
        }
    }

    fn solver_mut(&mut self) -> Result<&mut Box<dyn SatSolver>> {
        self.solver
            .as_mut()
            .ok_or_else(|| anyhow!("solver state used after close"))
    }

    /// Asserts a clause in the underlying solver.
    ///
    /// Asserted clauses are logically conjoined and can never be retracted.
    pub fn add(&mut self, clause: Clause) -> Result<()> {
        self.solver_mut()?.add_clause(clause);
        Ok(())
    }

    /// Checks the satisfiability of the current clause set.
    ///
    /// If it is satisfiable, the projection of one model onto the requested literals is
    /// returned: for each requested literal, the projection contains the literal of same
    /// variable satisfied by the model.
    /// Variables left unconstrained by the solver are omitted from the projection.
    ///
    /// [Option::None] is returned if the clause set is unsatisfiable.
    /// An error is raised if the state is closed or if the underlying solver fails.
    pub fn witness(&mut self, literals: &[Literal]) -> Result<Option<Vec<Literal>>> {
        self.witness_under_assumptions(literals, &[])
    }

    /// Acts as [witness](SatSolverState::witness), with the provided assumptions added
    /// to the satisfiability check.
    ///
    /// Assumptions only hold for this single check; they do not change the clause set.
    pub fn witness_under_assumptions(
        &mut self,
        literals: &[Literal],
        assumptions: &[Literal],
    ) -> Result<Option<Vec<Literal>>> {
        match self.solver_mut()?.solve_under_assumptions(assumptions) {
            SolvingResult::Satisfiable(assignment) => Ok(Some(
                literals
                    .iter()
                    .filter_map(|l| {
                        assignment.value_of(l.var()).map(|value| {
                            let positive = Literal::from(usize::from(l.var()) as isize);
                            if value {
                                positive
                            } else {
                                positive.negate()
                            }
                        })
                    })
                    .collect(),
            )),
            SolvingResult::Unsatisfiable => Ok(None),
            SolvingResult::Unknown => Err(anyhow!("the SAT solver failed to give an answer")),
        }
    }

    /// Releases the underlying solver.
    ///
    /// An error is returned if the state has already been closed.
    pub fn close(&mut self) -> Result<()> {
        if self.solver.take().is_none() {
            return Err(anyhow!("solver state already closed"));
        }
        Ok(())
    }
}

impl ClauseSink for SatSolverState {
    fn add_clause(&mut self, clause: Clause) -> Result<()> {
        self.add(clause)
    }
}
