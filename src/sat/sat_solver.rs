use super::cadical_solver::CadicalSolver;
use anyhow::Result;
use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A variable in a SAT solver.
///
/// A variable is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(NonZeroUsize);

macro_rules! impl_var_from {
    ($t: ty) => {
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                Self(NonZeroUsize::try_from(v as usize).unwrap())
            }
        }
    };
}
impl_var_from!(usize);
impl_var_from!(u64);
impl_var_from!(u32);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A literal in a SAT solver.
///
/// A literal is represented by a non-null integer whose absolute value gives the
/// variable and whose sign gives the polarity.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the literal with same variable and opposite polarity.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable of this literal.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i64);
impl_lit_from!(i32);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clause, that is, a disjunction of literals.
///
/// Clauses are the sole communication unit with SAT solvers; once asserted in a solver,
/// they cannot be retracted.
pub type Clause = Vec<Literal>;

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        $crate::sat::Clause::new()
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::sat::Literal::from).collect::<$crate::sat::Clause>()
    );
}

/// A trait for the objects clauses can be streamed into.
///
/// It is implemented both by [SatSolverState](crate::sat::SatSolverState), making
/// encodings directly applicable as solver mutations, and by [`Vec<Clause>`], allowing
/// clause sets to be collected for inspection.
pub trait ClauseSink {
    /// Adds a clause to this sink.
    fn add_clause(&mut self, clause: Clause) -> Result<()>;
}

impl ClauseSink for Vec<Clause> {
    fn add_clause(&mut self, clause: Clause) -> Result<()> {
        self.push(clause);
        Ok(())
    }
}

/// An assignment of a set of variables.
///
/// Inside the set of variables involved in the assignment, some may be unassigned.
/// This is the reason why accessors to assigned values return an [`Option<bool>`].
#[derive(Debug, PartialEq, Eq)]
pub struct Assignment(Vec<Option<bool>>);

impl Assignment {
    pub(crate) fn new(assignment: Vec<Option<bool>>) -> Self {
        Self(assignment)
    }

    /// Returns the value potentially assigned to a variable.
    ///
    /// [Option::None] is returned if the variable is unassigned or unknown to the
    /// underlying solver.
    pub fn value_of(&self, v: Variable) -> Option<bool> {
        self.0.get(usize::from(v) - 1).copied().flatten()
    }
}

/// The result of a satisfiability check.
#[derive(Debug, PartialEq, Eq)]
pub enum SolvingResult {
    /// The clause set is satisfiable; a model is provided.
    Satisfiable(Assignment),
    /// The clause set is unsatisfiable.
    Unsatisfiable,
    /// The solver was unable to decide satisfiability.
    Unknown,
}

/// A trait for incremental SAT solvers.
pub trait SatSolver {
    /// Adds a clause to this solver.
    fn add_clause(&mut self, cl: Clause);

    /// Solves the problem formed by the clauses added so far.
    fn solve(&mut self) -> SolvingResult;

    /// Solves the problem formed by the clauses added so far and the provided assumptions.
    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult;

    /// Returns the number of variables involved so far in this solver.
    fn n_vars(&self) -> usize;
}

/// A type for functions building SAT solvers.
pub type SatSolverFactoryFn = dyn Fn() -> Box<dyn SatSolver>;

/// Returns the default SAT solver (Cadical).
pub fn default_solver() -> Box<dyn SatSolver> {
    Box::new(CadicalSolver::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_from_pos() {
        let v = Variable::from(1_usize);
        assert_eq!(1, usize::from(v))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_var_from_null() {
        Variable::from(0_usize);
    }

    #[test]
    fn test_lit_from_pos() {
        let l = Literal::from(1);
        assert_eq!(1, isize::from(l))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_lit_from_null() {
        Literal::from(0);
    }

    #[test]
    fn test_lit_from_neg() {
        let l = Literal::from(-1);
        assert_eq!(-1, isize::from(l));
        assert_eq!(1, usize::from(l.var()));
    }

    #[test]
    fn test_negate_lit() {
        assert_eq!(Literal::from(-1), Literal::from(1).negate());
        assert_eq!(Literal::from(1), Literal::from(-1).negate());
    }

    #[test]
    fn test_clause_macro() {
        assert_eq!(Vec::<Literal>::new(), clause![]);
        assert_eq!(vec![Literal::from(1), Literal::from(-2)], clause![1, -2]);
    }

    #[test]
    fn test_vec_as_clause_sink() {
        let mut sink: Vec<Clause> = Vec::new();
        sink.add_clause(clause![1, -2]).unwrap();
        sink.add_clause(clause![2]).unwrap();
        assert_eq!(2, sink.len());
    }

    #[test]
    fn test_assignment_value_of_unknown_var() {
        let assignment = Assignment::new(vec![Some(true)]);
        assert_eq!(Some(true), assignment.value_of(Variable::from(1_usize)));
        assert_eq!(None, assignment.value_of(Variable::from(2_usize)));
    }
}
