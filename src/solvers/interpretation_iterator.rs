use super::{CandidateGenerator, Verifier};
use crate::adf::{Interpretation, LabelType};
use crate::sat::{SatSolver, SatSolverState};
use anyhow::Result;
use log::{debug, info};

/// The generate-and-verify loop of a reasoning session.
///
/// The iterator owns one incremental solver state for the whole session.
/// Each step asks the generator for the next candidate interpretation and runs it
/// through the verifier chain, short-circuiting on the first failing verifier; the
/// candidates passing all the verifiers are yielded.
///
/// The sequence is lazy, finite and cannot be restarted: consuming it exhausts the
/// underlying solver state, and a fresh session must be built to enumerate again.
/// Errors of the solver or of a verifier are yielded in place of a candidate, after
/// which the iteration ends.
/// All the resources of the session are released when the iterator is dropped, however
/// far the enumeration went.
pub struct InterpretationIterator<'a, T>
where
    T: LabelType,
{
    generator: Box<dyn CandidateGenerator<T> + 'a>,
    verifiers: Vec<Box<dyn Verifier + 'a>>,
    state: SatSolverState,
    n_yielded: usize,
    done: bool,
}

impl<'a, T> InterpretationIterator<'a, T>
where
    T: LabelType,
{
    /// Builds a new iterator given the components of the session.
    ///
    /// The generator's encodings are asserted in a state built around the provided
    /// solver, and every verifier of the chain is prepared.
    pub fn new(
        solver: Box<dyn SatSolver>,
        generator: Box<dyn CandidateGenerator<T> + 'a>,
        mut verifiers: Vec<Box<dyn Verifier + 'a>>,
    ) -> Result<Self> {
        let mut state = SatSolverState::new(solver);
        generator.prepare(&mut state)?;
        for verifier in verifiers.iter_mut() {
            verifier.prepare()?;
        }
        Ok(Self {
            generator,
            verifiers,
            state,
            n_yielded: 0,
            done: false,
        })
    }

    fn next_accepted(&mut self) -> Result<Option<Interpretation>> {
        loop {
            let candidate = match self.generator.generate(&mut self.state)? {
                Some(candidate) => candidate,
                None => {
                    info!("enumeration exhausted after {} interpretation(s)", self.n_yielded);
                    return Ok(None);
                }
            };
            let mut accepted = true;
            for verifier in self.verifiers.iter_mut() {
                if !verifier.verify(&candidate)? {
                    debug!("candidate discarded by a verifier");
                    accepted = false;
                    break;
                }
            }
            if accepted {
                self.n_yielded += 1;
                return Ok(Some(candidate));
            }
        }
    }
}

impl<T> Iterator for InterpretationIterator<'_, T>
where
    T: LabelType,
{
    type Item = Result<Interpretation>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_accepted() {
            Ok(Some(interpretation)) => Some(Ok(interpretation)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<T> Drop for InterpretationIterator<'_, T>
where
    T: LabelType,
{
    fn drop(&mut self) {
        for verifier in self.verifiers.iter_mut() {
            let _ = verifier.close();
        }
        let _ = self.state.close();
    }
}
