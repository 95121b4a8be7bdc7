use super::Verifier;
use crate::adf::{AdfFramework, Interpretation, LabelType, TruthValue};
use anyhow::{anyhow, Result};

/// A verifier checking that an interpretation is a two-valued model.
///
/// The interpretation must be total and assign to every argument the value its
/// acceptance condition evaluates to.
/// The check is a direct evaluation of the conditions, independent of the SAT encoding
/// the candidate may have been generated from; no solver is involved.
pub struct ModelVerifier<'a, T>
where
    T: LabelType,
{
    adf: &'a AdfFramework<T>,
    prepared: bool,
    closed: bool,
}

impl<'a, T> ModelVerifier<'a, T>
where
    T: LabelType,
{
    /// Builds a new verifier for the two-valued models of the given framework.
    pub fn new(adf: &'a AdfFramework<T>) -> Self {
        Self {
            adf,
            prepared: false,
            closed: false,
        }
    }
}

impl<T> Verifier for ModelVerifier<'_, T>
where
    T: LabelType,
{
    fn prepare(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        self.prepared = true;
        Ok(())
    }

    fn verify(&mut self, interpretation: &Interpretation) -> Result<bool> {
        if self.closed {
            return Err(anyhow!("verifier used after close"));
        }
        if !self.prepared {
            return Err(anyhow!("verifier must be prepared before verifying"));
        }
        if !interpretation.is_two_valued() {
            return Ok(false);
        }
        let value_of = |id: usize| interpretation.value_of_id(id) == TruthValue::True;
        Ok((0..self.adf.n_arguments())
            .all(|id| self.adf.condition_of_id(id).eval(&value_of) == value_of(id)))
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(anyhow!("verifier already closed"));
        }
        self.closed = true;
        Ok(())
    }
}
