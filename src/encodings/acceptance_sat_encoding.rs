use super::{PropositionalMapping, SatEncoding};
use crate::adf::{AdfFramework, Condition, LabelType};
use crate::sat::{Clause, ClauseSink, Literal};
use anyhow::Result;

/// An encoding defining, for each argument, its acceptance variable.
///
/// For an argument `a` with acceptance condition `C_a`, the emitted clauses assert the
/// equivalence between the acceptance variable of `a` and the value of `C_a` under the
/// assignment of the argument variables.
/// The argument variables themselves are left unconstrained, which makes this encoding
/// the shared core of both model generation and the semantics verifiers: the latter fix
/// argument variables through assumptions and inspect the acceptance variables.
#[derive(Default)]
pub struct AcceptanceSatEncoding;

// The value of a subformula during the encoding: either a known constant or a literal
// carrying its truth value.
enum NodeValue {
    Const(bool),
    Lit(Literal),
}

struct AuxVarAllocator {
    next: usize,
}

impl AuxVarAllocator {
    fn fresh(&mut self) -> Literal {
        let lit = Literal::from(self.next as isize);
        self.next += 1;
        lit
    }
}

impl AcceptanceSatEncoding {
    pub(crate) fn encode_acceptance_of_id(
        sink: &mut dyn ClauseSink,
        adf_condition: &Condition,
        mapping: &PropositionalMapping,
        id: usize,
    ) -> Result<()> {
        let mut allocator = AuxVarAllocator {
            next: mapping.first_aux_var_of_id(id),
        };
        let acceptance = mapping.acceptance_literal_of_id(id);
        match encode_node(sink, adf_condition, mapping, &mut allocator)? {
            NodeValue::Const(true) => sink.add_clause(vec![acceptance])?,
            NodeValue::Const(false) => sink.add_clause(vec![acceptance.negate()])?,
            NodeValue::Lit(l) => {
                sink.add_clause(vec![acceptance.negate(), l])?;
                sink.add_clause(vec![acceptance, l.negate()])?;
            }
        }
        Ok(())
    }
}

fn encode_node(
    sink: &mut dyn ClauseSink,
    condition: &Condition,
    mapping: &PropositionalMapping,
    allocator: &mut AuxVarAllocator,
) -> Result<NodeValue> {
    match condition {
        Condition::Tautology => Ok(NodeValue::Const(true)),
        Condition::Contradiction => Ok(NodeValue::Const(false)),
        Condition::Argument(id) => Ok(NodeValue::Lit(mapping.argument_literal_of_id(*id))),
        Condition::Negation(c) => Ok(match encode_node(sink, c, mapping, allocator)? {
            NodeValue::Const(b) => NodeValue::Const(!b),
            NodeValue::Lit(l) => NodeValue::Lit(l.negate()),
        }),
        Condition::Conjunction(cs) => {
            let children = encode_children(sink, cs, mapping, allocator)?;
            encode_nary(sink, allocator, children, true)
        }
        Condition::Disjunction(cs) => {
            let children = encode_children(sink, cs, mapping, allocator)?;
            encode_nary(sink, allocator, children, false)
        }
        Condition::Implication(p, q) => {
            let premise = encode_node(sink, p, mapping, allocator)?;
            let conclusion = encode_node(sink, q, mapping, allocator)?;
            let premise = match premise {
                NodeValue::Const(b) => NodeValue::Const(!b),
                NodeValue::Lit(l) => NodeValue::Lit(l.negate()),
            };
            encode_nary(sink, allocator, vec![premise, conclusion], false)
        }
        Condition::Equivalence(p, q) => {
            let first = encode_node(sink, p, mapping, allocator)?;
            let second = encode_node(sink, q, mapping, allocator)?;
            match (first, second) {
                (NodeValue::Const(b), NodeValue::Const(c)) => Ok(NodeValue::Const(b == c)),
                (NodeValue::Const(b), NodeValue::Lit(l)) | (NodeValue::Lit(l), NodeValue::Const(b)) => {
                    Ok(NodeValue::Lit(if b { l } else { l.negate() }))
                }
                (NodeValue::Lit(p), NodeValue::Lit(q)) => {
                    let equiv = allocator.fresh();
                    sink.add_clause(vec![equiv.negate(), p.negate(), q])?;
                    sink.add_clause(vec![equiv.negate(), p, q.negate()])?;
                    sink.add_clause(vec![equiv, p, q])?;
                    sink.add_clause(vec![equiv, p.negate(), q.negate()])?;
                    Ok(NodeValue::Lit(equiv))
                }
            }
        }
    }
}

fn encode_children(
    sink: &mut dyn ClauseSink,
    conditions: &[Condition],
    mapping: &PropositionalMapping,
    allocator: &mut AuxVarAllocator,
) -> Result<Vec<NodeValue>> {
    conditions
        .iter()
        .map(|c| encode_node(sink, c, mapping, allocator))
        .collect()
}

// Encodes a conjunction (resp. disjunction) of already-encoded children, folding away
// the constants among them.
fn encode_nary(
    sink: &mut dyn ClauseSink,
    allocator: &mut AuxVarAllocator,
    children: Vec<NodeValue>,
    conjunctive: bool,
) -> Result<NodeValue> {
    let mut literals = Vec::with_capacity(children.len());
    for child in children {
        match child {
            NodeValue::Const(b) => {
                if b != conjunctive {
                    // an absorbing element decides the whole connective
                    return Ok(NodeValue::Const(!conjunctive));
                }
            }
            NodeValue::Lit(l) => literals.push(l),
        }
    }
    match literals.len() {
        0 => Ok(NodeValue::Const(conjunctive)),
        1 => Ok(NodeValue::Lit(literals[0])),
        _ => {
            let node = allocator.fresh();
            let mut long_clause: Clause = Vec::with_capacity(literals.len() + 1);
            if conjunctive {
                long_clause.push(node);
                for l in &literals {
                    sink.add_clause(vec![node.negate(), *l])?;
                    long_clause.push(l.negate());
                }
            } else {
                long_clause.push(node.negate());
                for l in &literals {
                    sink.add_clause(vec![node, l.negate()])?;
                    long_clause.push(*l);
                }
            }
            sink.add_clause(long_clause)?;
            Ok(NodeValue::Lit(node))
        }
    }
}

impl<T> SatEncoding<T> for AcceptanceSatEncoding
where
    T: LabelType,
{
    fn encode(
        &self,
        sink: &mut dyn ClauseSink,
        adf: &AdfFramework<T>,
        mapping: &PropositionalMapping,
    ) -> Result<()> {
        for id in 0..adf.n_arguments() {
            Self::encode_acceptance_of_id(sink, adf.condition_of_id(id), mapping, id)?;
        }
        Ok(())
    }
}
