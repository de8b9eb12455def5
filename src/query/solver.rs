//! Depth-first solver over a [`FactBase`].
//!
//! Goals are tried left to right, alternatives in tuple insertion order.
//! Inequalities with an unbound side are deferred until both sides are
//! bound; at the end a deferred inequality holds unless both sides are the
//! same unbound variable.

use veridical_contract::NodeId;

use super::facts::FactBase;
use super::goal::{Goal, Query, Term, Var};
use super::relation::Value;

/// Default number of solutions pulled from a query.
pub const DEFAULT_SOLUTION_CAP: usize = 10;

/// One satisfying assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    bindings: Vec<Option<Value>>,
}

impl Solution {
    pub fn get(&self, var: Var) -> Option<&Value> {
        self.bindings.get(var.0).and_then(Option::as_ref)
    }

    pub fn node(&self, var: Var) -> Option<NodeId> {
        self.get(var).and_then(Value::as_node)
    }

    pub fn text(&self, var: Var) -> Option<&str> {
        self.get(var).and_then(Value::as_text)
    }
}

#[derive(Clone, Debug)]
struct State {
    bindings: Vec<Option<Value>>,
    deferred: Vec<(Term, Term)>,
}

impl State {
    fn resolve(&self, term: &Term) -> Option<Value> {
        match term {
            Term::Const(v) => Some(v.clone()),
            Term::Var(v) => self.bindings.get(v.0).cloned().flatten(),
        }
    }

    /// Bind or compare `term` against `value`.
    fn unify(&mut self, term: &Term, value: &Value) -> bool {
        match term {
            Term::Const(c) => c == value,
            Term::Var(v) => match self.bindings.get_mut(v.0) {
                Some(slot @ None) => {
                    *slot = Some(value.clone());
                    true
                }
                Some(Some(bound)) => bound == value,
                None => false,
            },
        }
    }

    /// Re-check deferred inequalities after new bindings. Drops the ones
    /// that became decidable.
    fn recheck(mut self) -> Option<Self> {
        let mut pending = Vec::with_capacity(self.deferred.len());
        for (a, b) in std::mem::take(&mut self.deferred) {
            match (self.resolve(&a), self.resolve(&b)) {
                (Some(x), Some(y)) if x == y => return None,
                (Some(_), Some(_)) => {}
                _ => pending.push((a, b)),
            }
        }
        self.deferred = pending;
        Some(self)
    }

    fn finish(self) -> Option<Solution> {
        let stuck = self
            .deferred
            .iter()
            .any(|(a, b)| matches!((a, b), (Term::Var(x), Term::Var(y)) if x == y));
        if stuck {
            return None;
        }
        Some(Solution {
            bindings: self.bindings,
        })
    }
}

struct Frame {
    goal: usize,
    alternatives: std::vec::IntoIter<State>,
}

/// Lazy iterator over at most `cap` solutions.
pub struct Solutions<'a> {
    facts: &'a FactBase,
    query: &'a Query,
    stack: Vec<Frame>,
    remaining: usize,
}

impl<'a> Solutions<'a> {
    pub(crate) fn new(facts: &'a FactBase, query: &'a Query, cap: usize) -> Self {
        let start = State {
            bindings: vec![None; query.var_count()],
            deferred: Vec::new(),
        };
        Self {
            facts,
            query,
            stack: vec![Frame {
                goal: 0,
                alternatives: vec![start].into_iter(),
            }],
            remaining: cap,
        }
    }

    fn expand(&self, goal: &Goal, state: State) -> Vec<State> {
        match goal {
            Goal::Member { relation, args } => {
                // Validated before solving; a missing relation has no tuples.
                let Some(rel) = self.facts.relation(relation) else {
                    return Vec::new();
                };
                let pattern: Vec<Option<Value>> = args.iter().map(|t| state.resolve(t)).collect();
                rel.candidates(&pattern)
                    .into_iter()
                    .filter_map(|pos| rel.get(pos))
                    .filter_map(|tuple| {
                        let mut next = state.clone();
                        let bound = args
                            .iter()
                            .zip(tuple)
                            .all(|(term, value)| next.unify(term, value));
                        bound.then_some(next)
                    })
                    .filter_map(State::recheck)
                    .collect()
            }
            Goal::OneOf { term, options } => match state.resolve(term) {
                Some(value) => {
                    if options.contains(&value) {
                        vec![state]
                    } else {
                        Vec::new()
                    }
                }
                None => options
                    .iter()
                    .filter_map(|option| {
                        let mut next = state.clone();
                        let bound = next.unify(term, option);
                        bound.then_some(next)
                    })
                    .filter_map(State::recheck)
                    .collect(),
            },
            Goal::Neq(a, b) => match (state.resolve(a), state.resolve(b)) {
                (Some(x), Some(y)) => {
                    if x != y {
                        vec![state]
                    } else {
                        Vec::new()
                    }
                }
                _ => {
                    let mut next = state;
                    next.deferred.push((a.clone(), b.clone()));
                    vec![next]
                }
            },
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        let query = self.query;
        let goals = query.goals();
        while self.remaining > 0 {
            let frame = self.stack.last_mut()?;
            let goal = frame.goal;
            let Some(state) = frame.alternatives.next() else {
                self.stack.pop();
                continue;
            };

            if goal == goals.len() {
                if let Some(solution) = state.finish() {
                    self.remaining -= 1;
                    return Some(solution);
                }
                continue;
            }

            let alternatives = self.expand(&goals[goal], state).into_iter();
            self.stack.push(Frame {
                goal: goal + 1,
                alternatives,
            });
        }
        None
    }
}
