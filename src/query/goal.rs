//! Goals, terms and the query builder.
//!
//! A [`Query`] is a conjunction of goals over logic variables. Goals are
//! solved left to right, so put the most selective ones first.

use std::fmt;

use veridical_contract::NodeId;

use super::relation::Value;

/// A logic variable, local to the query that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(pub(crate) usize);

impl Var {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Var(Var),
    Const(Value),
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Const(v)
    }
}

impl From<NodeId> for Term {
    fn from(id: NodeId) -> Self {
        Term::Const(Value::Node(id))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Const(Value::text(s))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    /// `args` is a tuple of `relation`.
    Member { relation: String, args: Vec<Term> },
    /// `term` equals one of `options`.
    OneOf { term: Term, options: Vec<Value> },
    /// The two terms are different.
    Neq(Term, Term),
}

impl Goal {
    fn write_with(&self, f: &mut fmt::Formatter<'_>, var: &dyn Fn(Var) -> String) -> fmt::Result {
        let term = |t: &Term| match t {
            Term::Var(v) => var(*v),
            Term::Const(c) => c.to_string(),
        };
        match self {
            Goal::Member { relation, args } => {
                let args: Vec<String> = args.iter().map(term).collect();
                write!(f, "{}({})", relation, args.join(", "))
            }
            Goal::OneOf { term: t, options } => write!(f, "{} in {} options", term(t), options.len()),
            Goal::Neq(a, b) => write!(f, "{} != {}", term(a), term(b)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &|v| format!("?{}", v.0))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    goals: Vec<Goal>,
    var_names: Vec<String>,
}

impl Query {
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn var_count(&self) -> usize {
        self.var_names.len()
    }

    pub fn var_name(&self, var: Var) -> Option<&str> {
        self.var_names.get(var.0).map(String::as_str)
    }

    /// Names of every relation the query reads.
    pub fn relations(&self) -> impl Iterator<Item = &str> + '_ {
        self.goals.iter().filter_map(|g| match g {
            Goal::Member { relation, .. } => Some(relation.as_str()),
            _ => None,
        })
    }
}

/// Goals joined by `, `, variables shown by name.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let var = |v: Var| match self.var_name(v) {
            Some(name) => format!("?{}", name),
            None => format!("?{}", v.0),
        };
        for (i, goal) in self.goals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            goal.write_with(f, &var)?;
        }
        Ok(())
    }
}

/// Incremental builder for [`Query`].
///
/// ```
/// use veridical::query::{QueryBuilder, HEAD_REL};
///
/// let mut q = QueryBuilder::new();
/// let p = q.var("P");
/// let x = q.var("X");
/// q.member(HEAD_REL, [p.into(), x.into(), "ccomp".into()]);
/// let query = q.build();
/// assert_eq!(query.var_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    goals: Vec<Goal>,
    var_names: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh variable. Names are for diagnostics only.
    pub fn var(&mut self, name: &str) -> Var {
        self.var_names.push(name.to_string());
        Var(self.var_names.len() - 1)
    }

    pub fn member(&mut self, relation: &str, args: impl IntoIterator<Item = Term>) -> &mut Self {
        self.goals.push(Goal::Member {
            relation: relation.to_string(),
            args: args.into_iter().collect(),
        });
        self
    }

    pub fn one_of<V: Into<Value>>(
        &mut self,
        term: impl Into<Term>,
        options: impl IntoIterator<Item = V>,
    ) -> &mut Self {
        self.goals.push(Goal::OneOf {
            term: term.into(),
            options: options.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn neq(&mut self, a: impl Into<Term>, b: impl Into<Term>) -> &mut Self {
        self.goals.push(Goal::Neq(a.into(), b.into()));
        self
    }

    pub fn build(self) -> Query {
        Query {
            goals: self.goals,
            var_names: self.var_names,
        }
    }
}
