//! The fourteen transformation rules as static query data.
//!
//! Arrows below read `daughter -rel-> head`; `P` is the proposition node.

use veridical_contract::{Category, Transformation, PROPOSITION_LABEL};

use crate::query::{
    FactBase, Query, QueryBuilder, QueryError, Solution, Term, Var, HEAD_REL, ID_LABEL, ID_LEMMA,
    ID_POS,
};

use Category::*;

const NOUN_TRIGGERS: [Category; 3] = [PositiveNouns, NegativeNouns, FactiveNouns];
const VERB_TRIGGERS: [Category; 4] = [PositiveVerbs, NegativeVerbs, FactiveVerbs, CounterFactiveVerbs];
const ADJECTIVE_TRIGGERS: [Category; 2] = [NegativeAdjectives, PositiveAdjectives];

/// Rules in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    DoublePpSource,
    NonPossessivePpSource,
    SubjectSource,
    DoublePp,
    SinglePassiveSourcePp,
    SinglePp,
    AdjectiveModification,
    DoCharacterization,
    Passive,
    VerbComplement,
    ConditionalConsequentClause,
    ConditionalConsequentAdverb,
    ConditionalAntecedent,
    BrokenPobj,
}

impl RuleKind {
    /// First match wins, in this order.
    pub const PRIORITY: [RuleKind; 14] = [
        RuleKind::DoublePpSource,
        RuleKind::NonPossessivePpSource,
        RuleKind::SubjectSource,
        RuleKind::DoublePp,
        RuleKind::SinglePassiveSourcePp,
        RuleKind::SinglePp,
        RuleKind::AdjectiveModification,
        RuleKind::DoCharacterization,
        RuleKind::Passive,
        RuleKind::VerbComplement,
        RuleKind::ConditionalConsequentClause,
        RuleKind::ConditionalConsequentAdverb,
        RuleKind::ConditionalAntecedent,
        RuleKind::BrokenPobj,
    ];

    /// Name carried by the resulting [`Transformation`].
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::DoublePpSource => "Double PP Source",
            RuleKind::NonPossessivePpSource => "Non-Possessive PP Source",
            RuleKind::SubjectSource => "Subject Source",
            RuleKind::DoublePp => "Double PP",
            RuleKind::SinglePassiveSourcePp => "Single Passive Source PP",
            RuleKind::SinglePp => "Single PP",
            RuleKind::AdjectiveModification => "Adjective Modification",
            RuleKind::DoCharacterization => "DO Characterization",
            RuleKind::Passive => "Passive",
            RuleKind::VerbComplement => "Verb Complement",
            RuleKind::ConditionalConsequentClause | RuleKind::ConditionalConsequentAdverb => {
                "Conditional Consequent"
            }
            RuleKind::ConditionalAntecedent => "Conditional Antecedent or Causal",
            RuleKind::BrokenPobj => "Broken Pobj",
        }
    }

    pub fn rule(self) -> Rule {
        let mut q = RuleBuilder::new();
        match self {
            // Sam argues in defense of the idiot's assertion that it is raining.
            // V -poss-> I <-acl- P
            RuleKind::DoublePpSource => {
                let v = q.var("V");
                let p = q.var("P");
                let i = q.var("I");
                q.labeled(v, NegativeSources)
                    .proposition(p)
                    .head_rel(p, i, "acl")
                    .head_rel(v, i, "poss")
                    .neq(p, v);
                q.finish(self, CategorySource::Fixed(NegativeSources), [p, v])
            }
            // Sam agrees with the assertion of the idiot that it is raining.
            // P -relcl-> S -pobj-> R -prep-> I
            RuleKind::NonPossessivePpSource => {
                let s = q.var("S");
                let p = q.var("P");
                let r = q.var("R");
                let i = q.var("I");
                q.labeled(s, NegativeSources)
                    .proposition(p)
                    .head_rel(p, s, "relcl")
                    .head_rel(s, r, "pobj")
                    .head_rel(r, i, "prep")
                    .neq(p, i)
                    .neq(s, i);
                q.finish(self, CategorySource::Fixed(NegativeSources), [p, s, r])
            }
            // The idiot said that the sun is yellow.
            // S -nsubj-> V <-ccomp- P
            RuleKind::SubjectSource => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let p = q.var("P");
                let pos = q.var("Pos");
                let v = q.var("V");
                q.labeled(s, cat)
                    .category_in(cat, NOUN_TRIGGERS.iter().chain(&[NegativeSources]))
                    .proposition(p)
                    .pos(s, pos)
                    .one_of(pos, ["NOUN", "PROPN"])
                    .head_rel(p, v, "ccomp")
                    .head_rel(s, v, "nsubj")
                    .neq(p, s)
                    .neq(p, v)
                    .neq(s, v);
                q.finish(self, CategorySource::Bound(cat), [p, s])
            }
            // He disagreed with Bush's assessment earlier in the day that ...
            // P -ccomp|xcomp-> V <-prep- R <-pobj- E
            RuleKind::DoublePp => {
                let e = q.var("E");
                let cat = q.var("Cat");
                let p = q.var("P");
                let v = q.var("V");
                let r = q.var("R");
                let rel = q.var("Rel");
                q.labeled(e, cat)
                    .category_in(cat, &Category::ALL)
                    .proposition(p)
                    .head_rel(p, v, rel)
                    .one_of(rel, ["ccomp", "xcomp"])
                    .head_rel(r, v, "prep")
                    .head_rel(e, r, "pobj")
                    .neq(p, e);
                q.finish(self, CategorySource::Bound(cat), [e, p])
            }
            // It was argued by the idiot that it is raining.
            // P -relcl-> S -pobj-> R -agent-> I
            RuleKind::SinglePassiveSourcePp => {
                let s = q.var("S");
                let p = q.var("P");
                let r = q.var("R");
                let i = q.var("I");
                q.labeled(s, NegativeSources)
                    .proposition(p)
                    .head_rel(p, s, "relcl")
                    .head_rel(s, r, "pobj")
                    .head_rel(r, i, "agent")
                    .neq(p, i)
                    .neq(s, i)
                    .neq(r, i);
                q.finish(self, CategorySource::Fixed(NegativeSources), [p, s, r])
            }
            // She agreed with the assertion that the sun is yellow.
            // P -acl-> S -pobj-> R
            RuleKind::SinglePp => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let p = q.var("P");
                let r = q.var("R");
                q.labeled(s, cat)
                    .category_in(cat, &Category::ALL)
                    .proposition(p)
                    .head_rel(p, s, "acl")
                    .head_rel(s, r, "pobj")
                    .neq(p, s)
                    .neq(p, r)
                    .neq(s, r);
                q.finish(self, CategorySource::Bound(cat), [p, s, r])
            }
            // It is true that the sun is yellow.
            // S -acomp-> B <-ccomp- P
            RuleKind::AdjectiveModification => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let b = q.var("B");
                let lemma = q.var("Lemma");
                let p = q.var("P");
                q.labeled(s, cat)
                    .lemma(b, lemma)
                    .one_of(lemma, ["remain", "be"])
                    .category_in(cat, &ADJECTIVE_TRIGGERS)
                    .head_rel(s, b, "acomp")
                    .head_rel(p, b, "ccomp")
                    .proposition(p)
                    .neq(p, s)
                    .neq(p, b)
                    .neq(s, b);
                q.finish(self, CategorySource::Bound(cat), [p, b, s])
            }
            // She uttered the falsehood that the sun is yellow.
            // P -ccomp|relcl|acl|nsubj|mark-> S
            RuleKind::DoCharacterization => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let p = q.var("P");
                let rel = q.var("Rel");
                q.labeled(s, cat)
                    .category_in(cat, &NOUN_TRIGGERS)
                    .proposition(p)
                    .pos(s, "NOUN")
                    .head_rel(p, s, rel)
                    .one_of(rel, ["ccomp", "relcl", "acl", "nsubj", "mark"])
                    .neq(p, s);
                q.finish(self, CategorySource::Bound(cat), [p, s])
            }
            // It was denied that the sun is yellow.
            // X -auxpass|nsubjpass-> S <-ccomp- P
            RuleKind::Passive => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let p = q.var("P");
                let x = q.var("X");
                let rel = q.var("Rel");
                q.labeled(s, cat)
                    .category_in(cat, &Category::ALL)
                    .proposition(p)
                    .head_rel(p, s, "ccomp")
                    .head_rel(x, s, rel)
                    .one_of(rel, ["auxpass", "nsubjpass"])
                    .neq(p, s)
                    .neq(p, x)
                    .neq(s, x);
                q.finish(self, CategorySource::Bound(cat), [p, s])
            }
            // He lied that the sun is yellow.
            // P -ccomp-> S
            RuleKind::VerbComplement => {
                let s = q.var("S");
                let cat = q.var("Cat");
                let p = q.var("P");
                q.labeled(s, cat)
                    .pos(s, "VERB")
                    .category_in(cat, &VERB_TRIGGERS)
                    .head_rel(p, s, "ccomp")
                    .proposition(p)
                    .neq(p, s);
                q.finish(self, CategorySource::Bound(cat), [p, s])
            }
            // If he is on time the sun is yellow.
            // C -mark|acomp-> H -advcl-> P
            RuleKind::ConditionalConsequentClause => {
                let p = q.var("P");
                let h = q.var("H");
                let c = q.var("C");
                let rel = q.var("Rel");
                q.head_rel(c, h, rel)
                    .one_of(rel, ["mark", "acomp"])
                    .head_rel(h, p, "advcl")
                    .labeled(c, Conditionals)
                    .proposition(p)
                    .neq(p, c)
                    .neq(p, h)
                    .neq(c, h);
                q.finish(self, CategorySource::Fixed(Conditionals), [p, c])
            }
            // The sun is yellow as soon as next week.
            // C -advmod-> P
            RuleKind::ConditionalConsequentAdverb => {
                let p = q.var("P");
                let c = q.var("C");
                q.head_rel(c, p, "advmod")
                    .labeled(c, Conditionals)
                    .proposition(p)
                    .neq(p, c);
                q.finish(self, CategorySource::Fixed(Conditionals), [p, c])
            }
            // If the sun is yellow it will rain.
            // C -mark-> P
            RuleKind::ConditionalAntecedent => {
                let p = q.var("P");
                let c = q.var("C");
                let cat = q.var("Cat");
                q.head_rel(c, p, "mark")
                    .labeled(c, cat)
                    .category_in(cat, &[Conditionals, Causals])
                    .proposition(p)
                    .neq(p, c);
                q.finish(self, CategorySource::Fixed(Conditionals), [p, c])
            }
            // He disagreed with Bill's assessment that ..., after Single PP.
            // P -prep-> V
            RuleKind::BrokenPobj => {
                let p = q.var("P");
                let v = q.var("V");
                let cat = q.var("Cat");
                q.head_rel(p, v, "prep")
                    .labeled(v, cat)
                    .pos(v, "VERB")
                    .category_in(cat, &VERB_TRIGGERS)
                    .proposition(p)
                    .neq(p, v);
                q.finish(self, CategorySource::Bound(cat), [p, v])
            }
        }
    }
}

/// Where a rule's category comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategorySource {
    Fixed(Category),
    /// The label bound to this variable.
    Bound(Var),
}

#[derive(Clone, Debug)]
pub struct Rule {
    kind: RuleKind,
    query: Query,
    category: CategorySource,
    /// Variables projected into `node_ids`; the first one survives the merge.
    projection: Vec<Var>,
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn category(&self) -> CategorySource {
        self.category
    }

    /// First solution of the rule's query, as a transformation.
    pub fn first_match(&self, facts: &FactBase, cap: usize) -> Result<Option<Transformation>, QueryError> {
        Ok(facts
            .solve_with_cap(&self.query, cap)?
            .find_map(|solution| self.transformation(&solution)))
    }

    fn transformation(&self, solution: &Solution) -> Option<Transformation> {
        let category = match self.category {
            CategorySource::Fixed(category) => category,
            CategorySource::Bound(var) => solution.text(var)?.parse().ok()?,
        };
        let node_ids = self
            .projection
            .iter()
            .map(|var| solution.node(*var))
            .collect::<Option<Vec<_>>>()?;
        Some(Transformation::new(self.name(), category, node_ids))
    }
}

/// [`QueryBuilder`] with the fact shapes the rules are written in.
struct RuleBuilder {
    inner: QueryBuilder,
}

impl RuleBuilder {
    fn new() -> Self {
        Self {
            inner: QueryBuilder::new(),
        }
    }

    fn var(&mut self, name: &str) -> Var {
        self.inner.var(name)
    }

    /// `daughter -rel-> head`
    fn head_rel(&mut self, daughter: Var, head: Var, rel: impl Into<Term>) -> &mut Self {
        self.inner
            .member(HEAD_REL, [daughter.into(), head.into(), rel.into()]);
        self
    }

    fn labeled(&mut self, id: Var, label: impl Into<Label>) -> &mut Self {
        let Label(term) = label.into();
        self.inner.member(ID_LABEL, [id.into(), term]);
        self
    }

    fn proposition(&mut self, id: Var) -> &mut Self {
        self.inner
            .member(ID_LABEL, [id.into(), PROPOSITION_LABEL.into()]);
        self
    }

    fn pos(&mut self, id: Var, pos: impl Into<Term>) -> &mut Self {
        self.inner.member(ID_POS, [id.into(), pos.into()]);
        self
    }

    fn lemma(&mut self, id: Var, lemma: impl Into<Term>) -> &mut Self {
        self.inner.member(ID_LEMMA, [id.into(), lemma.into()]);
        self
    }

    fn one_of(&mut self, var: Var, options: impl IntoIterator<Item = &'static str>) -> &mut Self {
        self.inner.one_of(var, options);
        self
    }

    fn category_in<'a>(&mut self, var: Var, categories: impl IntoIterator<Item = &'a Category>) -> &mut Self {
        self.inner
            .one_of(var, categories.into_iter().map(|c| c.as_str()));
        self
    }

    fn neq(&mut self, a: Var, b: Var) -> &mut Self {
        self.inner.neq(a, b);
        self
    }

    fn finish<const N: usize>(self, kind: RuleKind, category: CategorySource, projection: [Var; N]) -> Rule {
        Rule {
            kind,
            query: self.inner.build(),
            category,
            projection: projection.to_vec(),
        }
    }
}

/// A label goal's second argument: a fixed category or a variable.
struct Label(Term);

impl From<Category> for Label {
    fn from(category: Category) -> Self {
        Label(category.as_str().into())
    }
}

impl From<Var> for Label {
    fn from(var: Var) -> Self {
        Label(var.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Goal;

    #[test]
    fn test_priority_is_complete() {
        let mut names: Vec<&str> = RuleKind::PRIORITY.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "Double PP Source");
        assert_eq!(names[13], "Broken Pobj");
        names.dedup();
        // the two conditional consequent rules share a name
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_every_rule_requires_a_proposition() {
        for kind in RuleKind::PRIORITY {
            let rule = kind.rule();
            let has_prop = rule.query().goals().iter().any(|g| {
                matches!(g, Goal::Member { relation, args }
                    if relation == ID_LABEL && args.get(1) == Some(&Term::from(PROPOSITION_LABEL)))
            });
            assert!(has_prop, "{:?}", kind);
            assert!(rule.projection.len() >= 2, "{:?}", kind);
        }
    }

    #[test]
    fn test_rules_read_derived_relations() {
        use crate::query::ID_TEXT;

        let derived = [ID_TEXT, ID_LEMMA, ID_POS, ID_LABEL, HEAD_REL];
        for kind in RuleKind::PRIORITY {
            let rule = kind.rule();
            for relation in rule.query().relations() {
                assert!(derived.contains(&relation), "{:?} reads {}", kind, relation);
            }
            assert!(rule.query().relations().any(|r| r == HEAD_REL), "{:?}", kind);
        }
    }

    #[test]
    fn test_bound_categories_are_restricted() {
        for kind in RuleKind::PRIORITY {
            let rule = kind.rule();
            if let CategorySource::Bound(var) = rule.category() {
                let restricted = rule.query().goals().iter().any(|g| {
                    matches!(g, Goal::OneOf { term, .. } if *term == Term::Var(var))
                });
                assert!(restricted, "{:?}", kind);
            }
        }
    }
}
