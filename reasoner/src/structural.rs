//! Structural consistency checking.
//!
//! [`StructuralReasoner`] computes everything it knows at construction time
//! over the whole imports closure:
//! - the class hierarchy from `rdfs:subClassOf`, `owl:equivalentClass` and
//!   the named operands of `owl:intersectionOf`
//! - property assertions saturated over `rdfs:subPropertyOf`,
//!   `owl:equivalentProperty`, `owl:inverseOf`, symmetric and transitive
//!   properties
//! - individual types from `rdf:type`, `rdfs:domain` and `rdfs:range`,
//!   merged over `owl:sameAs`
//!
//! The ontology is inconsistent when any individual clashes: it is an
//! instance of `owl:Nothing` or of two disjoint classes, it is both the same
//! as and different from another individual, or it has two values for a
//! functional data property. This is sound for the constructs above but not
//! complete for OWL 2 DL: restrictions and other anonymous class expressions
//! are not expanded.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use owlet_ontology::model::list_items;
use owlet_ontology::vocab::{self, short_form};
use owlet_ontology::{Literal, Ontology, Term, Triple};

use crate::error::ReasonerError;
use crate::graph::{Digraph, UnionFind};
use crate::{Reasoner, ReasonerFactory};

/// One reason an ontology is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clash {
    /// An individual is an instance of `owl:Nothing`.
    Nothing {
        /// The individual.
        individual: Term,
    },
    /// An individual is an instance of two disjoint classes.
    Disjoint {
        /// The individual.
        individual: Term,
        /// First class of the disjoint pair.
        first: Term,
        /// Second class of the disjoint pair.
        second: Term,
    },
    /// Two individuals are declared different but are the same.
    SameAndDifferent {
        /// First individual.
        first: Term,
        /// Second individual.
        second: Term,
    },
    /// An individual has two values for a functional data property.
    Functional {
        /// The individual.
        individual: Term,
        /// The functional property.
        property: String,
        /// First value.
        first: Literal,
        /// Second value.
        second: Literal,
    },
}

impl fmt::Display for Clash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clash::Nothing { individual } => {
                write!(f, "{} is an instance of owl:Nothing", name(individual))
            }
            Clash::Disjoint {
                individual,
                first,
                second,
            } => write!(
                f,
                "{} is an instance of disjoint classes {} and {}",
                name(individual),
                name(first),
                name(second)
            ),
            Clash::SameAndDifferent { first, second } => write!(
                f,
                "{} and {} are both the same and different",
                name(first),
                name(second)
            ),
            Clash::Functional {
                individual,
                property,
                first,
                second,
            } => write!(
                f,
                "{} has values {} and {} for functional property {}",
                name(individual),
                Term::Literal(first.clone()),
                Term::Literal(second.clone()),
                short_form(property)
            ),
        }
    }
}

fn name(term: &Term) -> String {
    match term {
        Term::Iri(iri) => short_form(iri),
        other => other.to_string(),
    }
}

/// Builds [`StructuralReasoner`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralReasonerFactory;

impl ReasonerFactory for StructuralReasonerFactory {
    type Reasoner = StructuralReasoner;

    fn name(&self) -> &str {
        "structural"
    }

    fn create_reasoner(&self, ontology: &Ontology) -> Result<StructuralReasoner, ReasonerError> {
        StructuralReasoner::new(ontology)
    }
}

/// Schema-level facts read from the statements in one pass.
#[derive(Default)]
struct Schema {
    classes: BTreeSet<String>,
    /// Terms used as classes, properties or ontology headers.
    schema_terms: HashSet<Term>,
    annotation_properties: HashSet<String>,
    functional: HashSet<String>,
    symmetric: HashSet<String>,
    transitive: HashSet<String>,
    class_graph: Digraph,
    property_graph: Digraph,
    inverses: HashMap<String, BTreeSet<String>>,
    domains: HashMap<String, BTreeSet<Term>>,
    ranges: HashMap<String, BTreeSet<Term>>,
    /// Unordered pairs, smaller term first.
    disjoint: BTreeSet<(Term, Term)>,
    all_disjoint: Vec<Term>,
    all_different: Vec<Term>,
}

fn is_builtin(iri: &str) -> bool {
    iri.starts_with(vocab::OWL) || iri.starts_with(vocab::RDF) || iri.starts_with(vocab::RDFS)
}

/// Whether `object` in `?s rdf:type object` makes `?s` an individual.
fn is_individual_type(object: &Term) -> bool {
    match object {
        Term::Iri(iri) => {
            !is_builtin(iri)
                || iri == vocab::OWL_THING
                || iri == vocab::OWL_NOTHING
                || iri == vocab::OWL_NAMED_INDIVIDUAL
        }
        Term::BlankNode(_) => true,
        Term::Literal(_) => false,
    }
}

fn ordered(a: Term, b: Term) -> (Term, Term) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn read_list(triples: &[Triple], head: &Term, axiom: &str) -> Result<Vec<Term>, ReasonerError> {
    list_items(triples, head).ok_or_else(|| ReasonerError::MalformedList {
        node: head.to_string(),
        axiom: short_form(axiom),
    })
}

impl Schema {
    fn read(triples: &[Triple]) -> Result<Self, ReasonerError> {
        let mut schema = Schema::default();
        for t in triples {
            let (s, o) = (&t.subject, &t.object);
            match t.predicate.as_str() {
                vocab::RDF_TYPE => schema.read_type(s, o),
                vocab::RDFS_SUBCLASS_OF => {
                    schema.class_edge(s, o);
                }
                vocab::OWL_EQUIVALENT_CLASS => {
                    schema.class_edge(s, o);
                    schema.class_edge(o, s);
                }
                vocab::OWL_DISJOINT_WITH | vocab::OWL_COMPLEMENT_OF => {
                    schema.mark_schema(s);
                    schema.mark_schema(o);
                    schema.disjoint.insert(ordered(s.clone(), o.clone()));
                }
                vocab::OWL_INTERSECTION_OF => {
                    for operand in read_list(triples, o, vocab::OWL_INTERSECTION_OF)? {
                        schema.class_edge(s, &operand);
                    }
                }
                vocab::RDFS_SUBPROPERTY_OF => schema.property_edge(s, o),
                vocab::OWL_EQUIVALENT_PROPERTY => {
                    schema.property_edge(s, o);
                    schema.property_edge(o, s);
                }
                vocab::OWL_INVERSE_OF => {
                    if let (Some(p), Some(q)) = (s.as_iri(), o.as_iri()) {
                        schema.inverses.entry(p.to_owned()).or_default().insert(q.to_owned());
                        schema.inverses.entry(q.to_owned()).or_default().insert(p.to_owned());
                    }
                    schema.mark_schema(s);
                    schema.mark_schema(o);
                }
                vocab::RDFS_DOMAIN | vocab::RDFS_RANGE => {
                    if let Some(p) = s.as_iri() {
                        let target = if t.predicate == vocab::RDFS_DOMAIN {
                            &mut schema.domains
                        } else {
                            &mut schema.ranges
                        };
                        target.entry(p.to_owned()).or_default().insert(o.clone());
                    }
                    schema.mark_schema(s);
                }
                _ => {}
            }
        }

        for node in std::mem::take(&mut schema.all_disjoint) {
            for head in owlet_ontology::model::objects(triples, &node, vocab::OWL_MEMBERS) {
                let members = read_list(triples, head, vocab::OWL_ALL_DISJOINT_CLASSES)?;
                for (i, a) in members.iter().enumerate() {
                    for b in &members[i + 1..] {
                        schema.disjoint.insert(ordered(a.clone(), b.clone()));
                    }
                }
            }
        }
        Ok(schema)
    }

    fn read_type(&mut self, subject: &Term, object: &Term) {
        let Some(kind) = object.as_iri() else { return };
        if !is_individual_type(object) {
            self.mark_schema(subject);
        }
        match kind {
            vocab::OWL_CLASS | vocab::RDFS_CLASS => {
                if let Some(iri) = subject.as_iri().filter(|i| !is_builtin(i)) {
                    self.classes.insert(iri.to_owned());
                }
            }
            vocab::OWL_ANNOTATION_PROPERTY => self.insert_property(subject, |s| &mut s.annotation_properties),
            vocab::OWL_FUNCTIONAL_PROPERTY => self.insert_property(subject, |s| &mut s.functional),
            vocab::OWL_SYMMETRIC_PROPERTY => self.insert_property(subject, |s| &mut s.symmetric),
            vocab::OWL_TRANSITIVE_PROPERTY => self.insert_property(subject, |s| &mut s.transitive),
            vocab::OWL_ALL_DISJOINT_CLASSES => self.all_disjoint.push(subject.clone()),
            vocab::OWL_ALL_DIFFERENT => self.all_different.push(subject.clone()),
            _ => {}
        }
    }

    fn insert_property(&mut self, subject: &Term, set: impl FnOnce(&mut Self) -> &mut HashSet<String>) {
        if let Some(iri) = subject.as_iri() {
            set(self).insert(iri.to_owned());
        }
    }

    fn mark_schema(&mut self, term: &Term) {
        if let Term::Iri(iri) = term {
            if is_builtin(iri) {
                return;
            }
        }
        self.schema_terms.insert(term.clone());
    }

    fn class_edge(&mut self, sub: &Term, sup: &Term) {
        self.mark_schema(sub);
        self.mark_schema(sup);
        for term in [sub, sup] {
            if let Some(iri) = term.as_iri().filter(|i| !is_builtin(i)) {
                self.classes.insert(iri.to_owned());
            }
        }
        self.class_graph.add_edge(sub.clone(), sup.clone());
    }

    fn property_edge(&mut self, sub: &Term, sup: &Term) {
        self.mark_schema(sub);
        self.mark_schema(sup);
        self.property_graph.add_edge(sub.clone(), sup.clone());
    }

    /// Whether `?subject predicate ?o` is a property assertion between
    /// individuals (or an individual and a literal).
    fn is_assertion(&self, predicate: &str, subject: &Term) -> bool {
        !is_builtin(predicate)
            && !self.annotation_properties.contains(predicate)
            && !self.schema_terms.contains(subject)
    }
}

type ObjectFact = (Term, String, Term);

/// Consistency checker over named classes, property assertions and
/// individual equality.
#[derive(Debug, Clone)]
pub struct StructuralReasoner {
    classes: BTreeSet<String>,
    supers: HashMap<Term, BTreeSet<Term>>,
    disjoint: BTreeSet<(Term, Term)>,
    same: UnionFind,
    individuals: BTreeSet<Term>,
    types: BTreeMap<Term, BTreeSet<Term>>,
    object_values: BTreeMap<(Term, String), BTreeSet<Term>>,
    data_values: BTreeMap<(Term, String), BTreeSet<Literal>>,
    clashes: Vec<Clash>,
}

impl StructuralReasoner {
    /// Builds the reasoner, computing the hierarchy, all individual types
    /// and all clashes.
    ///
    /// # Errors
    ///
    /// Returns [`ReasonerError::MalformedList`] if an `owl:intersectionOf`
    /// or `owl:AllDisjointClasses` list is not a proper `rdf:List`.
    pub fn new(ontology: &Ontology) -> Result<Self, ReasonerError> {
        let triples: Vec<Triple> = ontology.closure_triples().cloned().collect();
        let mut schema = Schema::read(&triples)?;
        let supers = schema.class_graph.closure();
        let property_supers = schema.property_graph.closure();

        let mut same = UnionFind::default();
        let mut individuals = BTreeSet::new();
        let mut asserted_types = Vec::new();
        let mut object_facts = Vec::new();
        let mut data_facts = Vec::new();
        let mut different = Vec::new();

        for t in &triples {
            match t.predicate.as_str() {
                vocab::RDF_TYPE => {
                    if is_individual_type(&t.object) && !schema.schema_terms.contains(&t.subject) {
                        individuals.insert(t.subject.clone());
                        if !t.object.is(vocab::OWL_NAMED_INDIVIDUAL) {
                            asserted_types.push((t.subject.clone(), t.object.clone()));
                        }
                    }
                }
                vocab::OWL_SAME_AS => {
                    same.union(&t.subject, &t.object);
                    individuals.extend([t.subject.clone(), t.object.clone()]);
                }
                vocab::OWL_DIFFERENT_FROM => {
                    different.push((t.subject.clone(), t.object.clone()));
                    individuals.extend([t.subject.clone(), t.object.clone()]);
                }
                p if schema.is_assertion(p, &t.subject) => match &t.object {
                    Term::Literal(value) => {
                        individuals.insert(t.subject.clone());
                        data_facts.push((t.subject.clone(), t.predicate.clone(), value.clone()));
                    }
                    object => {
                        individuals.extend([t.subject.clone(), object.clone()]);
                        object_facts.push((t.subject.clone(), t.predicate.clone(), object.clone()));
                    }
                },
                _ => {}
            }
        }

        for node in std::mem::take(&mut schema.all_different) {
            for predicate in [vocab::OWL_DISTINCT_MEMBERS, vocab::OWL_MEMBERS] {
                for head in owlet_ontology::model::objects(&triples, &node, predicate) {
                    let members = read_list(&triples, head, vocab::OWL_ALL_DIFFERENT)?;
                    individuals.extend(members.iter().cloned());
                    for (i, a) in members.iter().enumerate() {
                        for b in &members[i + 1..] {
                            different.push((a.clone(), b.clone()));
                        }
                    }
                }
            }
        }

        let canonical: BTreeSet<ObjectFact> = object_facts
            .into_iter()
            .map(|(s, p, o)| (same.find(&s), p, same.find(&o)))
            .collect();
        let object_facts = saturate(canonical, &schema, &property_supers);

        let mut data_values: BTreeMap<(Term, String), BTreeSet<Literal>> = BTreeMap::new();
        for (s, p, value) in data_facts {
            let s = same.find(&s);
            for q in property_closure(&property_supers, &p) {
                data_values.entry((s.clone(), q)).or_default().insert(value.clone());
            }
        }

        let individuals: BTreeSet<Term> = individuals.iter().map(|i| same.find(i)).collect();
        let thing = Term::iri(vocab::OWL_THING);
        let mut types: BTreeMap<Term, BTreeSet<Term>> = individuals
            .iter()
            .map(|i| (i.clone(), BTreeSet::from([thing.clone()])))
            .collect();
        let mut add_type = |individual: Term, class: &Term| {
            types.entry(individual).or_default().insert(class.clone());
        };
        for (i, class) in &asserted_types {
            add_type(same.find(i), class);
        }
        for (s, p, o) in &object_facts {
            for class in schema.domains.get(p).into_iter().flatten() {
                add_type(s.clone(), class);
            }
            for class in schema.ranges.get(p).into_iter().flatten() {
                add_type(o.clone(), class);
            }
        }
        for (s, p) in data_values.keys() {
            for class in schema.domains.get(p).into_iter().flatten() {
                add_type(s.clone(), class);
            }
        }
        for set in types.values_mut() {
            let closed: BTreeSet<Term> = set
                .iter()
                .flat_map(|c| supers.get(c).cloned().unwrap_or_else(|| BTreeSet::from([c.clone()])))
                .collect();
            set.extend(closed);
        }

        let mut object_values: BTreeMap<(Term, String), BTreeSet<Term>> = BTreeMap::new();
        for (s, p, o) in object_facts {
            object_values.entry((s, p)).or_default().insert(o);
        }

        let mut classes = schema.classes;
        for class in asserted_types.iter().filter_map(|(_, c)| c.as_iri()) {
            if !is_builtin(class) {
                classes.insert(class.to_owned());
            }
        }

        let mut reasoner = Self {
            classes,
            supers,
            disjoint: schema.disjoint,
            same,
            individuals,
            types,
            object_values,
            data_values,
            clashes: Vec::new(),
        };
        reasoner.clashes = reasoner.find_clashes(&different, &schema.functional);
        tracing::debug!(
            ontology = %ontology.id,
            classes = reasoner.classes.len(),
            individuals = reasoner.individuals.len(),
            clashes = reasoner.clashes.len(),
            "structural reasoner ready"
        );
        Ok(reasoner)
    }

    fn find_clashes(&self, different: &[(Term, Term)], functional: &HashSet<String>) -> Vec<Clash> {
        let nothing = Term::iri(vocab::OWL_NOTHING);
        let mut clashes = Vec::new();
        for (individual, types) in &self.types {
            if types.contains(&nothing) {
                clashes.push(Clash::Nothing {
                    individual: individual.clone(),
                });
            }
            for (first, second) in &self.disjoint {
                if types.contains(first) && types.contains(second) {
                    clashes.push(Clash::Disjoint {
                        individual: individual.clone(),
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }
        for (first, second) in different {
            if self.same.same(first, second) {
                clashes.push(Clash::SameAndDifferent {
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
        for ((individual, property), values) in &self.data_values {
            if !functional.contains(property) {
                continue;
            }
            let mut iter = values.iter();
            if let (Some(first), Some(second)) = (iter.next(), iter.next()) {
                clashes.push(Clash::Functional {
                    individual: individual.clone(),
                    property: property.clone(),
                    first: first.clone(),
                    second: second.clone(),
                });
            }
        }
        clashes
    }

    /// Everything that makes the ontology inconsistent; empty if consistent.
    #[must_use]
    pub fn clashes(&self) -> &[Clash] {
        &self.clashes
    }

    /// Named classes, sorted.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Individuals, one representative per `owl:sameAs` group, sorted.
    pub fn individuals(&self) -> impl Iterator<Item = &Term> {
        self.individuals.iter()
    }

    fn supers_of(&self, class: &Term) -> BTreeSet<Term> {
        let mut set = self
            .supers
            .get(class)
            .cloned()
            .unwrap_or_else(|| BTreeSet::from([class.clone()]));
        set.insert(Term::iri(vocab::OWL_THING));
        set
    }

    fn subsumes(&self, sup: &Term, sub: &Term) -> bool {
        self.supers_of(sub).contains(sup)
    }

    fn equivalent(&self, a: &Term, b: &Term) -> bool {
        self.subsumes(a, b) && self.subsumes(b, a)
    }

    /// Keeps the candidates no other candidate is strictly below.
    fn most_specific(&self, candidates: Vec<Term>) -> Vec<Term> {
        candidates
            .iter()
            .filter(|x| {
                !candidates
                    .iter()
                    .any(|y| y != *x && self.subsumes(x, y) && !self.equivalent(x, y))
            })
            .cloned()
            .collect()
    }

    /// Keeps the candidates no other candidate is strictly above.
    fn most_general(&self, candidates: Vec<Term>) -> Vec<Term> {
        candidates
            .iter()
            .filter(|x| {
                !candidates
                    .iter()
                    .any(|y| y != *x && self.subsumes(y, x) && !self.equivalent(x, y))
            })
            .cloned()
            .collect()
    }

    fn is_unsatisfiable(&self, class: &Term) -> bool {
        let supers = self.supers_of(class);
        supers.contains(&Term::iri(vocab::OWL_NOTHING))
            || self
                .disjoint
                .iter()
                .any(|(a, b)| supers.contains(a) && supers.contains(b))
    }

    /// Named classes that can have no instances.
    #[must_use]
    pub fn unsatisfiable_classes(&self) -> Vec<&str> {
        self.classes
            .iter()
            .filter(|c| self.is_unsatisfiable(&Term::iri(c.as_str())))
            .map(String::as_str)
            .collect()
    }

    /// Named classes equivalent to `class`, `class` excluded.
    #[must_use]
    pub fn equivalent_classes(&self, class: &str) -> Vec<String> {
        let c = Term::iri(class);
        self.supers_of(&c)
            .into_iter()
            .filter(|s| s != &c && self.equivalent(s, &c))
            .filter_map(|s| s.as_iri().map(str::to_owned))
            .collect()
    }

    /// Named super classes of `class`, equivalent classes excluded. With
    /// `direct`, only the most specific ones.
    #[must_use]
    pub fn super_classes(&self, class: &str, direct: bool) -> Vec<String> {
        let c = Term::iri(class);
        let candidates: Vec<Term> = self
            .supers_of(&c)
            .into_iter()
            .filter(|s| s.as_iri().is_some() && !self.equivalent(s, &c))
            .collect();
        let picked = if direct {
            self.most_specific(candidates)
        } else {
            candidates
        };
        iris(picked)
    }

    /// Named sub classes of `class`, equivalent classes excluded. With
    /// `direct`, only the most general ones.
    #[must_use]
    pub fn sub_classes(&self, class: &str, direct: bool) -> Vec<String> {
        let c = Term::iri(class);
        let candidates: Vec<Term> = self
            .classes
            .iter()
            .map(|x| Term::iri(x.as_str()))
            .filter(|x| self.subsumes(&c, x) && !self.equivalent(x, &c))
            .collect();
        let picked = if direct {
            self.most_general(candidates)
        } else {
            candidates
        };
        iris(picked)
    }

    /// Named types of an individual. With `direct`, only the most specific.
    #[must_use]
    pub fn types(&self, individual: &Term, direct: bool) -> Vec<String> {
        let Some(types) = self.types.get(&self.same.find(individual)) else {
            return Vec::new();
        };
        let named: Vec<Term> = types.iter().filter(|t| t.as_iri().is_some()).cloned().collect();
        let picked = if direct {
            self.most_specific(named)
        } else {
            named
        };
        iris(picked)
    }

    /// Instances of `class`. With `direct`, only individuals for which
    /// `class` (or an equivalent) is a most specific type.
    #[must_use]
    pub fn instances(&self, class: &str, direct: bool) -> Vec<Term> {
        let c = Term::iri(class);
        self.individuals
            .iter()
            .filter(|i| {
                if direct {
                    self.types(i, true)
                        .iter()
                        .any(|t| self.equivalent(&Term::iri(t.as_str()), &c))
                } else {
                    c.is(vocab::OWL_THING)
                        || self.types.get(*i).is_some_and(|types| types.contains(&c))
                }
            })
            .cloned()
            .collect()
    }

    /// Values of an object property for an individual, inferred ones included.
    #[must_use]
    pub fn object_property_values(&self, individual: &Term, property: &str) -> Vec<Term> {
        self.object_values
            .get(&(self.same.find(individual), property.to_owned()))
            .map(|v| v.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Values of a data property for an individual, sub-property values included.
    #[must_use]
    pub fn data_property_values(&self, individual: &Term, property: &str) -> Vec<Literal> {
        self.data_values
            .get(&(self.same.find(individual), property.to_owned()))
            .map(|v| v.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Object properties with at least one value for an individual.
    #[must_use]
    pub fn object_properties_of(&self, individual: &Term) -> Vec<&str> {
        keys_of(&self.object_values, &self.same.find(individual))
    }

    /// Data properties with at least one value for an individual.
    #[must_use]
    pub fn data_properties_of(&self, individual: &Term) -> Vec<&str> {
        keys_of(&self.data_values, &self.same.find(individual))
    }
}

fn keys_of<'a, V>(map: &'a BTreeMap<(Term, String), V>, subject: &Term) -> Vec<&'a str> {
    map.range((subject.clone(), String::new())..)
        .take_while(|((s, _), _)| s == subject)
        .map(|((_, p), _)| p.as_str())
        .collect()
}

impl Reasoner for StructuralReasoner {
    fn is_consistent(&self) -> bool {
        self.clashes.is_empty()
    }
}

fn iris(terms: Vec<Term>) -> Vec<String> {
    terms
        .into_iter()
        .filter_map(|t| match t {
            Term::Iri(iri) => Some(iri),
            _ => None,
        })
        .collect()
}

/// `property` and all of its super properties.
fn property_closure(supers: &HashMap<Term, BTreeSet<Term>>, property: &str) -> Vec<String> {
    match supers.get(&Term::iri(property)) {
        Some(set) => set.iter().filter_map(|t| t.as_iri().map(str::to_owned)).collect(),
        None => vec![property.to_owned()],
    }
}

/// Applies the property rules until no new assertion appears.
fn saturate(
    mut facts: BTreeSet<ObjectFact>,
    schema: &Schema,
    property_supers: &HashMap<Term, BTreeSet<Term>>,
) -> BTreeSet<ObjectFact> {
    loop {
        let mut derived = Vec::new();
        {
            let mut by_subject: HashMap<(&Term, &str), Vec<&Term>> = HashMap::new();
            for (s, p, o) in &facts {
                by_subject.entry((s, p.as_str())).or_default().push(o);
            }
            for (s, p, o) in &facts {
                for q in property_closure(property_supers, p) {
                    derived.push((s.clone(), q, o.clone()));
                }
                for q in schema.inverses.get(p).into_iter().flatten() {
                    derived.push((o.clone(), q.clone(), s.clone()));
                }
                if schema.symmetric.contains(p) {
                    derived.push((o.clone(), p.clone(), s.clone()));
                }
                if schema.transitive.contains(p) {
                    for x in by_subject.get(&(o, p.as_str())).into_iter().flatten() {
                        derived.push((s.clone(), p.clone(), (*x).clone()));
                    }
                }
            }
        }
        let before = facts.len();
        facts.extend(derived);
        if facts.len() == before {
            return facts;
        }
    }
}
