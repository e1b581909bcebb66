//! Checking and repairing `owl:Restriction` nodes.
//!
//! A well-formed restriction has exactly one `owl:onProperty` and exactly
//! one constraint from [`RELATIONS`]. A common authoring mistake is to pack
//! several constraints into one restriction node; [`repair`] splits such a
//! node into one restriction per constraint and re-points every
//! `rdfs:subClassOf` edge from the node's children at the new restrictions.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::model::{objects, Term, Triple};
use crate::vocab::{self, short_form};

/// Properties of a restriction that carry the actual constraint.
pub const RELATIONS: &[&str] = &[
    vocab::OWL_ALL_VALUES_FROM,
    vocab::OWL_SOME_VALUES_FROM,
    vocab::OWL_MIN_CARDINALITY,
    vocab::OWL_MAX_CARDINALITY,
    vocab::OWL_CARDINALITY,
    vocab::OWL_HAS_VALUE,
    vocab::OWL_QUALIFIED_CARDINALITY,
];

/// Cardinality constraints, the only ones `owl:onClass` may accompany.
pub const CARDINALITY_RELATIONS: &[&str] = &[
    vocab::OWL_MIN_CARDINALITY,
    vocab::OWL_MAX_CARDINALITY,
    vocab::OWL_CARDINALITY,
    vocab::OWL_QUALIFIED_CARDINALITY,
];

/// Properties copied onto every restriction produced by a repair instead of
/// being split off on their own.
const SHARED_PROPERTIES: &[&str] = &[
    vocab::RDF_TYPE,
    vocab::OWL_ON_PROPERTY,
    vocab::OWL_ON_CLASS,
    vocab::RDFS_COMMENT,
];

/// What is wrong with a restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestrictionIssue {
    /// No `owl:onProperty`.
    MissingOnProperty,
    /// None of [`RELATIONS`] is present.
    NoConstraint,
    /// More than one of [`RELATIONS`] is present (short forms, sorted).
    MultipleConstraints(Vec<String>),
    /// `owl:onClass` on a restriction that is not a cardinality restriction.
    /// Reported, but the restriction is still usable.
    OnClassWithoutCardinality,
}

impl RestrictionIssue {
    /// Whether the issue makes the restriction unusable.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, RestrictionIssue::OnClassWithoutCardinality)
    }
}

impl fmt::Display for RestrictionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestrictionIssue::MissingOnProperty => f.write_str("needs owl:onProperty"),
            RestrictionIssue::NoConstraint => write!(
                f,
                "has no constraint; exactly one of {} is required",
                RELATIONS.iter().map(|r| short_form(r)).collect::<Vec<_>>().join(", ")
            ),
            RestrictionIssue::MultipleConstraints(found) => {
                write!(f, "has multiple constraints: {}", found.join(", "))
            }
            RestrictionIssue::OnClassWithoutCardinality => {
                f.write_str("owl:onClass is only permissible in cardinality restrictions")
            }
        }
    }
}

/// A restriction node and its issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadRestriction {
    /// The restriction node.
    pub node: Term,
    /// What is wrong with it.
    pub issue: RestrictionIssue,
}

impl fmt::Display for BadRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "restriction {} {}", self.node, self.issue)
    }
}

/// Why a restriction could not be repaired automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepairError {
    /// The restriction does not name exactly one property.
    #[error("restriction {node} must have exactly one owl:onProperty, found {found}")]
    OnProperty {
        /// Restriction node (N-Triples form).
        node: String,
        /// Number of `owl:onProperty` values.
        found: usize,
    },
    /// The restriction carries more than one comment.
    #[error("restriction {node} has {found} rdfs:comment values, at most one is supported")]
    Comments {
        /// Restriction node (N-Triples form).
        node: String,
        /// Number of comments.
        found: usize,
    },
    /// Nothing is declared a subclass of the restriction.
    #[error("restriction {node} has no subclasses to re-point")]
    NoChildren {
        /// Restriction node (N-Triples form).
        node: String,
    },
}

/// Statements to add and remove to repair one restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairPlan {
    /// New statements.
    pub added: Vec<Triple>,
    /// Statements to delete.
    pub removed: Vec<Triple>,
}

/// Returns every node typed `owl:Restriction`, in first-occurrence order.
#[must_use]
pub fn all_restrictions(triples: &[Triple]) -> Vec<&Term> {
    let mut seen = HashSet::new();
    triples
        .iter()
        .filter(|t| t.predicate == vocab::RDF_TYPE && t.object.is(vocab::OWL_RESTRICTION))
        .map(|t| &t.subject)
        .filter(|s| seen.insert(*s))
        .collect()
}

/// Checks every restriction and returns one finding per problematic node.
#[must_use]
pub fn check(triples: &[Triple]) -> Vec<BadRestriction> {
    all_restrictions(triples)
        .into_iter()
        .filter_map(|node| {
            inspect(triples, node).map(|issue| BadRestriction {
                node: node.clone(),
                issue,
            })
        })
        .collect()
}

fn inspect(triples: &[Triple], node: &Term) -> Option<RestrictionIssue> {
    let mut has_on_property = false;
    let mut has_on_class = false;
    let mut cardinality = false;
    let mut relations = HashSet::new();
    for t in triples.iter().filter(|t| &t.subject == node) {
        let p = t.predicate.as_str();
        has_on_property |= p == vocab::OWL_ON_PROPERTY;
        has_on_class |= p == vocab::OWL_ON_CLASS;
        cardinality |= CARDINALITY_RELATIONS.contains(&p);
        if RELATIONS.contains(&p) {
            relations.insert(p);
        }
    }
    if !has_on_property {
        return Some(RestrictionIssue::MissingOnProperty);
    }
    match relations.len() {
        0 => Some(RestrictionIssue::NoConstraint),
        1 if has_on_class && !cardinality => Some(RestrictionIssue::OnClassWithoutCardinality),
        1 => None,
        _ => {
            let mut found: Vec<String> = relations.into_iter().map(short_form).collect();
            found.sort();
            Some(RestrictionIssue::MultipleConstraints(found))
        }
    }
}

/// Renders a restriction as indented text for reports.
#[must_use]
pub fn describe(triples: &[Triple], node: &Term) -> String {
    let mut out = String::new();
    for ty in objects(triples, node, vocab::RDF_TYPE) {
        out.push_str(&format!("{} a {}\n", node, render(ty)));
    }
    for t in triples.iter().filter(|t| &t.subject == node) {
        if t.predicate != vocab::RDF_TYPE && t.predicate != vocab::RDFS_COMMENT {
            out.push_str(&format!("\t{} {}\n", short_form(&t.predicate), render(&t.object)));
        }
    }
    for comment in objects(triples, node, vocab::RDFS_COMMENT) {
        out.push_str(&format!("\trdfs:comment {}\n", comment));
    }
    out
}

fn render(term: &Term) -> String {
    match term {
        Term::Iri(iri) => short_form(iri),
        other => other.to_string(),
    }
}

/// Plans the repair of one multi-constraint restriction.
///
/// `fresh` must return a blank node label not used anywhere in `triples`.
///
/// # Errors
///
/// Returns a [`RepairError`] if the restriction is too irregular to split.
pub fn plan_repair(
    triples: &[Triple],
    node: &Term,
    fresh: &mut dyn FnMut() -> String,
) -> Result<RepairPlan, RepairError> {
    let on_property: Vec<&Term> = objects(triples, node, vocab::OWL_ON_PROPERTY).collect();
    if on_property.len() != 1 {
        return Err(RepairError::OnProperty {
            node: node.to_string(),
            found: on_property.len(),
        });
    }
    let comments = objects(triples, node, vocab::RDFS_COMMENT).count();
    if comments > 1 {
        return Err(RepairError::Comments {
            node: node.to_string(),
            found: comments,
        });
    }
    let children: Vec<Term> = triples
        .iter()
        .filter(|t| t.predicate == vocab::RDFS_SUBCLASS_OF && &t.object == node)
        .map(|t| t.subject.clone())
        .collect();
    if children.is_empty() {
        return Err(RepairError::NoChildren {
            node: node.to_string(),
        });
    }

    let own: Vec<&Triple> = triples.iter().filter(|t| &t.subject == node).collect();
    let shared: Vec<&Triple> = own
        .iter()
        .copied()
        .filter(|t| SHARED_PROPERTIES.contains(&t.predicate.as_str()))
        .collect();

    let mut plan = RepairPlan {
        added: Vec::new(),
        removed: own.iter().map(|t| (*t).clone()).collect(),
    };
    let mut replacements = Vec::new();
    for constraint in own.iter().filter(|t| !SHARED_PROPERTIES.contains(&t.predicate.as_str())) {
        let replacement = Term::BlankNode(fresh());
        for s in &shared {
            // owl:onClass only stays with cardinality constraints.
            if s.predicate == vocab::OWL_ON_CLASS
                && !CARDINALITY_RELATIONS.contains(&constraint.predicate.as_str())
            {
                continue;
            }
            plan.added
                .push(Triple::new(replacement.clone(), s.predicate.clone(), s.object.clone()));
        }
        plan.added.push(Triple::new(
            replacement.clone(),
            constraint.predicate.clone(),
            constraint.object.clone(),
        ));
        tracing::info!(
            restriction = %node,
            replacement = %replacement,
            constraint = %short_form(&constraint.predicate),
            "splitting restriction"
        );
        replacements.push(replacement);
    }

    for child in children {
        plan.removed.push(Triple::new(
            child.clone(),
            vocab::RDFS_SUBCLASS_OF,
            node.clone(),
        ));
        for replacement in &replacements {
            plan.added.push(Triple::new(
                child.clone(),
                vocab::RDFS_SUBCLASS_OF,
                replacement.clone(),
            ));
        }
    }
    Ok(plan)
}

/// Repairs every multi-constraint restriction in `triples` and returns the
/// plans that were applied.
///
/// Restrictions with other issues are left alone: splitting cannot fix a
/// missing property or a missing constraint.
///
/// # Errors
///
/// Returns the first [`RepairError`]; `triples` is unchanged in that case.
pub fn repair(triples: &mut Vec<Triple>) -> Result<Vec<RepairPlan>, RepairError> {
    let current: &[Triple] = triples;
    let targets: Vec<Term> = check(current)
        .into_iter()
        .filter(|b| matches!(b.issue, RestrictionIssue::MultipleConstraints(_)))
        .map(|b| b.node)
        .collect();

    let mut used: HashSet<String> = current
        .iter()
        .flat_map(|t| [&t.subject, &t.object])
        .filter_map(|term| match term {
            Term::BlankNode(id) => Some(id.clone()),
            _ => None,
        })
        .collect();
    let mut counter = 0usize;
    let mut fresh = move || loop {
        counter += 1;
        let candidate = format!("repair{counter}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
    };

    let plans = targets
        .iter()
        .map(|node| plan_repair(current, node, &mut fresh))
        .collect::<Result<Vec<_>, _>>()?;

    let removed: HashSet<&Triple> = plans.iter().flat_map(|p| p.removed.iter()).collect();
    let mut repaired: Vec<Triple> = current
        .iter()
        .filter(|t| !removed.contains(t))
        .cloned()
        .collect();
    repaired.extend(plans.iter().flat_map(|p| p.added.iter().cloned()));
    *triples = repaired;
    Ok(plans)
}
