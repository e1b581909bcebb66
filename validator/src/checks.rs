//! Report-producing checks over a loaded ontology and its reasoner.
//!
//! - `restrictions`: every `owl:Restriction` in the imports closure is well formed
//! - `consistency`: the reasoner found no clash
//! - `satisfiability`: no named class is unsatisfiable (warning only)

use owlet_ontology::restrictions;
use owlet_ontology::vocab::short_form;
use owlet_ontology::Ontology;
use owlet_reasoner::{Reasoner, StructuralReasoner};

use crate::report::{CheckResult, Report};

/// Lints the restrictions of every document in the imports closure.
#[must_use]
pub fn restriction_report(ontology: &Ontology) -> Report {
    let mut report = Report::new();
    for doc in ontology.closure() {
        let check = format!("restrictions/{}", doc.display_name());
        let bad = restrictions::check(&doc.triples);
        let total = restrictions::all_restrictions(&doc.triples).len();
        if bad.is_empty() {
            report.push(CheckResult::pass(
                check,
                format!("{total} restriction(s), all well formed"),
            ));
            continue;
        }
        let (errors, warnings): (Vec<_>, Vec<_>) = bad.into_iter().partition(|b| b.issue.is_error());
        let render = |found: Vec<restrictions::BadRestriction>| -> Vec<String> {
            found
                .iter()
                .map(|b| format!("{}\n{}", b, restrictions::describe(&doc.triples, &b.node)))
                .collect()
        };
        if !errors.is_empty() {
            report.push(CheckResult::fail_with_details(
                check.clone(),
                format!("{} of {total} restriction(s) malformed", errors.len()),
                render(errors),
            ));
        }
        if !warnings.is_empty() {
            report.push(CheckResult::warn_with_details(
                check,
                format!("{} restriction(s) with questionable owl:onClass", warnings.len()),
                render(warnings),
            ));
        }
    }
    report
}

/// Reports the reasoner's verdict, one detail line per clash.
#[must_use]
pub fn consistency_report(reasoner: &StructuralReasoner) -> Report {
    let mut report = Report::new();
    if reasoner.is_consistent() {
        report.push(CheckResult::pass("consistency", "ontology is consistent"));
    } else {
        report.push(CheckResult::fail_with_details(
            "consistency",
            format!("ontology is inconsistent ({} clash(es))", reasoner.clashes().len()),
            reasoner.clashes().iter().map(ToString::to_string).collect(),
        ));
    }
    let unsatisfiable = reasoner.unsatisfiable_classes();
    if unsatisfiable.is_empty() {
        report.push(CheckResult::pass("satisfiability", "every named class is satisfiable"));
    } else {
        report.push(CheckResult::warn_with_details(
            "satisfiability",
            format!("{} unsatisfiable class(es)", unsatisfiable.len()),
            unsatisfiable.into_iter().map(short_form).collect(),
        ));
    }
    report
}
