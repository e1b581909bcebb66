//! Graph helpers: reachability over a subsumption graph and a union-find
//! for `owl:sameAs` merging.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use owlet_ontology::Term;

/// Directed graph over terms.
#[derive(Debug, Default, Clone)]
pub(crate) struct Digraph {
    edges: BTreeMap<Term, BTreeSet<Term>>,
}

impl Digraph {
    pub(crate) fn add_edge(&mut self, from: Term, to: Term) {
        self.edges.entry(from).or_default().insert(to);
    }

    pub(crate) fn nodes(&self) -> BTreeSet<&Term> {
        self.edges
            .iter()
            .flat_map(|(from, to)| std::iter::once(from).chain(to.iter()))
            .collect()
    }

    /// Every node reachable from `start`, `start` included.
    pub(crate) fn reachable(&self, start: &Term) -> BTreeSet<Term> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![start.clone()];
        while let Some(node) = stack.pop() {
            if !seen.insert(node.clone()) {
                continue;
            }
            if let Some(next) = self.edges.get(&node) {
                stack.extend(next.iter().filter(|n| !seen.contains(*n)).cloned());
            }
        }
        seen
    }

    /// Reflexive-transitive closure for every node of the graph.
    pub(crate) fn closure(&self) -> HashMap<Term, BTreeSet<Term>> {
        self.nodes()
            .into_iter()
            .map(|n| (n.clone(), self.reachable(n)))
            .collect()
    }
}

/// Disjoint sets of terms. The representative of a set is its smallest term.
#[derive(Debug, Default, Clone)]
pub(crate) struct UnionFind {
    parent: HashMap<Term, Term>,
}

impl UnionFind {
    pub(crate) fn find(&self, term: &Term) -> Term {
        let mut current = term;
        while let Some(parent) = self.parent.get(current) {
            current = parent;
        }
        current.clone()
    }

    pub(crate) fn union(&mut self, a: &Term, b: &Term) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent.insert(child, root);
    }

    pub(crate) fn same(&self, a: &Term, b: &Term) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(name: &str) -> Term {
        Term::iri(format!("http://example.org/{name}"))
    }

    #[test]
    fn reachability_is_reflexive_and_transitive() {
        let mut g = Digraph::default();
        g.add_edge(t("a"), t("b"));
        g.add_edge(t("b"), t("c"));
        let r = g.reachable(&t("a"));
        assert!(r.contains(&t("a")));
        assert!(r.contains(&t("c")));
        assert!(!g.reachable(&t("c")).contains(&t("a")));
    }

    #[test]
    fn cycles_terminate() {
        let mut g = Digraph::default();
        g.add_edge(t("a"), t("b"));
        g.add_edge(t("b"), t("a"));
        let closure = g.closure();
        assert_eq!(closure.len(), 2);
        assert_eq!(closure[&t("b")].len(), 2);
    }

    #[test]
    fn union_find_picks_smallest_representative() {
        let mut uf = UnionFind::default();
        uf.union(&t("c"), &t("b"));
        uf.union(&t("b"), &t("a"));
        assert_eq!(uf.find(&t("c")), t("a"));
        assert!(uf.same(&t("a"), &t("c")));
        assert!(!uf.same(&t("a"), &t("d")));
    }
}
