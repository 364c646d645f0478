use ontoview_core::ontology::{IsaEdge, OntologyIndex, Term, TermRole};

fn term(id: &str, label: &str) -> Term {
    Term::new(id, label, "", Vec::new())
}

fn edge(child: &str, parent: &str) -> IsaEdge {
    IsaEdge {
        child: child.to_string(),
        parent: parent.to_string(),
    }
}

/// The 4-term fixture: A is the root, B and C are children of A, D is a
/// child of B.
fn fixture() -> OntologyIndex {
    OntologyIndex::build(
        vec![
            term("A", "Root term"),
            term("B", "Branch term"),
            term("C", "Other branch"),
            term("D", "Leaf term"),
        ],
        vec![edge("B", "A"), edge("C", "A"), edge("D", "B")],
        "A",
    )
}

// =============================================================================
// Build / lookup
// =============================================================================

#[test]
fn test_lookup() {
    let index = fixture();

    assert_eq!(index.lookup("A").unwrap().label, "Root term");
    assert!(index.lookup("nonexistent").is_none());
}

#[test]
fn test_adjacency_symmetry() {
    let index = fixture();
    let ids = ["A", "B", "C", "D"];

    for id in ids {
        let t = index.lookup(id).unwrap();
        for parent_id in &t.parents {
            let parent = index.lookup(parent_id).unwrap();
            assert!(parent.children.contains(&t.id), "{parent_id} -> {id}");
        }
        for child_id in &t.children {
            let child = index.lookup(child_id).unwrap();
            assert!(child.parents.contains(&t.id), "{child_id} -> {id}");
        }
    }
}

#[test]
fn test_dangling_edges_dropped() {
    let index = OntologyIndex::build(
        vec![term("A", "Root"), term("B", "Child")],
        vec![edge("B", "A"), edge("B", "ghost"), edge("ghost", "A")],
        "A",
    );

    assert_eq!(index.stats().total_edges, 1);
    assert_eq!(index.lookup("A").unwrap().children, vec!["B"]);
    assert_eq!(index.lookup("B").unwrap().parents, vec!["A"]);
}

#[test]
fn test_duplicate_term_id_first_wins() {
    let index = OntologyIndex::build(
        vec![term("A", "First"), term("A", "Second")],
        Vec::new(),
        "A",
    );

    assert_eq!(index.len(), 1);
    assert_eq!(index.lookup("A").unwrap().label, "First");
}

#[test]
fn test_stats() {
    let stats = fixture().stats();

    assert_eq!(stats.total_nodes, 4);
    assert_eq!(stats.total_edges, 3);
    assert_eq!(stats.root_id, "A");
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_minimum_query_length() {
    let index = fixture();

    let hits = index.search("k", 1, 20);
    assert!(hits.terms.is_empty());
    assert_eq!(hits.total, 0);

    let hits = index.search("  r  ", 1, 20);
    assert_eq!(hits.total, 0, "whitespace does not count toward the minimum");
}

#[test]
fn test_search_matches_label_case_insensitively() {
    let index = fixture();

    let hits = index.search("BRANCH", 1, 20);
    assert_eq!(hits.total, 2);
}

#[test]
fn test_search_matches_short_id_and_synonyms() {
    let index = OntologyIndex::build(
        vec![
            Term::new(
                "http://purl.obolibrary.org/obo/HP_0000077",
                "Abnormality of the kidney",
                "",
                vec!["Renal anomalies".to_string()],
            ),
            term("X", "Unrelated"),
        ],
        Vec::new(),
        "X",
    );

    assert_eq!(index.search("hp_00000", 1, 20).total, 1);
    assert_eq!(index.search("renal", 1, 20).total, 1);
}

#[test]
fn test_search_exact_match_ranks_first() {
    // "Kidney disease" comes first in document order; the exact match must
    // still outrank it.
    let index = OntologyIndex::build(
        vec![
            term("1", "Kidney disease"),
            term("2", "Kidney"),
            term("3", "Polycystic kidney dysplasia"),
        ],
        Vec::new(),
        "1",
    );

    let hits = index.search("kidney", 1, 20);
    assert_eq!(hits.total, 3);
    assert_eq!(hits.terms[0].label, "Kidney");
    // Partial matches order by label length.
    assert_eq!(hits.terms[1].label, "Kidney disease");
    assert_eq!(hits.terms[2].label, "Polycystic kidney dysplasia");
}

#[test]
fn test_search_ties_keep_input_order() {
    let index = OntologyIndex::build(
        vec![term("1", "Renal cyst"), term("2", "Renal mass")],
        Vec::new(),
        "1",
    );

    let hits = index.search("renal", 1, 20);
    assert_eq!(hits.terms[0].id, "1");
    assert_eq!(hits.terms[1].id, "2");
}

#[test]
fn test_search_pagination() {
    let index = OntologyIndex::build(
        vec![
            term("1", "Kidney disease"),
            term("2", "Kidney"),
            term("3", "Kidney cyst"),
        ],
        Vec::new(),
        "1",
    );

    // total reflects the full match count on every page.
    let mut seen = Vec::new();
    for page in 1..=3 {
        let hits = index.search("kidney", page, 1);
        assert_eq!(hits.total, 3);
        assert_eq!(hits.terms.len(), 1);
        seen.push(hits.terms[0].label.clone());
    }
    assert_eq!(seen, vec!["Kidney", "Kidney cyst", "Kidney disease"]);

    // Past the last page the slice is empty but the count stands.
    let hits = index.search("kidney", 4, 1);
    assert!(hits.terms.is_empty());
    assert_eq!(hits.total, 3);
}

// =============================================================================
// Neighborhood
// =============================================================================

#[test]
fn test_neighborhood_unknown_center_is_empty() {
    let subgraph = fixture().neighborhood("nonexistent", 2);

    assert!(subgraph.nodes.is_empty());
    assert!(subgraph.edges.is_empty());
}

#[test]
fn test_neighborhood_depth_one_from_root() {
    let subgraph = fixture().neighborhood("A", 1);

    let mut nodes: Vec<(&str, u32, TermRole)> = subgraph
        .nodes
        .iter()
        .map(|n| (n.term.id.as_str(), n.level, n.role))
        .collect();
    nodes.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(
        nodes,
        vec![
            ("A", 0, TermRole::Center),
            ("B", 1, TermRole::Descendant),
            ("C", 1, TermRole::Descendant),
        ]
    );

    let mut edges: Vec<(&str, &str)> = subgraph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    edges.sort();
    assert_eq!(edges, vec![("B", "A"), ("C", "A")]);
}

#[test]
fn test_neighborhood_role_not_propagated_past_first_hop() {
    let subgraph = fixture().neighborhood("D", 2);

    let mut nodes: Vec<(&str, u32, TermRole)> = subgraph
        .nodes
        .iter()
        .map(|n| (n.term.id.as_str(), n.level, n.role))
        .collect();
    nodes.sort_by(|a, b| a.0.cmp(b.0));
    assert_eq!(
        nodes,
        vec![
            ("A", 2, TermRole::Plain),
            ("B", 1, TermRole::Ancestor),
            ("D", 0, TermRole::Center),
        ]
    );

    let mut edges: Vec<(&str, &str)> = subgraph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    edges.sort();
    // Oriented child -> parent even though both were reached upward.
    assert_eq!(edges, vec![("B", "A"), ("D", "B")]);
}

#[test]
fn test_neighborhood_levels_bounded_by_depth() {
    let index = fixture();

    for depth in 1..=3 {
        let subgraph = index.neighborhood("D", depth);
        for node in &subgraph.nodes {
            assert!(node.level <= depth);
        }
        let center = subgraph.nodes.iter().find(|n| n.term.id == "D").unwrap();
        assert_eq!(center.level, 0);
        assert_eq!(center.role, TermRole::Center);
    }
}

#[test]
fn test_neighborhood_no_duplicates_with_multiple_inheritance() {
    // Diamond: D is_a B, D is_a C, B is_a A, C is_a A.
    let index = OntologyIndex::build(
        vec![
            term("A", "Top"),
            term("B", "Left"),
            term("C", "Right"),
            term("D", "Bottom"),
        ],
        vec![
            edge("B", "A"),
            edge("C", "A"),
            edge("D", "B"),
            edge("D", "C"),
        ],
        "A",
    );

    let subgraph = index.neighborhood("D", 2);

    let mut ids: Vec<&str> = subgraph.nodes.iter().map(|n| n.term.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["A", "B", "C", "D"]);

    let mut edges: Vec<(&str, &str)> = subgraph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    let before = edges.len();
    edges.sort();
    edges.dedup();
    assert_eq!(edges.len(), before, "no repeated (from, to) pair");
    assert_eq!(edges, vec![("B", "A"), ("C", "A"), ("D", "B"), ("D", "C")]);

    // A is reachable through both B and C but recorded once, at level 2.
    let a = subgraph.nodes.iter().find(|n| n.term.id == "A").unwrap();
    assert_eq!(a.level, 2);
    assert_eq!(a.role, TermRole::Plain);
}

#[test]
fn test_neighborhood_tolerates_cycles() {
    // X is_a Y and Y is_a X. The visited set must terminate the walk, and
    // the parent direction is expanded first, so Y wins the ancestor role.
    let index = OntologyIndex::build(
        vec![term("X", "One"), term("Y", "Other")],
        vec![edge("X", "Y"), edge("Y", "X")],
        "X",
    );

    let subgraph = index.neighborhood("X", 5);

    assert_eq!(subgraph.nodes.len(), 2);
    let y = subgraph.nodes.iter().find(|n| n.term.id == "Y").unwrap();
    assert_eq!(y.level, 1);
    assert_eq!(y.role, TermRole::Ancestor);

    let mut edges: Vec<(&str, &str)> = subgraph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    edges.sort();
    assert_eq!(edges, vec![("X", "Y"), ("Y", "X")]);
}
