//! In-memory graph index over the loaded ontology.
//!
//! Built once at startup from the loader's flat tables, immutable
//! afterwards. Supports the three query shapes the visualizer needs:
//! direct lookup by id, ranked substring search, and bounded-depth
//! bidirectional neighborhood extraction.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

use serde::Serialize;

use super::error::OntologyError;
use super::loader::{self, IsaEdge};
use super::term::Term;

/// Minimum search query length. Shorter queries return no matches instead
/// of triggering a full-corpus substring scan per keystroke.
pub const MIN_QUERY_LEN: usize = 2;

// =============================================================================
// Result types
// =============================================================================

/// Basic statistics about the loaded ontology.
#[derive(Debug, Clone, Serialize)]
pub struct OntologyStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub root_id: String,
}

/// One page of ranked search results plus the full match count.
#[derive(Debug, Clone)]
pub struct SearchHits {
    pub terms: Vec<Term>,
    pub total: usize,
}

/// How a subgraph node relates to the queried center.
///
/// `Ancestor`/`Descendant` are assigned only to immediate parents/children
/// of the center itself; nodes discovered further out are `Plain` even when
/// they lie on an ancestor path. The tags exist purely for display coloring,
/// which only highlights the direct neighbors of the selected node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermRole {
    Center,
    Ancestor,
    Descendant,
    Plain,
}

/// A term in an extracted subgraph, tagged with its BFS hop level and role.
#[derive(Debug, Clone, Serialize)]
pub struct SubgraphNode {
    #[serde(flatten)]
    pub term: Term,
    pub level: u32,
    pub role: TermRole,
}

/// A subgraph edge, always oriented child -> parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubgraphEdge {
    pub from: String,
    pub to: String,
}

/// A localized subgraph around a center term, shaped for the visualizer.
#[derive(Debug, Clone, Serialize)]
pub struct Subgraph {
    pub nodes: Vec<SubgraphNode>,
    pub edges: Vec<SubgraphEdge>,
}

impl Subgraph {
    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

// =============================================================================
// Index
// =============================================================================

/// The immutable ontology graph index.
///
/// Terms are kept in document order in a `Vec` so that search ranking has a
/// stable tie order; `by_id` maps ids to positions in that `Vec`. Adjacency
/// lives on the terms themselves and is rebuilt from the edge list on every
/// load, never read from the source document.
pub struct OntologyIndex {
    terms: Vec<Term>,
    by_id: HashMap<String, usize>,
    edge_count: usize,
    root_id: String,
}

impl OntologyIndex {
    /// Build the index from the loader's flat tables.
    ///
    /// Edges referencing an unknown endpoint are dropped silently; both
    /// adjacency directions are built from the single directed edge list in
    /// one pass, so parent/child symmetry holds by construction. Duplicate
    /// term ids keep the first occurrence.
    pub fn build(terms: Vec<Term>, edges: Vec<IsaEdge>, root_id: impl Into<String>) -> Self {
        let mut kept: Vec<Term> = Vec::with_capacity(terms.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(terms.len());

        for term in terms {
            if by_id.contains_key(&term.id) {
                continue;
            }
            by_id.insert(term.id.clone(), kept.len());
            kept.push(term);
        }

        let mut edge_count = 0;
        for edge in edges {
            let (Some(&child_idx), Some(&parent_idx)) =
                (by_id.get(&edge.child), by_id.get(&edge.parent))
            else {
                continue;
            };

            kept[child_idx].parents.push(edge.parent);
            kept[parent_idx].children.push(edge.child);
            edge_count += 1;
        }

        Self {
            terms: kept,
            by_id,
            edge_count,
            root_id: root_id.into(),
        }
    }

    /// Load an ontology document from disk and build the index.
    pub fn from_file(
        path: impl AsRef<Path>,
        root_id: impl Into<String>,
    ) -> Result<Self, OntologyError> {
        let (terms, edges) = loader::load_file(path)?;
        Ok(Self::build(terms, edges, root_id))
    }

    /// Look up a term by its full id. Unknown ids are a normal outcome.
    pub fn lookup(&self, id: &str) -> Option<&Term> {
        self.by_id.get(id).map(|&idx| &self.terms[idx])
    }

    /// Statistics over the loaded graph. `total_edges` counts retained
    /// `is_a` edges only.
    pub fn stats(&self) -> OntologyStats {
        OntologyStats {
            total_nodes: self.terms.len(),
            total_edges: self.edge_count,
            root_id: self.root_id.clone(),
        }
    }

    /// The designated default entry point for visualization.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Number of loaded terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Ranked substring search over label, short id, and synonyms.
    ///
    /// Matching is case-insensitive. Exact full-string matches on label or
    /// short id rank before partial matches; within a tier shorter labels
    /// rank first; remaining ties keep document order (the sort is stable).
    /// Pagination is applied after full ranking so `total` reflects the
    /// complete match count. Callers are expected to pass sane `page`/
    /// `page_size` values (the query service clamps them).
    pub fn search(&self, query: &str, page: usize, page_size: usize) -> SearchHits {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_QUERY_LEN {
            return SearchHits {
                terms: Vec::new(),
                total: 0,
            };
        }

        let mut matches: Vec<&Term> = self
            .terms
            .iter()
            .filter(|term| {
                term.label.to_lowercase().contains(&needle)
                    || term.short_id.to_lowercase().contains(&needle)
                    || term.synonyms.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .collect();

        // Exact matches first, then shorter labels as a specificity proxy.
        matches.sort_by_key(|term| {
            let exact = term.label.to_lowercase() == needle || term.short_id.to_lowercase() == needle;
            (if exact { 0 } else { 1 }, term.label.len())
        });

        let total = matches.len();
        let start = page.saturating_sub(1).saturating_mul(page_size);
        let terms = matches
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        SearchHits { terms, total }
    }

    // =========================================================================
    // Neighborhood extraction
    // =========================================================================

    /// Extract the bounded-depth neighborhood around `center_id` for
    /// visualization.
    ///
    /// Breadth-first along both adjacency directions with a global visited
    /// set, so cycles and multiple inheritance terminate and every node is
    /// recorded once, at its first discovery. Parents are expanded before
    /// children at each node, which decides the winning role when a node is
    /// reachable both ways in the same hop. Edges are emitted child ->
    /// parent for every adjacency considered during expansion, deduplicated
    /// and restricted to endpoints present in the node set.
    ///
    /// An unknown center yields an empty subgraph, not an error.
    pub fn neighborhood(&self, center_id: &str, depth: u32) -> Subgraph {
        let Some(center) = self.lookup(center_id) else {
            return Subgraph::empty();
        };

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut seen_edges: HashSet<(&str, &str)> = HashSet::new();
        let mut queue: VecDeque<(&Term, u32)> = VecDeque::new();

        visited.insert(center.id.as_str());
        nodes.push(SubgraphNode {
            term: center.clone(),
            level: 0,
            role: TermRole::Center,
        });
        queue.push_back((center, 0));

        while let Some((current, level)) = queue.pop_front() {
            if level >= depth {
                continue;
            }
            let at_center = current.id == center_id;

            for parent_id in &current.parents {
                let Some(parent) = self.lookup(parent_id) else {
                    continue;
                };
                if visited.insert(parent.id.as_str()) {
                    nodes.push(SubgraphNode {
                        term: parent.clone(),
                        level: level + 1,
                        role: if at_center {
                            TermRole::Ancestor
                        } else {
                            TermRole::Plain
                        },
                    });
                    queue.push_back((parent, level + 1));
                }
                // current is_a parent, so the edge runs current -> parent.
                // Emitted even when the parent was discovered earlier via
                // the other direction; both endpoints are in the node set.
                if seen_edges.insert((current.id.as_str(), parent.id.as_str())) {
                    edges.push(SubgraphEdge {
                        from: current.id.clone(),
                        to: parent_id.clone(),
                    });
                }
            }

            for child_id in &current.children {
                let Some(child) = self.lookup(child_id) else {
                    continue;
                };
                if visited.insert(child.id.as_str()) {
                    nodes.push(SubgraphNode {
                        term: child.clone(),
                        level: level + 1,
                        role: if at_center {
                            TermRole::Descendant
                        } else {
                            TermRole::Plain
                        },
                    });
                    queue.push_back((child, level + 1));
                }
                if seen_edges.insert((child.id.as_str(), current.id.as_str())) {
                    edges.push(SubgraphEdge {
                        from: child_id.clone(),
                        to: current.id.clone(),
                    });
                }
            }
        }

        Subgraph { nodes, edges }
    }
}
