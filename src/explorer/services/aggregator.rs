use crate::explorer::domain::{AggregateFlags, BadgeCategory, DisplayNode, DisplayTree, NodeId};
use crate::explorer::policies::NodeFilter;
use std::collections::{BTreeSet, HashSet};

/// Number of ancestor levels opened above each matching node
pub const EXPAND_LEVELS: usize = 3;

/// Output of one aggregation pass
///
/// The root is always present; only matching nodes and the chains leading
/// to them are linked into children lists. Nodes left out stay in the arena
/// with their flags, but are unreachable from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedTree {
    pub tree: DisplayTree,
    /// Identities to show opened, sorted lexicographically
    pub expanded: Vec<String>,
}

impl AggregatedTree {
    pub fn is_expanded(&self, identity: &str) -> bool {
        self.expanded
            .binary_search_by(|candidate| candidate.as_str().cmp(identity))
            .is_ok()
    }
}

/// Aggregator service filtering an enriched tree and computing its expand-set
///
/// Each pass works on a fresh copy of the input, which is never modified, so
/// running it again on the same tree and predicate gives the same result.
pub struct Aggregator;

impl Aggregator {
    pub fn aggregate_with_filter(tree: &DisplayTree, filter: &NodeFilter) -> AggregatedTree {
        Self::aggregate(tree, |node| filter.matches(node), filter.force_include_all())
    }

    /// Runs one pass: propagate flags, select, register and sort
    ///
    /// # Arguments
    /// * `tree` - Enriched tree as produced by the tree enricher
    /// * `matches` - Predicate deciding whether a node is shown
    /// * `force_include_all` - Shows every node regardless of `matches`
    pub fn aggregate<F>(tree: &DisplayTree, matches: F, force_include_all: bool) -> AggregatedTree
    where
        F: Fn(&DisplayNode) -> bool,
    {
        let mut output = tree.detached();
        Self::propagate_flags(&mut output);

        let mut expanded = BTreeSet::new();
        let mut registered: HashSet<NodeId> = HashSet::new();

        // Depth-first pre-order over the input's children lists; `level` is
        // the number of ancestors of the frame's node.
        let mut stack: Vec<(NodeId, usize)> = vec![(tree.root(), 0)];
        while let Some((id, level)) = stack.pop() {
            if force_include_all || matches(&output[id]) {
                expanded.insert(output[id].id.clone());
                for ancestor in output.ancestors(id).take(level.min(EXPAND_LEVELS)) {
                    expanded.insert(output[ancestor].id.clone());
                }
                Self::register(&mut output, id, &mut registered);
            }

            for child in tree.children(id).iter().rev() {
                stack.push((*child, level + 1));
            }
        }

        output.sort_children_by_name();

        AggregatedTree {
            tree: output,
            expanded: expanded.into_iter().collect(),
        }
    }

    /// Sets the aggregate flag of every strict ancestor of a flagged node
    ///
    /// Walking up stops at the first ancestor already carrying the flag: its
    /// own ancestors were set by the walk that flagged it.
    fn propagate_flags(tree: &mut DisplayTree) {
        let flagged: Vec<(NodeId, BadgeCategory)> = tree
            .iter()
            .flat_map(|(id, node)| {
                AggregateFlags::PROPAGATED
                    .into_iter()
                    .filter(move |category| node.badges.contains(*category))
                    .map(move |category| (id, category))
            })
            .collect();

        for (id, category) in flagged {
            let mut current = tree.parent(id);
            while let Some(ancestor) = current {
                let flags = &mut tree.get_mut(ancestor).aggregate;
                if flags.contains(category) {
                    break;
                }
                flags.set(category);
                current = tree.parent(ancestor);
            }
        }
    }

    /// Links `id` into its parent's children, then the parent into its own, up to the root
    fn register(tree: &mut DisplayTree, id: NodeId, registered: &mut HashSet<NodeId>) {
        let mut current = id;
        while !registered.contains(&current) {
            let Some(parent) = tree.attach_to_parent(current) else {
                break;
            };
            registered.insert(current);
            current = parent;
        }
    }
}
