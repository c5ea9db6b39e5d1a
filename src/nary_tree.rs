use crate::tree::TreeOps;
use std::collections::VecDeque;
use std::fmt;
use tracing::{instrument, trace};

/// Index of the root node in `Tree::nodes`.
const ROOT: usize = 0;

/// A rooted tree where every node can hold any number of children.
///
/// Nodes are stored in a vector owned by the tree and refer to their children
/// by index. Nodes are only ever appended, so indices stay valid for the
/// lifetime of the tree and the structure can never contain a cycle.
///
/// Lookups compare values, not positions: when several nodes hold equal
/// values, the one met first in a pre-order walk (children left to right)
/// wins.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    children: Vec<usize>,
}

/// Pre-order iterator over the values of a tree.
pub struct DfsIter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<usize>,
}

/// Level-order iterator over the values of a tree.
pub struct BfsIter<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<usize>,
}

impl<T> Tree<T> {
    pub fn new(root: T) -> Self {
        Tree {
            nodes: vec![Node {
                value: root,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> &T {
        &self.nodes[ROOT].value
    }

    /// Number of nodes, root included. Never zero.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Appends `child` as the last child of the first node matching
    /// `is_parent`. Returns `false` and leaves the tree untouched when no
    /// node matches.
    #[instrument(level = "trace", skip_all)]
    pub fn add_child_by<F>(&mut self, is_parent: F, child: T) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let Some(parent) = self.find_by(is_parent) else {
            trace!(len = self.nodes.len(), "no parent matched, child dropped");
            return false;
        };

        let index = self.nodes.len();
        self.nodes.push(Node {
            value: child,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        trace!(parent, index, "child appended");
        true
    }

    pub fn contains_by<F>(&self, is_match: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.find_by(is_match).is_some()
    }

    /// Values in pre-order: a node comes before its children, children in
    /// insertion order.
    pub fn iter_dfs(&self) -> DfsIter<'_, T> {
        DfsIter {
            tree: self,
            stack: vec![ROOT],
        }
    }

    /// Values in level order: every node at depth d comes before any node at
    /// depth d + 1.
    pub fn iter_bfs(&self) -> BfsIter<'_, T> {
        BfsIter {
            tree: self,
            queue: VecDeque::from([ROOT]),
        }
    }

    /// Number of nodes on the longest path from the root to a leaf, so a lone
    /// root has height 1.
    pub fn height(&self) -> usize {
        let mut max_height = 0;
        let mut stack = vec![(ROOT, 1)];

        while let Some((index, depth)) = stack.pop() {
            max_height = max_height.max(depth);
            for &child in &self.nodes[index].children {
                stack.push((child, depth + 1));
            }
        }

        max_height
    }

    fn find_by<F>(&self, is_match: F) -> Option<usize>
    where
        F: Fn(&T) -> bool,
    {
        let mut stack = vec![ROOT];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if is_match(&node.value) {
                return Some(index);
            }
            // reversed so the leftmost child is popped first
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

impl<T: PartialEq> Tree<T> {
    pub fn add_child(&mut self, parent: &T, child: T) -> bool {
        self.add_child_by(|value| value == parent, child)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.contains_by(|candidate| candidate == value)
    }

    /// Children of the first node equal to `value`, in insertion order.
    pub fn children_of(&self, value: &T) -> Option<Vec<&T>> {
        self.find_by(|candidate| candidate == value).map(|index| {
            self.nodes[index]
                .children
                .iter()
                .map(|&child| &self.nodes[child].value)
                .collect()
        })
    }
}

impl<T: Clone> Tree<T> {
    pub fn traverse_dfs(&self) -> Vec<T> {
        self.iter_dfs().cloned().collect()
    }

    pub fn traverse_bfs(&self) -> Vec<T> {
        self.iter_bfs().cloned().collect()
    }

    /// Same as [`Tree::traverse_dfs`].
    pub fn all_values(&self) -> Vec<T> {
        self.traverse_dfs()
    }
}

impl<T: PartialEq> TreeOps<T> for Tree<T> {
    fn add_child(&mut self, parent: &T, child: T) -> bool {
        Tree::add_child(self, parent, child)
    }

    fn contains(&self, value: &T) -> bool {
        Tree::contains(self, value)
    }

    fn height(&self) -> usize {
        Tree::height(self)
    }

    fn len(&self) -> usize {
        Tree::len(self)
    }
}

impl<'a, T> Iterator for DfsIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree.nodes[index];
        self.stack.extend(node.children.iter().rev());
        Some(&node.value)
    }
}

impl<'a, T> Iterator for BfsIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree.nodes[index];
        self.queue.extend(node.children.iter());
        Some(&node.value)
    }
}

struct NodeView<'a, T> {
    tree: &'a Tree<T>,
    index: usize,
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Tree")
            .field("len", &self.nodes.len())
            .field(
                "root",
                &NodeView {
                    tree: self,
                    index: ROOT,
                },
            )
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeView<'_, T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.tree.nodes[self.index];
        fmt.debug_struct("Node")
            .field("value", &node.value)
            .field(
                "children",
                &node
                    .children
                    .iter()
                    .map(|&index| NodeView {
                        tree: self.tree,
                        index,
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
