//! Text rendering of the composite tree.
//!
//! Two styles: the indented listing (`+ Directory:` / `- File:` lines) and a
//! box-drawing tree built with `termtree`.

use std::fmt;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::{Directory, Node};

/// Indent added per tree level in the listing style.
pub const INDENT_MARKER: &str = "   ";

/// Pre-order traversal yielding `(depth, node)`, root at depth 0.
pub struct PreOrder {
    stack: Vec<(usize, Node)>,
}

impl PreOrder {
    fn new(root: Node) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl Iterator for PreOrder {
    type Item = (usize, Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let Node::Directory(dir) = &node {
            // Push children in reverse order for left-to-right traversal
            for child in dir.children().into_iter().rev() {
                self.stack.push((depth + 1, child));
            }
        }
        Some((depth, node))
    }
}

impl Node {
    pub fn walk(&self) -> PreOrder {
        PreOrder::new(self.clone())
    }

    /// The single line describing this node, without its children.
    pub fn label_line(&self, indent: &str) -> String {
        match self {
            Node::File(f) => format!("{indent}- File: {} ({} bytes)", f.name(), f.size()),
            Node::Directory(d) => {
                format!("{indent}+ Directory: {} ({} bytes)", d.name(), d.size())
            }
        }
    }

    /// One line per node in pre-order, indented by `indent` plus the default
    /// marker per level.
    pub fn lines(&self, indent: &str) -> Vec<String> {
        self.lines_with(indent, INDENT_MARKER)
    }

    pub fn lines_with(&self, indent: &str, marker: &str) -> Vec<String> {
        self.walk()
            .map(|(depth, node)| node.label_line(&format!("{indent}{}", marker.repeat(depth))))
            .collect()
    }

    pub fn render(&self, indent: &str) -> String {
        self.render_with(indent, INDENT_MARKER)
    }

    #[instrument(level = "debug", skip(self), fields(node = %self.name()))]
    pub fn render_with(&self, indent: &str, marker: &str) -> String {
        self.lines_with(indent, marker).iter().join("\n")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}

/// Conversion into a `termtree::Tree` for box-drawing output.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Node::File(f) => Tree::new(format!("{} ({} bytes)", f.name(), f.size())),
            Node::Directory(d) => d.to_tree_string(),
        }
    }
}

impl TreeNodeConvert for Directory {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(TreeNodeConvert::to_tree_string)
            .collect();
        Tree::new(format!("{}/ ({} bytes)", self.name(), self.size())).with_leaves(leaves)
    }
}
