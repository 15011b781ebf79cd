//! Composite file tree: files (leaves) and directories (containers).
//!
//! Nodes live behind `Rc` handles so a caller can keep using a node after
//! inserting it. Identity for removal and duplicate checks is handle identity
//! (`Rc::ptr_eq`), not name equality.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::domain::events::{SharedSink, TracingSink, TreeEvent};

/// A node of the tree: exactly one of two kinds.
#[derive(Clone)]
pub enum Node {
    File(Rc<FileNode>),
    Directory(Rc<Directory>),
}

/// Indivisible item with a fixed size.
#[derive(Debug, PartialEq, Eq)]
pub struct FileNode {
    name: String,
    size: u64,
}

/// Ordered collection of uniquely named children.
pub struct Directory {
    name: String,
    children: RefCell<Vec<Node>>,
    sink: SharedSink,
}

/// Result of [`Directory::add`]. None of the variants is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// A child with the same handle or name is already present
    Duplicate,
    /// The node is this directory or contains it
    WouldCycle,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        self == AddOutcome::Added
    }
}

/// Result of [`Directory::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        self == RemoveOutcome::Removed
    }
}

impl FileNode {
    pub fn new(name: impl Into<String>, size: u64) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Directory {
    /// Empty directory reporting to the `tracing` log.
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Self::with_sink(name, TracingSink::shared())
    }

    pub fn with_sink(name: impl Into<String>, sink: SharedSink) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            children: RefCell::new(Vec::new()),
            sink,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append `node` unless it duplicates a child or would create a cycle.
    #[instrument(level = "debug", skip_all, fields(directory = %self.name))]
    pub fn add(&self, node: impl Into<Node>) -> AddOutcome {
        let node = node.into();
        let directory = self.name.clone();
        let child = node.name().to_string();

        let duplicate = self
            .children
            .borrow()
            .iter()
            .any(|c| c.same_node(&node) || c.name() == node.name());
        if duplicate {
            self.sink
                .emit(TreeEvent::DuplicateRejected { directory, child }.into());
            return AddOutcome::Duplicate;
        }

        if let Node::Directory(candidate) = &node {
            if std::ptr::eq(candidate.as_ref(), self) || candidate.reaches(self) {
                self.sink
                    .emit(TreeEvent::CycleRejected { directory, child }.into());
                return AddOutcome::WouldCycle;
            }
        }

        self.children.borrow_mut().push(node);
        debug!(children = self.len(), "child appended");
        self.sink.emit(TreeEvent::Added { directory, child }.into());
        AddOutcome::Added
    }

    /// Remove the child that is the very same handle as `node`.
    #[instrument(level = "debug", skip_all, fields(directory = %self.name))]
    pub fn remove(&self, node: impl Into<Node>) -> RemoveOutcome {
        let node = node.into();
        let directory = self.name.clone();
        let child = node.name().to_string();

        let position = self
            .children
            .borrow()
            .iter()
            .position(|c| c.same_node(&node));
        match position {
            Some(idx) => {
                // Vec::remove shifts the tail, keeping relative order
                self.children.borrow_mut().remove(idx);
                self.sink.emit(TreeEvent::Removed { directory, child }.into());
                RemoveOutcome::Removed
            }
            None => {
                self.sink.emit(TreeEvent::NotFound { directory, child }.into());
                RemoveOutcome::NotFound
            }
        }
    }

    /// Aggregate size of all current children, recomputed on every call.
    /// Saturates at `u64::MAX`.
    pub fn size(&self) -> u64 {
        self.children
            .borrow()
            .iter()
            .map(Node::size)
            .fold(0u64, u64::saturating_add)
    }

    /// Snapshot of the current children handles, in insertion order.
    pub fn children(&self) -> Vec<Node> {
        self.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Direct child by name.
    pub fn child(&self, name: &str) -> Option<Node> {
        self.children
            .borrow()
            .iter()
            .find(|c| c.name() == name)
            .cloned()
    }

    /// Whether `node` (by identity) is a direct child.
    pub fn contains(&self, node: &Node) -> bool {
        self.children.borrow().iter().any(|c| c.same_node(node))
    }

    /// Number of levels in this subtree; an empty directory has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .borrow()
            .iter()
            .map(|c| match c {
                Node::File(_) => 1,
                Node::Directory(d) => d.depth(),
            })
            .max()
            .unwrap_or(0)
    }

    /// True if `target` is somewhere below this directory.
    fn reaches(&self, target: &Directory) -> bool {
        self.children.borrow().iter().any(|c| match c {
            Node::File(_) => false,
            Node::Directory(d) => std::ptr::eq(d.as_ref(), target) || d.reaches(target),
        })
    }
}

impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("name", &self.name)
            .field("children", &self.children.borrow())
            .finish()
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => f.name(),
            Node::Directory(d) => d.name(),
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Node::File(f) => f.size(),
            Node::Directory(d) => d.size(),
        }
    }

    /// Handle identity: both refer to the same allocation.
    pub fn same_node(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::File(a), Node::File(b)) => Rc::ptr_eq(a, b),
            (Node::Directory(a), Node::Directory(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&Rc<Directory>> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::File(file) => fmt::Debug::fmt(file, f),
            Node::Directory(dir) => fmt::Debug::fmt(dir, f),
        }
    }
}

impl From<Rc<FileNode>> for Node {
    fn from(f: Rc<FileNode>) -> Self {
        Node::File(f)
    }
}

impl From<&Rc<FileNode>> for Node {
    fn from(f: &Rc<FileNode>) -> Self {
        Node::File(Rc::clone(f))
    }
}

impl From<Rc<Directory>> for Node {
    fn from(d: Rc<Directory>) -> Self {
        Node::Directory(d)
    }
}

impl From<&Rc<Directory>> for Node {
    fn from(d: &Rc<Directory>) -> Self {
        Node::Directory(Rc::clone(d))
    }
}

impl From<&Node> for Node {
    fn from(n: &Node) -> Self {
        n.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::{Event, RecordingSink};

    fn dir(name: &str) -> (Rc<Directory>, Rc<RecordingSink>) {
        let sink = RecordingSink::new();
        (Directory::with_sink(name, sink.clone()), sink)
    }

    #[test]
    fn given_empty_directory_when_sizing_then_zero() {
        let (root, _) = dir("root");
        assert_eq!(root.size(), 0);
        assert!(root.is_empty());
        assert_eq!(root.depth(), 1);
    }

    #[test]
    fn given_sizes_past_u64_max_when_sizing_then_saturates() {
        let (root, _) = dir("root");
        let (sub, _) = dir("sub");
        root.add(FileNode::new("a", u64::MAX));
        root.add(FileNode::new("b", 1));
        sub.add(FileNode::new("c", 7));
        root.add(&sub);

        assert_eq!(root.size(), u64::MAX);
        assert_eq!(Node::from(&root).size(), u64::MAX);
        assert!(Node::from(&root).label_line("").contains(&u64::MAX.to_string()));
    }

    #[test]
    fn given_same_name_different_handle_when_adding_then_rejected() {
        let (root, sink) = dir("root");
        root.add(FileNode::new("a.txt", 1));

        let outcome = root.add(FileNode::new("a.txt", 99));

        assert_eq!(outcome, AddOutcome::Duplicate);
        assert_eq!(root.len(), 1);
        assert_eq!(root.size(), 1);
        assert_eq!(
            sink.last(),
            Some(Event::Tree(TreeEvent::DuplicateRejected {
                directory: "root".into(),
                child: "a.txt".into(),
            }))
        );
    }

    #[test]
    fn given_directory_when_adding_itself_then_would_cycle() {
        let (root, sink) = dir("root");

        assert_eq!(root.add(&root), AddOutcome::WouldCycle);
        assert!(root.is_empty());
        assert!(matches!(
            sink.last(),
            Some(Event::Tree(TreeEvent::CycleRejected { .. }))
        ));
    }

    #[test]
    fn given_nested_directories_when_adding_ancestor_then_would_cycle() {
        let (root, _) = dir("root");
        let (mid, _) = dir("mid");
        let (leaf_dir, _) = dir("deep");
        root.add(&mid);
        mid.add(&leaf_dir);

        assert_eq!(leaf_dir.add(&root), AddOutcome::WouldCycle);
        assert_eq!(leaf_dir.add(&mid), AddOutcome::WouldCycle);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn given_same_file_in_two_directories_when_sizing_then_counted_in_both() {
        let (a, _) = dir("a");
        let (b, _) = dir("b");
        let shared = FileNode::new("shared.bin", 10);

        assert!(a.add(&shared).is_added());
        assert!(b.add(&shared).is_added());
        assert_eq!(a.size() + b.size(), 20);
    }

    #[test]
    fn given_equal_looking_file_when_removing_then_not_found() {
        let (root, _) = dir("root");
        root.add(FileNode::new("a.txt", 5));

        let twin = FileNode::new("a.txt", 5);

        assert_eq!(root.remove(&twin), RemoveOutcome::NotFound);
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn given_child_name_when_looking_up_then_returns_handle() {
        let (root, _) = dir("root");
        let file = FileNode::new("a.txt", 5);
        root.add(&file);

        let found = root.child("a.txt").expect("child exists");
        assert!(found.same_node(&Node::from(&file)));
        assert!(root.contains(&found));
        assert!(root.child("missing").is_none());
    }
}
