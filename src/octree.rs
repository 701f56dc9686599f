use crate::bounds::BoundingBox;
use crate::vector::Vector3f;
use std::fmt;

const ROOT: u32 = 0;

/// A stable, opaque handle to the leaf that holds an inserted element.
///
/// Returned by [`Octree::add`]; pass it back to [`Octree::remove_using`] to
/// remove the element without a full-tree search. The handle carries the
/// tree generation it was issued under, so after a [`Octree::clear`] every
/// outstanding handle goes stale and is rejected instead of touching the
/// rebuilt tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    fn new(index: u32, generation: u32) -> NodeId {
        NodeId { index, generation }
    }
}

struct LeafData<T> {
    point: Vector3f,
    elements: Vec<T>,
}

/// A node is either a leaf holding at most one point (with the elements
/// stored at it) or a branch holding exactly eight octant children. The two
/// states are mutually exclusive by construction; a leaf becomes a branch
/// through subdivision and never reverts.
enum NodeKind<T> {
    Leaf(Option<LeafData<T>>),
    Branch([u32; 8]),
}

struct Node<T> {
    bounds: BoundingBox,
    kind: NodeKind<T>,
}

impl<T> Node<T> {
    fn leaf(bounds: BoundingBox) -> Node<T> {
        Node {
            bounds,
            kind: NodeKind::Leaf(None),
        }
    }
}

/// An octree over 3D points: stores elements of any type keyed by an exact
/// [`Vector3f`] coordinate and retrieves them by point or by axis-aligned
/// region. Space is subdivided adaptively: a region splits into eight
/// octants only once two distinct points collide in the same leaf, and the
/// split repeats until the points separate.
///
/// Nodes live in an arena owned by the tree; branches refer to their
/// children by index. The structure is single-threaded: every operation is
/// a plain recursive traversal that runs to completion.
///
/// # Example
///
/// ```
/// use octothree::{Octree, Vector3f, BoundingBox};
///
/// let min = Vector3f::new(0.0, 0.0, 0.0);
/// let max = Vector3f::new(100.0, 100.0, 100.0);
/// let mut tree = Octree::new(min, max);
///
/// let handle = tree.add("a", Vector3f::new(10.0, 20.0, 30.0)).unwrap();
/// assert_eq!(tree.elements_at(Vector3f::new(10.0, 20.0, 30.0)), &["a"]);
///
/// let everything = BoundingBox::new(min, max);
/// assert_eq!(tree.elements_in(&everything).len(), 1);
///
/// assert!(tree.remove_using(&"a", handle));
/// ```
pub struct Octree<T> {
    bounds: BoundingBox,
    nodes: Vec<Node<T>>,
    generation: u32,
    count: usize,
}

impl<T> Octree<T> {
    /// Creates an empty octree spanning the box between the two corners.
    /// The corners may be given in any order.
    pub fn new(min: Vector3f, max: Vector3f) -> Octree<T> {
        let bounds = BoundingBox::new(min, max);
        Octree {
            bounds,
            nodes: vec![Node::leaf(bounds)],
            generation: 0,
            count: 0,
        }
    }

    /// The bounding box the tree was created with.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Number of elements currently stored.
    pub fn count_elements(&self) -> usize {
        self.count
    }

    /// Number of nodes in the tree (1 for a fresh tree, +8 per subdivision).
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts the element at the specified point.
    ///
    /// Returns `None` when the point lies outside the tree's bounds and the
    /// tree is left unchanged. Otherwise returns a handle to the leaf now
    /// holding the element; retain it if you may need to remove the element
    /// later, since [`Octree::remove_using`] skips the full-tree search.
    pub fn add(&mut self, element: T, point: Vector3f) -> Option<NodeId> {
        let leaf = self.try_add(ROOT, vec![element], point)?;
        self.count += 1;
        Some(NodeId::new(leaf, self.generation))
    }

    /// Retrieves the elements stored exactly at the specified point.
    /// Empty when no element was added at that exact coordinate, or the
    /// point lies outside the tree.
    pub fn elements_at(&self, point: Vector3f) -> &[T] {
        let mut node = &self.nodes[ROOT as usize];
        loop {
            match &node.kind {
                NodeKind::Branch(children) => {
                    let child = children
                        .iter()
                        .find(|&&c| self.nodes[c as usize].bounds.contains_point(point));
                    match child {
                        Some(&c) => node = &self.nodes[c as usize],
                        None => return &[],
                    }
                }
                NodeKind::Leaf(Some(leaf)) if leaf.point == point => return &leaf.elements,
                NodeKind::Leaf(_) => return &[],
            }
        }
    }

    /// Retrieves all elements whose point lies within the closed bounds of
    /// the query box. A degenerate box (`min == max`) matches exactly the
    /// elements at that point.
    ///
    /// Results are concatenated in octant traversal order, insertion order
    /// within each leaf; no deduplication or sorting.
    pub fn elements_in(&self, query: &BoundingBox) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_in(ROOT, query, &mut out);
        out
    }

    /// Resets the tree to a single empty leaf over the same bounding box,
    /// dropping every node and element. All previously returned [`NodeId`]
    /// handles become stale. Always returns `true`: a constructed tree is
    /// always initialized and ready for use.
    pub fn clear(&mut self) -> bool {
        let bounds = self.bounds;
        self.nodes.clear();
        self.nodes.push(Node::leaf(bounds));
        self.generation = self.generation.wrapping_add(1);
        self.count = 0;
        true
    }

    fn try_add(&mut self, node: u32, elements: Vec<T>, point: Vector3f) -> Option<u32> {
        if !self.nodes[node as usize].bounds.contains_point(point) {
            return None;
        }

        match &mut self.nodes[node as usize].kind {
            NodeKind::Branch(children) => {
                let children = *children;
                self.add_to_children(&children, elements, point)
            }
            NodeKind::Leaf(Some(leaf)) if leaf.point == point => {
                // Coincident point: accumulate, no subdivision.
                leaf.elements.extend(elements);
                Some(node)
            }
            NodeKind::Leaf(Some(_)) => self.subdivide(node, elements, point),
            NodeKind::Leaf(None) => {
                self.nodes[node as usize].kind = NodeKind::Leaf(Some(LeafData { point, elements }));
                Some(node)
            }
        }
    }

    fn add_to_children(&mut self, children: &[u32; 8], elements: Vec<T>, point: Vector3f) -> Option<u32> {
        for &child in children {
            if self.nodes[child as usize].bounds.contains_point(point) {
                return self.try_add(child, elements, point);
            }
        }

        // The parent contains the point but no child does. Only reachable
        // through floating-point edge cases at nested octant boundaries.
        None
    }

    fn subdivide(&mut self, node: u32, elements: Vec<T>, point: Vector3f) -> Option<u32> {
        // Turn this leaf into a branch, moving its current point and
        // elements into whichever new child contains them.
        let bounds = self.nodes[node as usize].bounds;
        let first = self.nodes.len() as u32;
        let children: [u32; 8] = std::array::from_fn(|i| first + i as u32);

        for octant in bounds.octants() {
            self.nodes.push(Node::leaf(octant));
        }

        let old = std::mem::replace(&mut self.nodes[node as usize].kind, NodeKind::Branch(children));
        if let NodeKind::Leaf(Some(leaf)) = old {
            // The old point lay in this box, so exactly one child takes it.
            let _ = self.add_to_children(&children, leaf.elements, leaf.point);
        }

        self.add_to_children(&children, elements, point)
    }

    fn collect_in<'a>(&'a self, node: u32, query: &BoundingBox, out: &mut Vec<&'a T>) {
        match &self.nodes[node as usize].kind {
            NodeKind::Branch(children) => {
                for &child in children {
                    let child_bounds = self.nodes[child as usize].bounds;
                    if child_bounds.is_contained_in(query) {
                        // Fully covered: every point below is in range, so
                        // the child's own box stands in for the query.
                        self.collect_in(child, &child_bounds, out);
                    } else if child_bounds.intersects(query) {
                        self.collect_in(child, query, out);
                    }
                }
            }
            NodeKind::Leaf(Some(leaf)) if query.contains_point(leaf.point) => {
                out.extend(leaf.elements.iter());
            }
            NodeKind::Leaf(_) => {}
        }
    }
}

impl<T: PartialEq> Octree<T> {
    /// Removes the first element equal to `element`, searching the whole
    /// tree depth-first in octant order. Returns whether a removal occurred.
    ///
    /// This is a full traversal; when the handle returned by [`Octree::add`]
    /// was retained, [`Octree::remove_using`] is faster.
    pub fn remove(&mut self, element: &T) -> bool {
        if self.remove_in(ROOT, element) {
            self.count -= 1;
            return true;
        }
        false
    }

    /// Removes the first element equal to `element` within the subtree under
    /// `node`, which should be the handle returned when the element was
    /// added. A stale handle (issued before the last [`Octree::clear`])
    /// returns `false` without touching the tree.
    pub fn remove_using(&mut self, element: &T, node: NodeId) -> bool {
        if node.generation != self.generation || node.index as usize >= self.nodes.len() {
            return false;
        }
        if self.remove_in(node.index, element) {
            self.count -= 1;
            return true;
        }
        false
    }

    fn remove_in(&mut self, node: u32, element: &T) -> bool {
        match &mut self.nodes[node as usize].kind {
            NodeKind::Branch(children) => {
                let children = *children;
                children.iter().any(|&child| self.remove_in(child, element))
            }
            NodeKind::Leaf(Some(leaf)) => {
                // First match only; the remaining elements keep their order.
                match leaf.elements.iter().position(|e| e == element) {
                    Some(index) => {
                        leaf.elements.remove(index);
                        true
                    }
                    None => false,
                }
            }
            NodeKind::Leaf(None) => false,
        }
    }
}

impl<T> fmt::Display for Octree<T> {
    /// Recursive, indented dump of the tree: per node its box, the leaf
    /// point (or `nil`) and the element-list length. Element values are not
    /// rendered since their type is opaque to the structure. Diagnostics
    /// only; the format is not parsed back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octree{{\n  root: {}\n}}", self.node_to_string(ROOT, "  ", "  "))
    }
}

impl<T> Octree<T> {
    fn node_to_string(&self, node: u32, cur_indent: &str, step_indent: &str) -> String {
        let single_indent = format!("{cur_indent}{step_indent}");

        let mut child_str = String::from("nil");
        let mut point_str = String::from("nil");
        let mut element_str = String::from("nil");

        match &self.nodes[node as usize].kind {
            NodeKind::Branch(children) => {
                let double_indent = format!("{single_indent}{step_indent}");

                child_str = String::new();
                for (i, &child) in children.iter().enumerate() {
                    let rendered = self.node_to_string(child, &double_indent, step_indent);
                    child_str.push_str(&format!("{double_indent}{i}: {rendered},\n"));
                }
                child_str = format!("[\n{child_str}{single_indent}]");
            }
            NodeKind::Leaf(Some(leaf)) => {
                point_str = leaf.point.to_string();
                element_str = format!("[{}]", leaf.elements.len());
            }
            NodeKind::Leaf(None) => {}
        }

        let bounds = self.nodes[node as usize].bounds;
        format!(
            "Node{{\n{single_indent}children: {child_str},\n{single_indent}bounds: {bounds},\n{single_indent}point: {point_str},\n{single_indent}elements: {element_str},\n{cur_indent}}}"
        )
    }
}
