//! Syntax trees of formulas.
//!
//! A [`SyntaxTree`] is either a leaf holding an atomic proposition or an
//! internal node holding an operator and exactly `arity` ordered children.
//! The child count is checked by [`SyntaxTree::node`].
//!
//! ```
//! use randformula::operator::Connective;
//! use randformula::tree::SyntaxTree;
//!
//! let p = SyntaxTree::leaf("p");
//! let q = SyntaxTree::leaf("q");
//! let f = SyntaxTree::node(Connective::And, vec![p, q]).unwrap();
//! let g = SyntaxTree::node(Connective::Not, vec![f]).unwrap();
//!
//! assert_eq!(g.height(), 2);
//! assert_eq!(g.to_string(), "¬(p ∧ q)");
//! ```

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::operator::Operator;

/// A formula as a tree.
///
/// Traversals, equality, hashing and drop use an explicit stack, so
/// arbitrarily deep trees are fine there. `Clone` and the formatting impls recurse.
#[derive(Debug, Clone)]
pub enum SyntaxTree<A, O> {
    Leaf(A),
    Node { op: O, children: Vec<SyntaxTree<A, O>> },
}

// Constructors
impl<A, O> SyntaxTree<A, O> {
    pub fn leaf(atom: A) -> Self {
        SyntaxTree::Leaf(atom)
    }
}

impl<A, O: Operator> SyntaxTree<A, O> {
    /// Builds an internal node, checking that `children.len()` equals the arity of `op`.
    pub fn node(op: O, children: Vec<Self>) -> Result<Self> {
        if children.len() != op.arity() {
            return Err(Error::ArityMismatch {
                symbol: op.symbol().to_string(),
                expected: op.arity(),
                found: children.len(),
            });
        }
        Ok(SyntaxTree::Node { op, children })
    }
}

// Getters
impl<A, O> SyntaxTree<A, O> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, SyntaxTree::Leaf(_))
    }

    pub fn atom(&self) -> Option<&A> {
        match self {
            SyntaxTree::Leaf(atom) => Some(atom),
            SyntaxTree::Node { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<&O> {
        match self {
            SyntaxTree::Leaf(_) => None,
            SyntaxTree::Node { op, .. } => Some(op),
        }
    }

    pub fn children(&self) -> &[SyntaxTree<A, O>] {
        match self {
            SyntaxTree::Leaf(_) => &[],
            SyntaxTree::Node { children, .. } => children,
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.end_depths().max().unwrap_or(0)
    }

    /// Number of edges on the shortest root-to-leaf path.
    pub fn min_depth(&self) -> usize {
        self.end_depths().min().unwrap_or(0)
    }

    /// Depths of the nodes without children (leaves and nullary nodes).
    fn end_depths(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack = vec![(self, 0usize)];
        std::iter::from_fn(move || {
            while let Some((tree, depth)) = stack.pop() {
                let children = tree.children();
                if children.is_empty() {
                    return Some(depth);
                }
                stack.extend(children.iter().map(|c| (c, depth + 1)));
            }
            None
        })
    }

    /// Total number of nodes, leaves included.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            count += 1;
            stack.extend(tree.children().iter());
        }
        count
    }

    /// Atoms at the leaves, from left to right.
    pub fn leaves(&self) -> Vec<&A> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            match tree {
                SyntaxTree::Leaf(atom) => result.push(atom),
                SyntaxTree::Node { children, .. } => stack.extend(children.iter().rev()),
            }
        }
        result
    }

    /// Subtrees in pre-order, the tree itself first.
    pub fn subtrees(&self) -> Vec<&SyntaxTree<A, O>> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            result.push(tree);
            stack.extend(tree.children().iter().rev());
        }
        result
    }
}

impl<A: PartialEq, O: PartialEq> PartialEq for SyntaxTree<A, O> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (SyntaxTree::Leaf(a), SyntaxTree::Leaf(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (SyntaxTree::Node { op: p, children: xs }, SyntaxTree::Node { op: q, children: ys }) => {
                    if p != q || xs.len() != ys.len() {
                        return false;
                    }
                    stack.extend(xs.iter().zip(ys.iter()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<A: Eq, O: Eq> Eq for SyntaxTree<A, O> {}

impl<A: Hash, O: Hash> Hash for SyntaxTree<A, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut stack = vec![self];
        while let Some(tree) = stack.pop() {
            match tree {
                SyntaxTree::Leaf(atom) => {
                    0u8.hash(state);
                    atom.hash(state);
                }
                SyntaxTree::Node { op, children } => {
                    1u8.hash(state);
                    op.hash(state);
                    children.len().hash(state);
                    stack.extend(children.iter().rev());
                }
            }
        }
    }
}

impl<A, O> Drop for SyntaxTree<A, O> {
    fn drop(&mut self) {
        let mut stack = match self {
            SyntaxTree::Leaf(_) => return,
            SyntaxTree::Node { children, .. } => std::mem::take(children),
        };
        // Detach grandchildren before each child is dropped.
        while let Some(mut tree) = stack.pop() {
            if let SyntaxTree::Node { children, .. } = &mut tree {
                stack.append(children);
            }
        }
    }
}

impl<A: Display, O: Operator> Display for SyntaxTree<A, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxTree::Leaf(atom) => write!(f, "{}", atom),
            SyntaxTree::Node { op, children } => match children.as_slice() {
                [] => write!(f, "{}", op.symbol()),
                [a] => write!(f, "{}{}", op.symbol(), a),
                [a, b] => write!(f, "({} {} {})", a, op.symbol(), b),
                _ => {
                    write!(f, "{}(", op.symbol())?;
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", child)?;
                    }
                    write!(f, ")")
                }
            },
        }
    }
}
