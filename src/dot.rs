//! Syntax tree to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - **Internal nodes** are labeled with the operator symbol
//! - **Leaves** are labeled with the proposition and placed at the bottom (sink rank)
//! - **Edges** go from a node to its operands, in operand order
//!
//! # Examples
//!
//! ```
//! use randformula::alphabet::ExplicitAlphabet;
//! use randformula::generator::generate_seeded;
//! use randformula::operator::Connective;
//!
//! let alphabet = ExplicitAlphabet::new(["p", "q"]);
//! let f = generate_seeded(2, &alphabet, &Connective::BASE, 1).unwrap();
//!
//! let dot = f.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::fmt::Display;

use crate::operator::Operator;
use crate::tree::SyntaxTree;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for leaves (default: "plaintext")
    pub leaf_shape: &'static str,
    /// Style for operand edges (default: "solid")
    pub edge_style: &'static str,
    /// Whether to keep operands in order, left to right (default: true)
    pub ordered: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            leaf_shape: "plaintext",
            edge_style: "solid",
            ordered: true,
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<A: Display, O: Operator> SyntaxTree<A, O> {
    /// Converts the tree to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the tree to DOT format with custom configuration.
    ///
    /// Nodes are numbered in pre-order, the root being `0`.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;
        if config.ordered {
            writeln!(dot, "ordering=out;")?;
        }

        let subtrees = self.subtrees();
        let mut leaves = Vec::new();
        for (id, tree) in subtrees.iter().enumerate() {
            match tree {
                SyntaxTree::Leaf(atom) => {
                    writeln!(
                        dot,
                        "{} [shape={}, label=\"{}\"];",
                        id,
                        config.leaf_shape,
                        escape(&atom.to_string())
                    )?;
                    leaves.push(id);
                }
                SyntaxTree::Node { op, .. } => {
                    writeln!(dot, "{} [label=\"{}\"];", id, escape(op.symbol()))?;
                }
            }
        }

        if !leaves.is_empty() {
            write!(dot, "{{ rank=sink;")?;
            for id in leaves {
                write!(dot, " {};", id)?;
            }
            writeln!(dot, " }}")?;
        }

        // In pre-order, the first child of node `id` is `id + 1` and each next
        // sibling follows the whole subtree of the previous one.
        for (id, tree) in subtrees.iter().enumerate() {
            let mut child = id + 1;
            for sub in tree.children() {
                writeln!(dot, "{} -> {} [style={}];", id, child, config.edge_style)?;
                child += sub.size();
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
