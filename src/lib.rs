//! # randformula: random syntax trees for logical formulas
//!
//! **`randformula`** samples formulas of a given height over an alphabet of atomic
//! propositions and a set of operators (connectives). The produced [`SyntaxTree`][crate::tree::SyntaxTree]
//! is a plain value meant to be fed to downstream evaluators, e.g. for testing them against random inputs.
//!
//! ## Key Features
//!
//! - **Capability traits**: any [`Alphabet`][crate::alphabet::Alphabet] that can enumerate its
//!   propositions and any [`Operator`][crate::operator::Operator] with a fixed arity can be used.
//! - **Reproducible**: a seed fixes the whole run; a borrowed generator lets the caller drive a sequence of trees.
//! - **Checked**: every internal node has exactly as many operands as its operator's arity.
//!
//! ## Basic Usage
//!
//! ```rust
//! use randformula::alphabet::ExplicitAlphabet;
//! use randformula::generator::generate_seeded;
//! use randformula::operator::Connective;
//!
//! let alphabet = ExplicitAlphabet::new(["p", "q", "r"]);
//! let f = generate_seeded(2, &alphabet, &Connective::BASE, 1234).unwrap();
//!
//! assert_eq!(f.height(), 2);
//! println!("f = {}", f);
//! ```
//!
//! ## Core Components
//!
//! - **[`generator`]**: the random generator and its configuration.
//! - **[`tree`]**: syntax trees.
//! - **[`alphabet`]**, **[`operator`]**: what trees are built from.
//! - **[`count`]**: size of the sampled space.
//! - **[`dot`]**: Graphviz output.

pub mod alphabet;
pub mod count;
pub mod dot;
pub mod error;
pub mod generator;
pub mod operator;
pub mod tree;

pub use error::{Error, Result};
