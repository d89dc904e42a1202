//! Random formula generation.
//!
//! The generator builds a [`SyntaxTree`] of a target height by drawing, at each
//! internal position, one operator uniformly at random and recursing on its
//! operands; leaves are drawn uniformly from the alphabet.
//!
//! # Random source
//!
//! Draws come from an explicit random generator:
//!
//! - [`FormulaGenerator::generate`] borrows the caller's generator and
//!   advances it, so repeated calls yield an independent sequence of trees.
//! - [`FormulaGenerator::generate_with`] builds a fresh [`ChaCha8Rng`] from a
//!   [`RandomSource`] for the duration of the call. A fixed seed makes the
//!   whole run reproducible.
//!
//! There is no implicit global generator.
//!
//! # Validation
//!
//! All inputs are checked before the first draw. A failed call returns an
//! [`Error`] and leaves the caller's generator untouched.
//!
//! # Examples
//!
//! ```
//! use randformula::alphabet::ExplicitAlphabet;
//! use randformula::generator::generate_seeded;
//! use randformula::operator::Connective;
//!
//! let alphabet = ExplicitAlphabet::new(["p", "q"]);
//! let f = generate_seeded(3, &alphabet, &Connective::BASE, 42).unwrap();
//! let g = generate_seeded(3, &alphabet, &Connective::BASE, 42).unwrap();
//!
//! assert_eq!(f.height(), 3);
//! assert_eq!(f, g);
//! ```

use log::{debug, trace};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alphabet::Alphabet;
use crate::count::count_trees;
use crate::error::{Error, Result};
use crate::operator::Operator;
use crate::tree::SyntaxTree;

/// Treatment of nullary operators (arity 0) at internal positions.
///
/// A nullary operator drawn above the last level produces a childless node,
/// which ends its branch early.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum NullaryPolicy {
    /// Fail with [`Error::NullaryOperator`] if any operator is nullary and `height > 0`.
    #[default]
    Reject,
    /// Never draw nullary operators for internal positions.
    Exclude,
    /// Draw them like any other operator; the branch ends with a childless node.
    Allow,
}

/// Configuration options for [`FormulaGenerator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Treatment of nullary operators (default: [`NullaryPolicy::Reject`]).
    pub nullary: NullaryPolicy,
}

impl GeneratorConfig {
    pub fn with_nullary(mut self, nullary: NullaryPolicy) -> Self {
        self.nullary = nullary;
        self
    }
}

/// Where a fresh random generator comes from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RandomSource {
    /// Deterministic generator seeded with the given value.
    Seed(u64),
    /// Generator seeded from the thread-local, OS-seeded generator at call time.
    Entropy,
}

impl RandomSource {
    pub fn into_rng(self) -> ChaCha8Rng {
        match self {
            RandomSource::Seed(seed) => ChaCha8Rng::seed_from_u64(seed),
            RandomSource::Entropy => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}

impl From<u64> for RandomSource {
    fn from(seed: u64) -> Self {
        RandomSource::Seed(seed)
    }
}

impl From<Option<u64>> for RandomSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(RandomSource::Entropy, RandomSource::Seed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormulaGenerator {
    config: GeneratorConfig,
}

impl FormulaGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a tree of the given height, drawing from the caller's generator.
    ///
    /// Every leaf is at depth exactly `height` unless a nullary operator is
    /// drawn under [`NullaryPolicy::Allow`].
    ///
    /// # Errors
    ///
    /// - [`Error::NotEnumerable`] if the alphabet cannot list its propositions.
    /// - [`Error::EmptyAlphabet`] if it lists none.
    /// - [`Error::EmptyOperatorSet`] if `height > 0` and no operator can be drawn.
    /// - [`Error::NullaryOperator`] under [`NullaryPolicy::Reject`].
    pub fn generate<A, O, R>(
        &self,
        height: usize,
        alphabet: &A,
        operators: &[O],
        rng: &mut R,
    ) -> Result<SyntaxTree<A::Atom, O>>
    where
        A: Alphabet,
        O: Operator + Clone,
        R: Rng + ?Sized,
    {
        let drawable = self.validate(height, alphabet, operators)?;
        debug!(
            "generate(height={}, operators={}, drawable={})",
            height,
            operators.len(),
            drawable.len()
        );
        grow(height, alphabet, operators, &drawable, rng)
    }

    /// Generates a tree of the given height with a fresh generator built from `source`.
    pub fn generate_with<A, O>(
        &self,
        height: usize,
        alphabet: &A,
        operators: &[O],
        source: impl Into<RandomSource>,
    ) -> Result<SyntaxTree<A::Atom, O>>
    where
        A: Alphabet,
        O: Operator + Clone,
    {
        // Fail before seeding.
        let drawable = self.validate(height, alphabet, operators)?;
        let source = source.into();
        debug!("generate_with(height={}, source={:?})", height, source);
        let mut rng = source.into_rng();
        grow(height, alphabet, operators, &drawable, &mut rng)
    }

    /// Generates `count` trees in sequence from the caller's generator.
    pub fn sample<A, O, R>(
        &self,
        count: usize,
        height: usize,
        alphabet: &A,
        operators: &[O],
        rng: &mut R,
    ) -> Result<Vec<SyntaxTree<A::Atom, O>>>
    where
        A: Alphabet,
        O: Operator + Clone,
        R: Rng + ?Sized,
    {
        let drawable = self.validate(height, alphabet, operators)?;
        debug!("sample(count={}, height={})", count, height);
        (0..count)
            .map(|_| grow(height, alphabet, operators, &drawable, rng))
            .collect()
    }

    /// Number of distinct trees this generator can produce for the given inputs.
    ///
    /// Operators are told apart by their position in `operators`.
    pub fn space_size<A, O>(&self, height: usize, alphabet: &A, operators: &[O]) -> Result<BigUint>
    where
        A: Alphabet,
        O: Operator,
    {
        let drawable = self.validate(height, alphabet, operators)?;
        let alphabet_size = alphabet.atoms().map_or(0, |atoms| atoms.len());
        let arities: Vec<usize> = drawable.iter().map(|&i| operators[i].arity()).collect();
        Ok(count_trees(height, alphabet_size, &arities))
    }

    /// Checks the inputs and returns the indices of operators drawable at internal positions.
    fn validate<A, O>(&self, height: usize, alphabet: &A, operators: &[O]) -> Result<Vec<usize>>
    where
        A: Alphabet,
        O: Operator,
    {
        let atoms = alphabet.atoms().ok_or(Error::NotEnumerable {
            alphabet: std::any::type_name::<A>(),
        })?;
        if atoms.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        if height == 0 {
            return Ok(Vec::new());
        }
        if operators.is_empty() {
            return Err(Error::EmptyOperatorSet);
        }

        let drawable: Vec<usize> = match self.config.nullary {
            NullaryPolicy::Reject => {
                if let Some(op) = operators.iter().find(|op| op.is_nullary()) {
                    return Err(Error::NullaryOperator {
                        symbol: op.symbol().to_string(),
                    });
                }
                (0..operators.len()).collect()
            }
            NullaryPolicy::Exclude => (0..operators.len()).filter(|&i| !operators[i].is_nullary()).collect(),
            NullaryPolicy::Allow => (0..operators.len()).collect(),
        };
        if drawable.is_empty() {
            return Err(Error::EmptyOperatorSet);
        }
        Ok(drawable)
    }
}

/// A node whose operands are still being generated.
struct Frame<A, O> {
    op: O,
    remaining: usize,
    children: Vec<SyntaxTree<A, O>>,
}

/// Builds one tree of height `height`, drawing in pre-order: an operator is
/// drawn before its operands, and each operand is completed before the next.
fn grow<A, O, R>(
    height: usize,
    alphabet: &A,
    operators: &[O],
    drawable: &[usize],
    rng: &mut R,
) -> Result<SyntaxTree<A::Atom, O>>
where
    A: Alphabet,
    O: Operator + Clone,
    R: Rng + ?Sized,
{
    let mut stack: Vec<Frame<A::Atom, O>> = Vec::new();
    let mut remaining = height;

    'descend: loop {
        let mut done = if remaining == 0 {
            let atom = alphabet.sample(rng).ok_or(Error::EmptyAlphabet)?;
            SyntaxTree::leaf(atom)
        } else {
            let op = &operators[drawable[rng.random_range(0..drawable.len())]];
            trace!("grow(remaining={}) -> {}/{}", remaining, op.symbol(), op.arity());
            if op.arity() == 0 {
                SyntaxTree::node(op.clone(), Vec::new())?
            } else {
                stack.push(Frame {
                    op: op.clone(),
                    remaining,
                    children: Vec::with_capacity(op.arity()),
                });
                remaining -= 1;
                continue 'descend;
            }
        };

        while let Some(mut frame) = stack.pop() {
            frame.children.push(done);
            if frame.children.len() < frame.op.arity() {
                remaining = frame.remaining - 1;
                stack.push(frame);
                continue 'descend;
            }
            done = SyntaxTree::node(frame.op, frame.children)?;
        }
        return Ok(done);
    }
}

/// Generates a tree with the default configuration, drawing from `rng`.
pub fn generate<A, O, R>(height: usize, alphabet: &A, operators: &[O], rng: &mut R) -> Result<SyntaxTree<A::Atom, O>>
where
    A: Alphabet,
    O: Operator + Clone,
    R: Rng + ?Sized,
{
    FormulaGenerator::default().generate(height, alphabet, operators, rng)
}

/// Generates a tree with the default configuration and a generator seeded with `seed`.
pub fn generate_seeded<A, O>(height: usize, alphabet: &A, operators: &[O], seed: u64) -> Result<SyntaxTree<A::Atom, O>>
where
    A: Alphabet,
    O: Operator + Clone,
{
    FormulaGenerator::default().generate_with(height, alphabet, operators, seed)
}
