//! Alphabets of atomic propositions.
//!
//! An [`Alphabet`] is the universe the leaves of a formula are drawn from.
//! Membership is always available, enumeration is a capability: an alphabet
//! that can list its propositions returns them from [`Alphabet::atoms`], and
//! only such alphabets can be sampled from.
//!
//! ```
//! use randformula::alphabet::{Alphabet, ExplicitAlphabet, OpenAlphabet};
//!
//! let finite = ExplicitAlphabet::new(["p", "q", "p"]);
//! assert_eq!(finite.atoms(), Some(&["p", "q"][..]));
//!
//! let naturals = OpenAlphabet::new(|_: &u64| true);
//! assert!(naturals.contains(&42));
//! assert!(naturals.atoms().is_none());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use rand::Rng;

pub trait Alphabet {
    type Atom: Clone;

    /// Returns `true` if `atom` belongs to the alphabet.
    fn contains(&self, atom: &Self::Atom) -> bool;

    /// Enumerates the propositions of the alphabet.
    ///
    /// Returns `None` for alphabets that cannot be enumerated.
    fn atoms(&self) -> Option<&[Self::Atom]>;

    /// Draws one proposition uniformly at random.
    ///
    /// Returns `None` if the alphabet is not enumerable or is empty.
    fn sample<R>(&self, rng: &mut R) -> Option<Self::Atom>
    where
        R: Rng + ?Sized,
    {
        let atoms = self.atoms()?;
        if atoms.is_empty() {
            return None;
        }
        let i = rng.random_range(0..atoms.len());
        Some(atoms[i].clone())
    }

    fn is_enumerable(&self) -> bool {
        self.atoms().is_some()
    }
}

/// A finite alphabet given by its propositions.
///
/// Duplicates are dropped on construction, keeping the first occurrence, so
/// every proposition is drawn with the same probability.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExplicitAlphabet<A> {
    atoms: Vec<A>,
}

impl<A: Clone + Eq + Hash> ExplicitAlphabet<A> {
    pub fn new(atoms: impl IntoIterator<Item = A>) -> Self {
        let mut seen = HashSet::new();
        let atoms = atoms.into_iter().filter(|atom| seen.insert(atom.clone())).collect();
        Self { atoms }
    }
}

impl<A> ExplicitAlphabet<A> {
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl<A: Clone + Eq + Hash> FromIterator<A> for ExplicitAlphabet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<A: Clone + PartialEq> Alphabet for ExplicitAlphabet<A> {
    type Atom = A;

    fn contains(&self, atom: &A) -> bool {
        self.atoms.contains(atom)
    }

    fn atoms(&self) -> Option<&[A]> {
        Some(&self.atoms)
    }
}

impl<A: fmt::Display> fmt::Display for ExplicitAlphabet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", atom)?;
        }
        write!(f, "}}")
    }
}

/// An alphabet known only through a membership predicate.
///
/// Typically infinite (e.g. "every string"), hence not enumerable.
pub struct OpenAlphabet<A, F> {
    member: F,
    _atom: std::marker::PhantomData<fn(&A) -> bool>,
}

impl<A, F> OpenAlphabet<A, F>
where
    F: Fn(&A) -> bool,
{
    pub fn new(member: F) -> Self {
        Self {
            member,
            _atom: std::marker::PhantomData,
        }
    }
}

impl<A, F> fmt::Debug for OpenAlphabet<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAlphabet").finish_non_exhaustive()
    }
}

impl<A, F> Alphabet for OpenAlphabet<A, F>
where
    A: Clone,
    F: Fn(&A) -> bool,
{
    type Atom = A;

    fn contains(&self, atom: &A) -> bool {
        (self.member)(atom)
    }

    fn atoms(&self) -> Option<&[A]> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use test_log::test;

    #[test]
    fn test_explicit_dedup() {
        let alphabet = ExplicitAlphabet::new([1, 2, 1, 3, 2]);
        assert_eq!(alphabet.atoms(), Some(&[1, 2, 3][..]));
        assert_eq!(alphabet.len(), 3);
        assert!(alphabet.contains(&2));
        assert!(!alphabet.contains(&4));
    }

    #[test]
    fn test_explicit_large_keeps_first_order() {
        let n = 50_000;
        let atoms = (0..n).rev().chain(0..n);
        let alphabet = ExplicitAlphabet::new(atoms);
        assert_eq!(alphabet.len(), n);
        let expected: Vec<usize> = (0..n).rev().collect();
        assert_eq!(alphabet.atoms(), Some(&expected[..]));
    }

    #[test]
    fn test_explicit_sample_member() {
        let alphabet: ExplicitAlphabet<&str> = ["a", "b"].into_iter().collect();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let atom = alphabet.sample(&mut rng).unwrap();
            assert!(alphabet.contains(&atom));
        }
    }

    #[test]
    fn test_explicit_sample_covers_all() {
        let alphabet = ExplicitAlphabet::new(0..4);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[alphabet.sample(&mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_empty_sample() {
        let alphabet = ExplicitAlphabet::<u32>::new([]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(alphabet.is_enumerable());
        assert_eq!(alphabet.sample(&mut rng), None);
    }

    #[test]
    fn test_open_not_enumerable() {
        let even = OpenAlphabet::new(|x: &u32| x % 2 == 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(even.contains(&4));
        assert!(!even.contains(&5));
        assert!(!even.is_enumerable());
        assert_eq!(even.sample(&mut rng), None);
    }

    #[test]
    fn test_display() {
        let alphabet = ExplicitAlphabet::new(["p", "q"]);
        assert_eq!(alphabet.to_string(), "{p, q}");
    }
}
