use std::fmt::{Display, Formatter};

/// A connective of fixed arity.
pub trait Operator {
    /// Number of operands the operator takes.
    fn arity(&self) -> usize;

    /// Symbol used when rendering formulas.
    fn symbol(&self) -> &str;

    fn is_nullary(&self) -> bool {
        self.arity() == 0
    }
}

impl<O: Operator + ?Sized> Operator for &O {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn symbol(&self) -> &str {
        (**self).symbol()
    }
}

/// Standard propositional and modal connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    Top,
    Bottom,
    Not,
    Box,
    Diamond,
    And,
    Or,
    Implies,
}

impl Connective {
    /// Propositional base: `¬`, `∧`, `∨`, `→`.
    pub const BASE: [Connective; 4] = [Connective::Not, Connective::And, Connective::Or, Connective::Implies];

    /// Propositional base extended with the modal `□` and `◇`.
    pub const MODAL: [Connective; 6] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Implies,
        Connective::Box,
        Connective::Diamond,
    ];
}

impl Operator for Connective {
    fn arity(&self) -> usize {
        match self {
            Connective::Top | Connective::Bottom => 0,
            Connective::Not | Connective::Box | Connective::Diamond => 1,
            Connective::And | Connective::Or | Connective::Implies => 2,
        }
    }

    fn symbol(&self) -> &str {
        match self {
            Connective::Top => "⊤",
            Connective::Bottom => "⊥",
            Connective::Not => "¬",
            Connective::Box => "□",
            Connective::Diamond => "◇",
            Connective::And => "∧",
            Connective::Or => "∨",
            Connective::Implies => "→",
        }
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
