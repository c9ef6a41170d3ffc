//! Boolean connectives missing from the standard operators

/// Material implication and exclusive or on `bool`
pub trait BoolExt {
    /// `self ⇒ other`: false only when `self` holds and `other` does not
    fn implies(self, other: bool) -> bool;

    /// `self ⊕ other`: true when exactly one side holds
    fn xor(self, other: bool) -> bool;
}

impl BoolExt for bool {
    #[inline]
    fn implies(self, other: bool) -> bool {
        !self || other
    }

    #[inline]
    fn xor(self, other: bool) -> bool {
        self != other
    }
}
