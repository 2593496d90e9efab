//! Team Definitions
//!
//! Two teams, noughts and crosses. Both the join rotation and the turn
//! rotation alternate between them via [`Team::toggle`].

/// One of the two sides in a match.
///
/// The discriminant is the wire value (noughts = 0, crosses = 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    /// The O side.
    Noughts = 0,
    /// The X side.
    Crosses = 1,
}

impl Team {
    /// The opposing team.
    #[inline]
    pub fn toggle(self) -> Team {
        match self {
            Team::Noughts => Team::Crosses,
            Team::Crosses => Team::Noughts,
        }
    }

    /// Numeric value used on the wire.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
