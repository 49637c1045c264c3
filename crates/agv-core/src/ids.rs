//! Typed index wrappers.
//!
//! Nodes, AGVs, and committed paths all live in flat arenas and refer to each
//! other by index.  Wrapping the index in a distinct type keeps a `NodeId`
//! from ever being used to look up a path, at zero runtime cost.

use std::fmt;

/// Declare a `Copy` index newtype with an `INVALID` sentinel.
macro_rules! arena_index {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for "not assigned".  Never a valid arena slot.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Position of this entry in its arena.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// `false` only for [`Self::INVALID`].
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

arena_index! {
    /// Identity of a vehicle in the fleet.
    pub struct AgvId(u32);
}

arena_index! {
    /// Stable index of a node in a `GridGraph`.
    pub struct NodeId(u32);
}

arena_index! {
    /// Handle to a path committed into a `ReservationTable`.
    pub struct PathRef(u32);
}
