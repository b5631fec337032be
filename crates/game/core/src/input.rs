//! Polled input snapshot.
//!
//! Produced once per tick by whatever captures keyboard/mouse state. Held
//! buttons stay set while pressed; the request bits are edges and must only be
//! set on the tick the press happened.

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputSnapshot: u8 {
        const LEFT   = 0b0000_0001;
        const RIGHT  = 0b0000_0010;
        /// Edge: jump pressed this tick.
        const JUMP   = 0b0000_0100;
        /// Edge: attack pressed this tick.
        const ATTACK = 0b0000_1000;
        /// Edge: dash pressed this tick.
        const DASH   = 0b0001_0000;
    }
}

impl InputSnapshot {
    /// Bits that are consumed on the tick they are read.
    pub const EDGES: Self = Self::JUMP.union(Self::ATTACK).union(Self::DASH);

    #[inline]
    pub fn left(self) -> bool {
        self.contains(Self::LEFT)
    }

    #[inline]
    pub fn right(self) -> bool {
        self.contains(Self::RIGHT)
    }

    #[inline]
    pub fn jump(self) -> bool {
        self.contains(Self::JUMP)
    }

    #[inline]
    pub fn attack(self) -> bool {
        self.contains(Self::ATTACK)
    }

    #[inline]
    pub fn dash(self) -> bool {
        self.contains(Self::DASH)
    }

    /// Held state only; what the next tick sees if nothing new is pressed.
    pub fn held(self) -> Self {
        self.difference(Self::EDGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_drops_edges() {
        let input = InputSnapshot::LEFT | InputSnapshot::ATTACK | InputSnapshot::JUMP;
        assert!(input.attack());
        let next = input.held();
        assert!(next.left());
        assert!(!next.attack());
        assert!(!next.jump());
    }
}
