//! Physical model: peg-height bookkeeping per placed layer.
//!
//! A peg occupies three consecutive layers. As a disk with a hole at slot `i`
//! is placed over a peg of height `p[i]`, the peg grows by one unit; reaching
//! height 3 caps it, and the next hole above starts a fresh peg of height 1
//! on top (the 4 → 1 wrap below). A solid wall may only land on an empty slot
//! or on a capped peg; a mid-height peg must continue through a hole.

use crate::catalog::{Orientation, SLOTS};

/// Derived 6-slot 0/1 vector for a concrete disk orientation.
pub type HoleConfig = [u8; SLOTS];

/// Peg protrusion per slot after placing a layer, values in `0..=3`.
pub type PegConfig = [u8; SLOTS];

/// Full height of a peg, in layer units.
pub const PEG_HEIGHT: u8 = 3;

/// One placed disk: its orientation and the peg heights after placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    pub orientation: Orientation,
    pub pegs: PegConfig,
}

/// Whether a candidate hole configuration can be placed on top of the stack
/// whose top peg configuration is `top` (`None` for an empty stack).
///
/// A slot blocks the placement iff the candidate has a solid wall there
/// (`h == 0`) while a peg from below is mid-height (1 or 2) and must pass
/// through. Empty slots and capped pegs sit fine under a wall.
pub fn compatible(top: Option<&PegConfig>, holes: &HoleConfig) -> bool {
    let Some(p) = top else {
        return true;
    };
    holes
        .iter()
        .zip(p.iter())
        .all(|(&h, &peg)| h != 0 || peg == 0 || peg == PEG_HEIGHT)
}

/// Peg configuration after placing `holes` on a stack whose top peg
/// configuration is `top` (`None` for an empty stack).
///
/// Slots with a hole continue (or start) a peg: the height below plus one,
/// wrapping 4 → 1 because a capped peg is structurally used up and a new peg
/// begins on top of it. Wall slots carry no peg.
pub fn next_peg_config(top: Option<&PegConfig>, holes: &HoleConfig) -> PegConfig {
    let mut q = *holes;
    let Some(p) = top else {
        return q;
    };
    for i in 0..SLOTS {
        if holes[i] == 1 {
            q[i] = p[i] + 1;
            if q[i] > PEG_HEIGHT {
                q[i] = 1;
            }
        }
    }
    q
}

/// The in-progress stack of placed layers, built bottom-up.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    layers: Vec<Layer>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Peg configuration exposed by the topmost layer, if any.
    pub fn top_pegs(&self) -> Option<&PegConfig> {
        self.layers.last().map(|l| &l.pegs)
    }

    /// [`compatible`] against the current top layer.
    pub fn admits(&self, holes: &HoleConfig) -> bool {
        compatible(self.top_pegs(), holes)
    }

    /// [`next_peg_config`] against the current top layer.
    pub fn step(&self, holes: &HoleConfig) -> PegConfig {
        next_peg_config(self.top_pegs(), holes)
    }

    pub fn push(&mut self, layer: Layer) {
        debug_assert!(
            self.layers
                .iter()
                .all(|l| l.orientation.disk != layer.orientation.disk),
            "disk placed twice"
        );
        self.layers.push(layer);
    }

    pub fn pop(&mut self) -> Option<Layer> {
        self.layers.pop()
    }

    /// Whether the stack is a finished solution for an instance of
    /// `num_disks` disks: every disk placed, and the final layer leaves no
    /// peg at partial height (all slots 0 or [`PEG_HEIGHT`]).
    pub fn is_valid(&self, num_disks: usize) -> bool {
        if self.layers.len() != num_disks {
            return false;
        }
        match self.layers.last() {
            None => true,
            Some(l) => l.pegs.iter().all(|&v| v == 0 || v == PEG_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DiskId, Side};
    use proptest::prelude::*;

    fn layer(pegs: PegConfig) -> Layer {
        Layer {
            orientation: Orientation {
                disk: DiskId(0),
                side: Side::FaceUp,
                angle: 0,
            },
            pegs,
        }
    }

    #[test]
    fn empty_stack_admits_anything() {
        assert!(compatible(None, &[0, 0, 0, 0, 0, 0]));
        assert!(compatible(None, &[1, 1, 1, 1, 1, 1]));
        assert!(compatible(None, &[1, 0, 1, 0, 1, 0]));
    }

    #[test]
    fn first_layer_pegs_equal_holes() {
        let h = [1, 0, 1, 1, 0, 0];
        assert_eq!(next_peg_config(None, &h), h);
    }

    #[test]
    fn wall_over_mid_height_peg_blocks() {
        let p = [3, 0, 1, 2, 0, 3];
        // Slot 3 has a wall over a height-2 peg, so the placement is blocked
        // even though every other slot passes.
        assert!(!compatible(Some(&p), &[0, 1, 1, 0, 0, 1]));
        // Walls over empty slots and capped pegs are fine.
        assert!(compatible(Some(&p), &[0, 1, 1, 1, 0, 1]));
    }

    #[test]
    fn step_increments_and_wraps() {
        let p = [3, 0, 1, 2, 0, 3];
        let h = [0, 1, 1, 1, 0, 1];
        // Slot 1 starts a peg, slots 2 and 3 grow, slot 5 wraps 3+1 -> 1.
        assert_eq!(next_peg_config(Some(&p), &h), [0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn validator_rejects_short_stacks() {
        let mut s = Stack::new();
        assert!(!s.is_valid(12));
        s.push(layer([3, 0, 3, 3, 0, 3]));
        assert!(!s.is_valid(12));
        assert!(s.is_valid(1));
    }

    #[test]
    fn validator_checks_final_pegs_only() {
        let mut s = Stack::new();
        s.push(layer([3, 0, 3, 3, 0, 3]));
        assert!(s.is_valid(1));
        let mut bad = Stack::new();
        bad.push(layer([3, 1, 3, 3, 0, 3]));
        assert!(!bad.is_valid(1));
    }

    proptest! {
        #[test]
        fn next_config_stays_in_range(
            p in proptest::array::uniform6(0u8..=3),
            h in proptest::array::uniform6(0u8..=1),
        ) {
            let q = next_peg_config(Some(&p), &h);
            for i in 0..SLOTS {
                prop_assert!(q[i] <= PEG_HEIGHT);
                if h[i] == 0 {
                    prop_assert_eq!(q[i], 0);
                } else {
                    prop_assert!(q[i] >= 1);
                }
            }
        }

        #[test]
        fn empty_stack_is_always_compatible(h in proptest::array::uniform6(0u8..=1)) {
            prop_assert!(compatible(None, &h));
        }
    }
}
