//! Disk catalog: hole patterns and orientation-derived hole configurations.
//!
//! Each disk has six angular slots; its face-up hole pattern is a 6-slot 0/1
//! vector. The face-down pattern is the reversal of the face-up one and is
//! always derived fresh, never stored. An [`Orientation`] (disk + side +
//! rotation angle) fully determines a hole configuration: the side's pattern
//! cyclically rotated right by `angle` slots.

use crate::layer::HoleConfig;

/// Number of angular slots per disk.
pub const SLOTS: usize = 6;

/// Rotation angles a disk can take, in units of one slot.
pub const ANGLES: [u8; SLOTS] = [0, 1, 2, 3, 4, 5];

/// A disk's face-up hole pattern: 1 = hole, 0 = solid wall, clockwise.
pub type HolePattern = [u8; SLOTS];

/// Identifier for one physical disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiskId(pub usize);

/// Which face of the disk points up when placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    FaceUp,
    FaceDown,
}

/// A disk's placement choice: side plus clockwise rotation angle (0..6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub disk: DiskId,
    pub side: Side,
    pub angle: u8,
}

/// Face-up hole patterns of the canonical 12-disk puzzle instance.
pub const CANONICAL_PATTERNS: [HolePattern; 12] = [
    [0, 1, 0, 1, 1, 1],
    [1, 1, 0, 1, 1, 0],
    [1, 1, 1, 0, 0, 1],
    [1, 0, 0, 0, 1, 1],
    [0, 1, 0, 1, 0, 1],
    [1, 0, 0, 1, 0, 0],
    [1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 1, 0],
    [1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1],
    [1, 1, 0, 1, 1, 1],
];

/// Immutable table of disk hole patterns.
///
/// The canonical puzzle has 12 disks; reduced datasets (for regression tests
/// and benches) run through the same search code via [`Catalog::from_patterns`].
#[derive(Clone, Debug)]
pub struct Catalog {
    patterns: Vec<HolePattern>,
}

impl Catalog {
    /// The canonical 12-disk puzzle instance.
    pub fn canonical() -> Self {
        Self::from_patterns(&CANONICAL_PATTERNS)
    }

    /// A catalog over an arbitrary set of face-up patterns.
    pub fn from_patterns(patterns: &[HolePattern]) -> Self {
        Self {
            patterns: patterns.to_vec(),
        }
    }

    /// Number of disks in this instance.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All disk ids, ascending.
    pub fn disk_ids(&self) -> impl Iterator<Item = DiskId> {
        (0..self.patterns.len()).map(DiskId)
    }

    /// Hole pattern for the given disk and side.
    ///
    /// Face-down is the reversal of the stored face-up pattern; the result is
    /// always an independent copy, so the catalog is never mutated through it.
    pub fn pattern_for(&self, disk: DiskId, side: Side) -> HolePattern {
        let p = self.patterns[disk.0];
        match side {
            Side::FaceUp => p,
            Side::FaceDown => {
                let mut r = p;
                r.reverse();
                r
            }
        }
    }

    /// Hole configuration for an orientation: the side's pattern rotated
    /// right (clockwise) by `angle` slots.
    pub fn hole_config(&self, o: Orientation) -> HoleConfig {
        let p = self.pattern_for(o.disk, o.side);
        let mut h = [0u8; SLOTS];
        for (i, &v) in p.iter().enumerate() {
            h[(i + o.angle as usize) % SLOTS] = v;
        }
        h
    }
}
