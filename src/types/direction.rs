//! Direction, axis and direction-set types for connection handling.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// The six cardinal directions / neighbor slots of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All six directions in order. This order also defines the bit layout
    /// of [`DirectionSet`].
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Get the neighbor offset for this direction.
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Direction::Down => (0, -1, 0),
            Direction::Up => (0, 1, 0),
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::East => (1, 0, 0),
        }
    }

    /// Get the integer unit vector for this direction.
    pub fn vector(&self) -> IVec3 {
        let (x, y, z) = self.offset();
        IVec3::new(x, y, z)
    }

    /// Get the direction matching an integer unit vector, if any.
    pub fn from_vector(v: IVec3) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Get the opposite direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Get the axis this direction is on.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "up" => Some(Direction::Up),
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "west" => Some(Direction::West),
            "east" => Some(Direction::East),
            _ => None,
        }
    }

    /// Rotate this direction around the X axis in 90-degree increments.
    /// Right-handed about +X: a positive quarter turn goes
    /// Up -> South -> Down -> North.
    pub fn rotate_x(self, degrees: i32) -> Direction {
        let steps = ((degrees / 90) % 4 + 4) % 4;
        let mut dir = self;
        for _ in 0..steps {
            dir = match dir {
                Direction::Up => Direction::South,
                Direction::South => Direction::Down,
                Direction::Down => Direction::North,
                Direction::North => Direction::Up,
                // X rotation doesn't affect East/West
                Direction::East => Direction::East,
                Direction::West => Direction::West,
            };
        }
        dir
    }

    /// Rotate this direction around the Y axis in 90-degree increments.
    /// Right-handed about +Y: a positive quarter turn goes
    /// North -> West -> South -> East.
    pub fn rotate_y(self, degrees: i32) -> Direction {
        let steps = ((degrees / 90) % 4 + 4) % 4;
        let mut dir = self;
        for _ in 0..steps {
            dir = match dir {
                Direction::North => Direction::West,
                Direction::West => Direction::South,
                Direction::South => Direction::East,
                Direction::East => Direction::North,
                // Y rotation doesn't affect Up/Down
                Direction::Up => Direction::Up,
                Direction::Down => Direction::Down,
            };
        }
        dir
    }

    /// Rotate this direction around the Z axis in 90-degree increments.
    /// Right-handed about +Z: a positive quarter turn goes
    /// East -> Up -> West -> Down.
    pub fn rotate_z(self, degrees: i32) -> Direction {
        let steps = ((degrees / 90) % 4 + 4) % 4;
        let mut dir = self;
        for _ in 0..steps {
            dir = match dir {
                Direction::East => Direction::Up,
                Direction::Up => Direction::West,
                Direction::West => Direction::Down,
                Direction::Down => Direction::East,
                // Z rotation doesn't affect North/South
                Direction::North => Direction::North,
                Direction::South => Direction::South,
            };
        }
        dir
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::Down => 1 << 0,
            Direction::Up => 1 << 1,
            Direction::North => 1 << 2,
            Direction::South => 1 << 3,
            Direction::West => 1 << 4,
            Direction::East => 1 << 5,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Up => write!(f, "up"),
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
            Direction::East => write!(f, "east"),
        }
    }
}

/// The three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// An unordered, duplicate-free set of 0-6 directions, stored as a 6-bit
/// mask. Equality is exact mask equality, so two distinct direction sets
/// can never be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// The set of all six directions.
    pub fn all() -> Self {
        DirectionSet(0b11_1111)
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.insert(direction);
        self
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Number of directions in the set (0-6).
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the contained directions in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        let set = *self;
        Direction::ALL.into_iter().filter(move |d| set.contains(*d))
    }

    /// The full 64-member power set of the six directions, in ascending
    /// bitmask order. The ordering is deterministic and stable; generators
    /// rely on it for reproducible output.
    pub fn enumerate_all() -> impl Iterator<Item = DirectionSet> {
        (0u8..64).map(DirectionSet)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = DirectionSet::new();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl std::fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for d in self.iter() {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{}", d)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unit_vectors() {
        for d in Direction::ALL {
            let v = d.vector();
            assert_eq!(v.x.abs() + v.y.abs() + v.z.abs(), 1);
            assert_eq!(Direction::from_vector(v), Some(d));
        }
    }

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.vector(), -d.opposite().vector());
        }
    }

    #[test]
    fn test_rotate_x_cycle() {
        assert_eq!(Direction::Up.rotate_x(90), Direction::South);
        assert_eq!(Direction::Up.rotate_x(180), Direction::Down);
        assert_eq!(Direction::Up.rotate_x(270), Direction::North);
        assert_eq!(Direction::Up.rotate_x(-90), Direction::North);
        assert_eq!(Direction::Up.rotate_x(360), Direction::Up);
        assert_eq!(Direction::East.rotate_x(90), Direction::East);
    }

    #[test]
    fn test_rotate_y_cycle() {
        assert_eq!(Direction::North.rotate_y(90), Direction::West);
        assert_eq!(Direction::North.rotate_y(180), Direction::South);
        assert_eq!(Direction::North.rotate_y(-90), Direction::East);
        assert_eq!(Direction::Up.rotate_y(90), Direction::Up);
    }

    #[test]
    fn test_rotate_z_cycle() {
        assert_eq!(Direction::East.rotate_z(90), Direction::Up);
        assert_eq!(Direction::East.rotate_z(180), Direction::West);
        assert_eq!(Direction::Down.rotate_z(90), Direction::East);
        assert_eq!(Direction::North.rotate_z(90), Direction::North);
    }

    #[test]
    fn test_rotation_matches_vector_math() {
        // Quarter-turn permutations must agree with the right-handed
        // rotation of the integer unit vector.
        for d in Direction::ALL {
            let v = d.vector();
            let rx = IVec3::new(v.x, -v.z, v.y);
            assert_eq!(d.rotate_x(90).vector(), rx);
            let ry = IVec3::new(v.z, v.y, -v.x);
            assert_eq!(d.rotate_y(90).vector(), ry);
            let rz = IVec3::new(-v.y, v.x, v.z);
            assert_eq!(d.rotate_z(90).vector(), rz);
        }
    }

    #[test]
    fn test_direction_set_basics() {
        let mut set = DirectionSet::new();
        assert!(set.is_empty());
        set.insert(Direction::Up);
        set.insert(Direction::Up);
        set.insert(Direction::North);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::Up));
        assert!(!set.contains(Direction::Down));

        let same: DirectionSet = [Direction::North, Direction::Up].into_iter().collect();
        assert_eq!(set, same);
    }

    #[test]
    fn test_direction_set_display() {
        assert_eq!(DirectionSet::EMPTY.to_string(), "none");
        let set: DirectionSet = [Direction::Up, Direction::Down].into_iter().collect();
        assert_eq!(set.to_string(), "down+up");
        assert_eq!(DirectionSet::all().to_string(), "down+up+north+south+west+east");
    }

    #[test]
    fn test_power_set_enumeration() {
        let sets: Vec<_> = DirectionSet::enumerate_all().collect();
        assert_eq!(sets.len(), 64);
        assert_eq!(sets[0], DirectionSet::EMPTY);
        assert_eq!(sets[63], DirectionSet::all());
        // Ascending mask order is part of the contract.
        for w in sets.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let d: Direction = serde_json::from_str("\"north\"").unwrap();
        assert_eq!(d, Direction::North);
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
    }
}
