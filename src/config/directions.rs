//! Shared direction and signal vocabulary

use std::fmt;

/// The four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardinalDirection::North => "north",
            CardinalDirection::East => "east",
            CardinalDirection::South => "south",
            CardinalDirection::West => "west",
        };
        f.write_str(name)
    }
}

/// A direction to turn at an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnDirection {
    Left,
    Right,
    /// No turn
    Straight,
    /// 180 degree turn back onto the same road
    UTurn,
}

impl TurnDirection {
    pub const ALL: [TurnDirection; 4] = [
        TurnDirection::Left,
        TurnDirection::Right,
        TurnDirection::Straight,
        TurnDirection::UTurn,
    ];
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnDirection::Left => "left",
            TurnDirection::Right => "right",
            TurnDirection::Straight => "straight",
            TurnDirection::UTurn => "u-turn",
        };
        f.write_str(name)
    }
}

/// Traffic light state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightStatus {
    /// Go
    Green,
    /// Red is coming soon
    Yellow,
    /// Stop
    Red,
}

impl LightStatus {
    pub const ALL: [LightStatus; 3] = [LightStatus::Green, LightStatus::Yellow, LightStatus::Red];
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightStatus::Green => "green",
            LightStatus::Yellow => "yellow",
            LightStatus::Red => "red",
        };
        f.write_str(name)
    }
}
