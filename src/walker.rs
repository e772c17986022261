use std::collections::HashSet;
use std::fmt;

use itertools::Itertools;

use crate::error::Error;
use crate::position::{Heading, Position};

/// One parsed instruction: quarter-turns to make, then blocks to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub turns: u32,
    pub blocks: u32,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let direction = if self.turns == 1 { 'R' } else { 'L' };
        write!(f, "{}{}", direction, self.blocks)
    }
}

pub fn parse(instructions: &str) -> Result<Vec<Step>, Error> {
    if instructions.is_empty() {
        return Ok(Vec::new());
    }
    instructions.split(", ").map(parse_step).collect()
}

fn parse_step(token: &str) -> Result<Step, Error> {
    let turns = match token.chars().next() {
        Some('R') => 1,
        Some('L') => 3,
        _ => return Err(Error::InvalidDirection(token.to_string())),
    };
    let blocks = token[1..]
        .parse()
        .map_err(|_| Error::InvalidDistance(token[1..].to_string()))?;
    Ok(Step { turns, blocks })
}

/// Canonical string form; `parse` of the result gives the steps back.
#[allow(dead_code)]
pub fn render(steps: &[Step]) -> String {
    steps.iter().join(", ")
}

pub struct Walker {
    position: Position,
    heading: Heading,
    trail: Vec<Position>,
}

impl Walker {
    /// Starts at the origin facing north, with an empty trail.
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            heading: Heading::North,
            trail: Vec::new(),
        }
    }

    pub fn navigate(&mut self, instructions: &str) -> Result<(), Error> {
        for step in parse(instructions)? {
            for _ in 0..step.turns {
                self.turn_right();
            }
            self.walk(step.blocks);
        }
        Ok(())
    }

    pub fn turn_right(&mut self) {
        self.heading = self.heading.turn_right();
    }

    #[allow(dead_code)]
    pub fn turn_left(&mut self) {
        self.heading = self.heading.turn_left();
    }

    /// Walks one block at a time; each unit step logs the position it
    /// leaves before moving.
    pub fn walk(&mut self, blocks: u32) {
        for _ in 0..blocks {
            self.trail.push(self.position);
            self.position = self.position.step(self.heading);
        }
    }

    pub fn facing(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn manhattan_distance(&self) -> i32 {
        self.position.manhattan()
    }

    /// First trail entry that already occurs earlier in the trail, in
    /// insertion order.
    pub fn first_revisited_intersection(&self) -> Result<Position, Error> {
        let mut seen = HashSet::new();
        self.trail
            .iter()
            .copied()
            .find(|position| !seen.insert(*position))
            .ok_or(Error::NoRevisit)
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn turns() {
    let mut walker = Walker::new();
    walker.turn_right();
    assert_eq!(walker.facing(), Heading::East);
    walker.turn_right();
    assert_eq!(walker.facing(), Heading::South);
    walker.turn_left();
    assert_eq!(walker.facing(), Heading::East);
}

#[test]
fn walks() {
    let mut walker = Walker::new();
    walker.walk(1);
    assert_eq!(walker.position(), Position::new(0, 1));

    walker.turn_right();
    walker.walk(2);
    assert_eq!(walker.position(), Position::new(2, 1));

    walker.turn_right();
    walker.walk(2);
    assert_eq!(walker.position(), Position::new(2, -1));

    walker.turn_right();
    walker.walk(4);
    assert_eq!(walker.position(), Position::new(-2, -1));
}

#[test]
fn understands_instructions() {
    assert_eq!(
        parse("R2, L30").unwrap(),
        vec![
            Step { turns: 1, blocks: 2 },
            Step {
                turns: 3,
                blocks: 30
            }
        ]
    );
    assert_eq!(parse("").unwrap(), vec![]);
}

#[test]
fn rejects_bad_instructions() {
    assert_eq!(
        parse("R2, X3"),
        Err(Error::InvalidDirection("X3".to_string()))
    );
    assert_eq!(
        parse("R2, Lfoo"),
        Err(Error::InvalidDistance("foo".to_string()))
    );

    // a malformed token leaves the walker untouched
    let mut walker = Walker::new();
    assert!(walker.navigate("R2, X3").is_err());
    assert_eq!(walker.position(), Position::default());
    assert_eq!(walker.facing(), Heading::North);
}

#[test]
fn instruction_round_trip() {
    let steps = parse("R2, L30, R1").unwrap();
    assert_eq!(render(&steps), "R2, L30, R1");
    assert_eq!(parse(&render(&steps)).unwrap(), steps);
}

#[test]
fn follows_instructions() {
    let mut walker = Walker::new();
    walker.navigate("R2, L3").unwrap();
    assert_eq!(walker.position(), Position::new(2, 3));
}

#[test]
fn blocks_from_start() {
    let mut walker = Walker::new();
    walker.navigate("R5, L5, R5, R3").unwrap();
    assert_eq!(walker.manhattan_distance(), 12);
}

#[test]
fn first_revisit() {
    let mut walker = Walker::new();
    walker.navigate("R8, R4, R4, R8").unwrap();
    assert_eq!(
        walker.first_revisited_intersection(),
        Ok(Position::new(4, 0))
    );
}

#[test]
fn no_revisit() {
    let mut walker = Walker::new();
    walker.navigate("R2, L3").unwrap();
    assert_eq!(walker.first_revisited_intersection(), Err(Error::NoRevisit));
}
