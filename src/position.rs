/// Grid coordinate. Movement returns a new value, so a position stored in
/// a log never aliases the one still being moved.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        self.translate(dx, dy)
    }

    pub fn manhattan(self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

// right turns advance through the cycle, a left turn is three rights
const CYCLE: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

impl Heading {
    pub fn turn_right(self) -> Self {
        self.turn(1)
    }

    pub fn turn_left(self) -> Self {
        self.turn(3)
    }

    pub fn turn(self, quarter_turns: u32) -> Self {
        CYCLE[(self.index() + quarter_turns as usize) % CYCLE.len()]
    }

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Unit-step offset, north pointing at +y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }
}

#[test]
fn turning() {
    let mut heading = Heading::North;
    heading = heading.turn_right();
    assert_eq!(heading, Heading::East);
    heading = heading.turn_right();
    assert_eq!(heading, Heading::South);
    heading = heading.turn_right();
    heading = heading.turn_right();
    assert_eq!(heading, Heading::North);
}

#[test]
fn left_is_three_rights() {
    for heading in CYCLE {
        assert_eq!(
            heading.turn_left(),
            heading.turn_right().turn_right().turn_right()
        );
    }
}

#[test]
fn stepping() {
    let origin = Position::default();
    assert_eq!(origin.step(Heading::North), Position::new(0, 1));
    assert_eq!(origin.step(Heading::East), Position::new(1, 0));
    assert_eq!(origin.step(Heading::South), Position::new(0, -1));
    assert_eq!(origin.step(Heading::West), Position::new(-1, 0));
}

#[test]
fn manhattan() {
    assert_eq!(Position::new(0, 0).manhattan(), 0);
    assert_eq!(Position::new(2, -3).manhattan(), 5);
    assert_eq!(Position::new(-2, -1).manhattan(), 3);
}
