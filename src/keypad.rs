use once_cell::sync::Lazy;

use crate::error::Error;
use crate::position::Position;

/// Button grid; `None` cells are holes the finger cannot rest on.
pub struct Layout {
    rows: Vec<Vec<Option<char>>>,
}

impl Layout {
    /// One row per line, `.` marking an absent cell.
    pub fn parse(grid: &str) -> Self {
        let rows = grid
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| if c == '.' { None } else { Some(c) })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    fn button_at(&self, position: Position) -> Option<char> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        *self
            .rows
            .get(position.y as usize)?
            .get(position.x as usize)?
    }
}

pub static BASIC_LAYOUT: Lazy<Layout> = Lazy::new(|| Layout::parse("123\n456\n789"));
pub const BASIC_START: Position = Position::new(1, 1);

pub static STRANGE_LAYOUT: Lazy<Layout> =
    Lazy::new(|| Layout::parse("..1..\n.234.\n56789\n.ABC.\n..D.."));
pub const STRANGE_START: Position = Position::new(0, 2);

pub struct Keypad<'a> {
    layout: &'a Layout,
    position: Position,
    pressed: String,
}

impl<'a> Keypad<'a> {
    pub fn new(layout: &'a Layout, start: Position) -> Self {
        Self {
            layout,
            position: start,
            pressed: String::new(),
        }
    }

    /// One finger move; stays put when the destination is off the layout
    /// or a hole.
    #[allow(dead_code)]
    pub fn move_finger(&mut self, direction: char) -> Result<(), Error> {
        self.shift(offset(direction)?);
        Ok(())
    }

    /// One line of moves per button. Every line is validated before the
    /// finger moves at all.
    pub fn punch_code(&mut self, instructions: &str) -> Result<(), Error> {
        let lines = instructions
            .lines()
            .map(|line| line.chars().map(offset).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        for line in lines {
            for delta in line {
                self.shift(delta);
            }
            self.press();
        }
        Ok(())
    }

    fn shift(&mut self, (dx, dy): (i32, i32)) {
        let destination = self.position.translate(dx, dy);
        if self.layout.button_at(destination).is_some() {
            self.position = destination;
        }
    }

    pub fn button(&self) -> char {
        // shift never leaves the layout, so the finger is always on a button
        self.layout
            .button_at(self.position)
            .expect("finger off the layout")
    }

    pub fn press(&mut self) {
        let button = self.button();
        self.pressed.push(button);
    }

    pub fn code(&self) -> &str {
        &self.pressed
    }
}

// rows grow downward: U decreases y
fn offset(direction: char) -> Result<(i32, i32), Error> {
    match direction {
        'U' => Ok((0, -1)),
        'D' => Ok((0, 1)),
        'L' => Ok((-1, 0)),
        'R' => Ok((1, 0)),
        _ => Err(Error::InvalidDirection(direction.to_string())),
    }
}

#[test]
fn moves_the_finger() {
    let layout = Layout::parse("123\n.5.\n789");
    let mut keypad = Keypad::new(&layout, Position::new(1, 1));

    keypad.move_finger('U').unwrap();
    assert_eq!(keypad.button(), '2');
    keypad.move_finger('U').unwrap();
    assert_eq!(keypad.button(), '2');

    keypad.move_finger('D').unwrap();
    assert_eq!(keypad.button(), '5');

    keypad.move_finger('R').unwrap();
    assert_eq!(keypad.button(), '5');

    keypad.move_finger('L').unwrap();
    assert_eq!(keypad.button(), '5');

    keypad.move_finger('D').unwrap();
    assert_eq!(keypad.button(), '8');
    keypad.move_finger('D').unwrap();
    assert_eq!(keypad.button(), '8');

    keypad.move_finger('L').unwrap();
    assert_eq!(keypad.button(), '7');
    keypad.move_finger('L').unwrap();
    assert_eq!(keypad.button(), '7');

    keypad.move_finger('R').unwrap();
    assert_eq!(keypad.button(), '8');
    keypad.move_finger('R').unwrap();
    assert_eq!(keypad.button(), '9');
    keypad.move_finger('R').unwrap();
    assert_eq!(keypad.button(), '9');
}

#[test]
fn presses_buttons() {
    let mut keypad = Keypad::new(&BASIC_LAYOUT, BASIC_START);

    keypad.move_finger('U').unwrap();
    keypad.press();

    keypad.move_finger('D').unwrap();
    keypad.press();

    keypad.move_finger('L').unwrap();
    keypad.press();

    assert_eq!(keypad.code(), "254");
}

#[test]
fn follows_instructions() {
    let mut keypad = Keypad::new(&BASIC_LAYOUT, BASIC_START);
    keypad.punch_code("ULL\nRRDDD\nLURDL\nUUUUD").unwrap();
    assert_eq!(keypad.code(), "1985");
}

#[test]
fn follows_instructions_on_the_strange_layout() {
    let mut keypad = Keypad::new(&STRANGE_LAYOUT, STRANGE_START);
    keypad.punch_code("ULL\nRRDDD\nLURDL\nUUUUD").unwrap();
    assert_eq!(keypad.code(), "5DB3");
}

#[test]
fn rejects_unknown_moves() {
    let mut keypad = Keypad::new(&BASIC_LAYOUT, BASIC_START);
    assert_eq!(
        keypad.punch_code("UL\nUQ"),
        Err(Error::InvalidDirection("Q".to_string()))
    );
    // nothing was pressed: the bad line aborted the whole call
    assert_eq!(keypad.code(), "");
    assert_eq!(keypad.button(), '5');
}
