use std::fmt;
use std::fmt::Write;

use itertools::iproduct;

use crate::error::Error;

/// Pixel raster driven by `rect` and `rotate` instructions.
pub struct Screen {
    width: usize,
    height: usize,
    // row-major, true = lit
    pixels: Vec<bool>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    /// Applies one instruction: `rect WxH`, `rotate row y=I by N` or
    /// `rotate column x=I by N`. Anything else, including an out-of-range
    /// row or column index, fails without touching the raster.
    pub fn apply(&mut self, instruction: &str) -> Result<(), Error> {
        let invalid = || Error::InvalidOperation(instruction.to_string());

        if let Some(dims) = instruction.strip_prefix("rect ") {
            let (width, height) = dims.split_once('x').ok_or_else(invalid)?;
            let width = width.parse().map_err(|_| invalid())?;
            let height = height.parse().map_err(|_| invalid())?;
            self.rect(width, height);
        } else if let Some(rest) = instruction.strip_prefix("rotate row y=") {
            let (y, by) = parse_rotation(rest).ok_or_else(invalid)?;
            if y >= self.height {
                return Err(invalid());
            }
            self.rotate_row(y, by);
        } else if let Some(rest) = instruction.strip_prefix("rotate column x=") {
            let (x, by) = parse_rotation(rest).ok_or_else(invalid)?;
            if x >= self.width {
                return Err(invalid());
            }
            self.rotate_column(x, by);
        } else {
            return Err(invalid());
        }
        Ok(())
    }

    /// Lights the top-left `width` x `height` block.
    fn rect(&mut self, width: usize, height: usize) {
        for (x, y) in iproduct!(0..width.min(self.width), 0..height.min(self.height)) {
            self.pixels[y * self.width + x] = true;
        }
    }

    fn rotate_row(&mut self, y: usize, by: usize) {
        let row = &mut self.pixels[y * self.width..(y + 1) * self.width];
        if let Some(by) = by.checked_rem(row.len()) {
            row.rotate_right(by);
        }
    }

    fn rotate_column(&mut self, x: usize, by: usize) {
        let mut column: Vec<bool> = (0..self.height)
            .map(|y| self.pixels[y * self.width + x])
            .collect();
        if let Some(by) = by.checked_rem(column.len()) {
            column.rotate_right(by);
        }
        for (y, pixel) in column.into_iter().enumerate() {
            self.pixels[y * self.width + x] = pixel;
        }
    }

    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel).count()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.pixels.chunks(self.width) {
            for &pixel in row {
                f.write_char(if pixel { '#' } else { '.' })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

// "I by N" -> (I, N)
fn parse_rotation(rest: &str) -> Option<(usize, usize)> {
    let (index, by) = rest.split_once(" by ")?;
    Some((index.parse().ok()?, by.parse().ok()?))
}

#[test]
fn performs_operations() {
    let mut screen = Screen::new(7, 3);
    assert_eq!(screen.to_string(), ".......\n.......\n.......\n");

    screen.apply("rect 3x2").unwrap();
    assert_eq!(screen.to_string(), "###....\n###....\n.......\n");

    screen.apply("rotate column x=1 by 1").unwrap();
    assert_eq!(screen.to_string(), "#.#....\n###....\n.#.....\n");

    screen.apply("rotate row y=0 by 4").unwrap();
    assert_eq!(screen.to_string(), "....#.#\n###....\n.#.....\n");

    screen.apply("rotate column x=1 by 1").unwrap();
    assert_eq!(screen.to_string(), ".#..#.#\n#.#....\n.#.....\n");

    assert_eq!(screen.lit(), 6);
}

#[test]
fn rotation_wraps() {
    let mut screen = Screen::new(3, 2);
    screen.apply("rect 1x1").unwrap();
    screen.apply("rotate row y=0 by 7").unwrap();
    assert_eq!(screen.to_string(), ".#.\n...\n");

    screen.apply("rotate column x=1 by 2").unwrap();
    assert_eq!(screen.to_string(), ".#.\n...\n");
}

#[test]
fn rect_is_clamped() {
    let mut screen = Screen::new(2, 2);
    screen.apply("rect 5x5").unwrap();
    assert_eq!(screen.lit(), 4);
}

#[test]
fn rejects_bad_operations() {
    let mut screen = Screen::new(7, 3);
    assert_eq!(
        screen.apply("rotate diagonal z=1 by 1"),
        Err(Error::InvalidOperation(
            "rotate diagonal z=1 by 1".to_string()
        ))
    );
    assert_eq!(
        screen.apply("rotate row y=3 by 1"),
        Err(Error::InvalidOperation("rotate row y=3 by 1".to_string()))
    );
    assert_eq!(
        screen.apply("rect 3"),
        Err(Error::InvalidOperation("rect 3".to_string()))
    );
    assert_eq!(screen.lit(), 0);
}
