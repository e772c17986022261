use std::path::Path;

use structopt::StructOpt;

use crate::error::Error;
use crate::keypad::{Keypad, BASIC_LAYOUT, BASIC_START, STRANGE_LAYOUT, STRANGE_START};
use crate::opt::Opt;
use crate::screen::Screen;
use crate::walker::Walker;

mod cracker;
mod error;
mod keypad;
mod opt;
mod position;
mod screen;
mod walker;

fn main() {
    if let Err(error) = run(Opt::from_args()) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Error> {
    match opt {
        Opt::Crack { door_id, secure } => {
            let password = if secure {
                cracker::crack_secure(&door_id)
            } else {
                cracker::crack(&door_id)
            };
            println!("The code is {}", password);
        }
        Opt::Navigate { file, revisit } => {
            let mut walker = Walker::new();
            walker.navigate(read(&file).trim_end())?;
            let end = walker.position();
            println!(
                "The walk ends at ({}, {}) facing {:?}, {} blocks away.",
                end.x,
                end.y,
                walker.facing(),
                walker.manhattan_distance()
            );
            if revisit {
                let crossing = walker.first_revisited_intersection()?;
                println!(
                    "The first intersection visited twice is ({}, {}).",
                    crossing.x, crossing.y
                );
            }
        }
        Opt::Keypad { file, strange } => {
            let mut keypad = if strange {
                Keypad::new(&STRANGE_LAYOUT, STRANGE_START)
            } else {
                Keypad::new(&BASIC_LAYOUT, BASIC_START)
            };
            keypad.punch_code(read(&file).trim_end())?;
            println!("The code is {}", keypad.code());
        }
        Opt::Screen {
            file,
            width,
            height,
            render,
        } => {
            let mut screen = Screen::new(width, height);
            for line in read(&file).lines().filter(|line| !line.is_empty()) {
                screen.apply(line)?;
            }
            println!("{} pixels are lit.", screen.lit());
            if render {
                print!("{}", screen);
            }
        }
    }
    Ok(())
}

fn read(file: &Path) -> String {
    std::fs::read_to_string(file).unwrap()
}
