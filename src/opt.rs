use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt)]
pub enum Opt {
    /// Brute-force a door password from its id
    Crack {
        door_id: String,

        /// Use the positional (second door) scheme
        #[structopt(long)]
        secure: bool,
    },

    /// Follow turn-and-walk instructions across the street grid
    Navigate {
        /// File holding one "R2, L3, ..." instruction line
        file: PathBuf,

        /// Also report the first intersection visited twice
        #[structopt(long)]
        revisit: bool,
    },

    /// Punch a keypad code, one line of U/D/L/R moves per button
    Keypad {
        file: PathBuf,

        /// Use the diamond layout instead of the 3x3 one
        #[structopt(long)]
        strange: bool,
    },

    /// Run rect/rotate instructions against a pixel screen
    Screen {
        file: PathBuf,

        #[structopt(long, default_value = "50")]
        width: usize,

        #[structopt(long, default_value = "6")]
        height: usize,

        /// Print the final raster
        #[structopt(long)]
        render: bool,
    },
}
