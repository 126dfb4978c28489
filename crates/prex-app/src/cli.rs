//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use prex_core::{Direction, ElementId, InsertDirection, SlideId};

#[derive(Parser, Debug)]
#[command(name = "prex", about, version, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (repeat for more detail)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Load configuration from a specific file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Directory the deck is stored in
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the stored deck as JSON
    Show,
    /// Create a slide at a grid cell
    AddSlide {
        #[arg(allow_hyphen_values = true)]
        x: i64,
        #[arg(allow_hyphen_values = true)]
        y: i64,
    },
    /// Insert a slide after the focused one and focus it
    Insert {
        #[arg(value_enum)]
        direction: InsertArg,
    },
    /// Delete a slide and close the gap it leaves
    RemoveSlide { id: SlideId },
    /// Focus a slide
    Focus { id: SlideId },
    /// Focus the neighbouring slide
    Navigate {
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Add a text element to the focused slide
    AddText { text: Option<String> },
    /// Add an image or video file to the focused slide
    AddMedia { path: PathBuf },
    /// Merge a JSON patch onto an element
    UpdateElement {
        slide: SlideId,
        element: ElementId,
        patch: String,
    },
    /// Delete an element
    RemoveElement { slide: SlideId, element: ElementId },
    /// Write the deck to a project file
    Export { path: PathBuf },
    /// Replace the deck with a project file
    Import { path: PathBuf },
    /// Start over with a single empty slide
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InsertArg {
    Right,
    Down,
}

impl From<InsertArg> for InsertDirection {
    fn from(arg: InsertArg) -> Self {
        match arg {
            InsertArg::Right => InsertDirection::AfterInRow,
            InsertArg::Down => InsertDirection::AfterInColumn,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Left,
    Right,
    Up,
    Down,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Left => Direction::Left,
            DirectionArg::Right => Direction::Right,
            DirectionArg::Up => Direction::Up,
            DirectionArg::Down => Direction::Down,
        }
    }
}

impl Cli {
    /// Log level for the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
