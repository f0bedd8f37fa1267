use fnv::FnvHashSet;
use std::io::{self, Write};

use crate::animation::SnakeFrame;
use crate::cells::{CompassPrimary, Position};
use crate::grid::Grid;
use crate::units::TickIndex;

/// Text overlay for a grid.
pub trait GridDisplay {
    /// Render the contents of a grid cell as a single glyph.
    /// None leaves the plain wall or space glyph in place.
    fn render_cell_body(&self, _: Position) -> Option<char> {
        None
    }
}

#[derive(Debug)]
pub struct TrackDisplay {
    on_track_positions: FnvHashSet<Position>,
}

impl TrackDisplay {
    pub fn new(track: &[Position]) -> Self {
        TrackDisplay { on_track_positions: track.iter().cloned().collect() }
    }
}

impl GridDisplay for TrackDisplay {
    fn render_cell_body(&self, pos: Position) -> Option<char> {
        if self.on_track_positions.contains(&pos) {
            Some('.')
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub struct EndPointsDisplay {
    entrance: Position,
    exit: Position,
}

impl EndPointsDisplay {
    pub fn new(entrance: Position, exit: Position) -> EndPointsDisplay {
        EndPointsDisplay { entrance, exit }
    }
}

impl GridDisplay for EndPointsDisplay {
    fn render_cell_body(&self, pos: Position) -> Option<char> {
        if pos == self.entrance {
            Some('S')
        } else if pos == self.exit {
            Some('E')
        } else {
            None
        }
    }
}

/// Snake drawn on top of the track it is escaping along.
#[derive(Debug)]
pub struct SnakeFrameDisplay {
    frame: SnakeFrame,
    track: TrackDisplay,
}

impl SnakeFrameDisplay {
    pub fn new(frame: SnakeFrame, track: &[Position]) -> SnakeFrameDisplay {
        SnakeFrameDisplay {
            frame,
            track: TrackDisplay::new(track),
        }
    }
}

fn head_glyph(direction: CompassPrimary) -> char {
    match direction {
        CompassPrimary::North => '^',
        CompassPrimary::South => 'v',
        CompassPrimary::East => '>',
        CompassPrimary::West => '<',
    }
}

impl GridDisplay for SnakeFrameDisplay {
    fn render_cell_body(&self, pos: Position) -> Option<char> {
        match self.frame.head {
            Some((head, direction)) if head == pos => return Some(head_glyph(direction)),
            _ => {}
        }
        if self.frame.body.contains(&pos) {
            return Some('o');
        }
        match self.frame.tail {
            Some((tail, _)) if tail == pos => return Some('~'),
            _ => {}
        }
        self.track.render_cell_body(pos)
    }
}

/// How successive animation frames are laid out on a terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameLayout {
    /// Clear the screen and draw each frame over the previous one.
    InPlace,
    /// Print each frame below the previous one, headed by its tick.
    Sequential,
}

impl FrameLayout {
    pub fn write_frame<W: Write>(self, out: &mut W, grid: &Grid, tick: TickIndex) -> io::Result<()> {
        match self {
            // clear screen, cursor to top left
            FrameLayout::InPlace => write!(out, "\x1b[2J\x1b[H{}", grid)?,
            FrameLayout::Sequential => write!(out, "tick {}\n{}\n", tick.0, grid)?,
        }
        out.flush()
    }
}
