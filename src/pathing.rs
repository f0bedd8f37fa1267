use itertools::Itertools;
use rand::Rng;
use std::ops::Deref;

use crate::cells::Position;
use crate::generators::random_integer;
use crate::grid::Grid;
use crate::units::Stride;

/// Ordered positions of a route through the maze, from the exit side to the entrance side.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Track {
    positions: Vec<Position>,
}

impl Track {
    pub fn new(positions: Vec<Position>) -> Track {
        Track { positions }
    }

    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.positions.first().cloned()
    }

    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.positions.last().cloned()
    }

    /// Does every step move to a horizontally or vertically adjacent cell?
    pub fn is_continuous(&self) -> bool {
        self.positions
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(*b))
    }
}

impl Deref for Track {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        &self.positions
    }
}

/// Walk from the exit to the entrance of a carved maze.
///
/// This is a randomised depth first search over directly adjacent space cells, not a shortest
/// path search: different calls may produce different routes. The track stack only ever holds the
/// route from the exit to the cell being explored, dead ends are popped off again, so the stack
/// is already in exit to entrance order when the entrance is reached.
///
/// Visited flags of the grid are reset first and left dirty afterwards.
/// Returns None if the entrance cannot be reached.
pub fn find_track<R: Rng>(grid: &mut Grid, rng: &mut R) -> Option<Track> {
    grid.reset_visited();

    let start = grid.exit();
    let goal = grid.entrance();
    let mut current = start;
    let mut track = vec![];
    let mut backtracks = 0usize;
    grid.visit(start);

    while current != goal {
        let neighbours = grid.neighbours_at(current, Stride(1));

        if !neighbours.is_empty() {
            track.push(current);
            current = neighbours[random_integer(rng, 0, neighbours.len() - 1)];
            grid.visit(current);
        } else if let Some(previous) = track.pop() {
            current = previous;
            backtracks += 1;
        } else {
            log::warn!("Exhausted the maze without reaching {:?} from {:?}", goal, start);
            return None;
        }
    }
    track.push(goal);

    log::debug!("Found track of {} cells after {} backtracks", track.len(), backtracks);
    Some(Track::new(track))
}
