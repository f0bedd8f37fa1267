use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::animation::{AnimationState, SnakeAnimation, SnakeFrame};
use crate::errors::*;
use crate::generators;
use crate::grid::Grid;
use crate::grid_dimensions::MazeDimensions;
use crate::pathing::{self, Track};

/// One maze and everything derived from it: the carved grid, the cached escape track and the
/// escape animation.
///
/// Lifecycle: `new` → `regenerate` → path / animation requests, with `clear` and `resize`
/// available at any time. Regenerating drops the cached track and cancels the animation.
#[derive(Debug)]
pub struct Maze {
    dimensions: MazeDimensions,
    grid: Option<Grid>,
    track: Option<Track>,
    animation: SnakeAnimation,
    rng: XorShiftRng,
}

impl Maze {
    pub fn new(dimensions: MazeDimensions) -> Maze {
        Maze::with_rng(dimensions, XorShiftRng::from_entropy())
    }

    /// Maze whose carving and path walks are reproducible for a given seed.
    pub fn with_seed(dimensions: MazeDimensions, seed: u64) -> Maze {
        Maze::with_rng(dimensions, XorShiftRng::seed_from_u64(seed))
    }

    pub fn with_rng(dimensions: MazeDimensions, rng: XorShiftRng) -> Maze {
        Maze {
            dimensions,
            grid: None,
            track: None,
            animation: SnakeAnimation::new(),
            rng,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> MazeDimensions {
        self.dimensions
    }

    #[inline]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    #[inline]
    pub fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.grid.as_mut()
    }

    #[inline]
    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    #[inline]
    pub fn animation_state(&self) -> AnimationState {
        self.animation.state()
    }

    /// Use new dimensions from the next `regenerate` on.
    pub fn resize(&mut self, dimensions: MazeDimensions) {
        self.dimensions = dimensions;
    }

    /// Throw away the grid, the track and any running animation.
    pub fn clear(&mut self) {
        self.animation.cancel();
        self.grid = None;
        self.track = None;
    }

    /// Carve a brand new maze with the current dimensions.
    pub fn regenerate(&mut self) -> &Grid {
        self.clear();
        let grid = generators::build_maze(self.dimensions, &mut self.rng);
        log::info!("Generated {}x{} maze",
                   self.dimensions.width().0,
                   self.dimensions.height().0);
        self.grid.get_or_insert(grid)
    }

    /// Escape track from the exit to the entrance.
    ///
    /// The first call walks the maze, later calls return the same track until the maze is
    /// regenerated or `invalidate_track` is called.
    pub fn find_path(&mut self) -> Result<&Track> {
        if self.track.is_none() {
            let grid = self.grid.as_mut().ok_or(ErrorKind::NoMaze)?;
            let track = pathing::find_track(grid, &mut self.rng)
                .ok_or(ErrorKind::DisconnectedMaze)?;
            log::info!("Found escape track of {} cells", track.len());
            self.track = Some(track);
        }

        self.track.as_ref().ok_or_else(|| ErrorKind::NoMaze.into())
    }

    /// Forget the cached track so the next request walks the maze again.
    pub fn invalidate_track(&mut self) {
        self.track = None;
    }

    /// Track to highlight in the maze. Stops the escape animation.
    pub fn draw_path(&mut self) -> Result<&Track> {
        self.animation.cancel();
        self.find_path()
    }

    /// Restart the escape animation from the first tick.
    pub fn start_escape(&mut self) -> Result<()> {
        self.animation.cancel();
        self.find_path()?;
        self.animation.start();
        Ok(())
    }

    pub fn cancel_animation(&mut self) -> bool {
        self.animation.cancel()
    }

    /// Advance the escape animation by one tick.
    /// Returns None when no animation is running.
    pub fn tick(&mut self) -> Option<SnakeFrame> {
        match self.track {
            Some(ref track) => self.animation.advance(track),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Height, TickIndex, Width};

    fn maze(w: usize, h: usize, seed: u64) -> Maze {
        Maze::with_seed(MazeDimensions::new(w, h).unwrap(), seed)
    }

    #[test]
    fn path_before_generation_is_an_error() {
        let mut m = maze(9, 9, 0);
        match m.find_path() {
            Err(Error(ErrorKind::NoMaze, _)) => {}
            other => panic!("unexpected result {:?}", other),
        }
        assert!(m.start_escape().is_err());
        assert_eq!(m.tick(), None);
    }

    #[test]
    fn repeated_path_requests_reuse_the_track() {
        let mut m = maze(31, 31, 3);
        m.regenerate();
        let first = m.find_path().unwrap().clone();
        let second = m.find_path().unwrap().clone();
        let drawn = m.draw_path().unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first, drawn);
    }

    #[test]
    fn regeneration_clears_the_track() {
        let mut m = maze(31, 31, 4);
        m.regenerate();
        m.find_path().unwrap();
        assert!(m.track().is_some());

        m.regenerate();
        assert!(m.track().is_none());

        // the new track belongs to the new grid
        let track = m.find_path().unwrap().clone();
        let grid = m.grid().unwrap();
        assert!(track.iter().all(|pos| grid.is_space(*pos)));
    }

    #[test]
    fn invalidated_track_is_walked_again() {
        let mut m = maze(15, 15, 5);
        m.regenerate();
        m.find_path().unwrap();
        m.invalidate_track();
        assert!(m.track().is_none());
        let track = m.find_path().unwrap();
        assert!(track.is_continuous());
    }

    #[test]
    fn resize_applies_on_regenerate() {
        let mut m = maze(5, 5, 6);
        m.regenerate();
        m.resize(MazeDimensions::new(8, 4).unwrap());
        assert_eq!(m.dimensions(), MazeDimensions::new(9, 5).unwrap());
        assert_eq!(m.grid().unwrap().width(), Width(5));

        let grid = m.regenerate();
        assert_eq!(grid.width(), Width(9));
        assert_eq!(grid.height(), Height(5));
    }

    #[test]
    fn clear_drops_everything() {
        let mut m = maze(7, 7, 7);
        m.regenerate();
        m.start_escape().unwrap();
        m.clear();
        assert!(m.grid().is_none());
        assert!(m.track().is_none());
        assert_eq!(m.animation_state(), AnimationState::Cancelled);
    }

    #[test]
    fn escape_animation_runs_over_the_track() {
        let mut m = maze(11, 11, 8);
        m.regenerate();
        m.start_escape().unwrap();
        let track_len = m.track().unwrap().len();

        let mut ticks = 0;
        while let Some(frame) = m.tick() {
            assert_eq!(frame.tick, TickIndex(ticks));
            ticks += 1;
        }
        assert_eq!(ticks, track_len + 4);
        assert_eq!(m.animation_state(), AnimationState::Completed);
    }

    #[test]
    fn drawing_or_regenerating_cancels_the_animation() {
        let mut m = maze(11, 11, 9);
        m.regenerate();
        m.start_escape().unwrap();
        m.tick();
        m.draw_path().unwrap();
        assert_eq!(m.animation_state(), AnimationState::Cancelled);
        assert_eq!(m.tick(), None);

        m.start_escape().unwrap();
        m.tick();
        m.start_escape().unwrap();
        assert_eq!(m.animation_state(), AnimationState::Running(TickIndex(0)));

        m.regenerate();
        assert_eq!(m.animation_state(), AnimationState::Cancelled);
    }
}
