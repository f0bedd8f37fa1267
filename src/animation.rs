use smallvec::SmallVec;
use std::time::Duration;

use crate::cells::{CompassPrimary, Position};
use crate::units::TickIndex;

/// Time between two animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Head, two body segments and the tail.
pub const SNAKE_LENGTH: usize = 4;

/// What to draw for one tick of the escape animation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeFrame {
    pub tick: TickIndex,
    /// Head position and the direction it is moving in.
    pub head: Option<(Position, CompassPrimary)>,
    /// Body segments, the one right behind the head first.
    pub body: SmallVec<[Position; 2]>,
    pub tail: Option<(Position, CompassPrimary)>,
    /// Cell the tail has just left, to be drawn as plain track/space again.
    pub cleared: Option<Position>,
    pub completed: bool,
}

impl SnakeFrame {
    /// Every position painted with a snake segment this tick, head first.
    pub fn segments(&self) -> SmallVec<[Position; SNAKE_LENGTH]> {
        self.head
            .iter()
            .map(|&(pos, _)| pos)
            .chain(self.body.iter().cloned())
            .chain(self.tail.iter().map(|&(pos, _)| pos))
            .collect()
    }
}

/// Render instructions for tick `tick` of a snake sliding along `track`.
///
/// At tick `i` the head sits on `track[i]` and each following segment one cell further back.
/// Segments are only drawn while they are on the track, so the snake slides in from the track
/// start and out past its end. The animation is complete on tick `track.len() + 3`, when the tail
/// has left the last cell.
pub fn step_animation(track: &[Position], tick: TickIndex) -> SnakeFrame {
    let i = tick.0;
    let len = track.len();
    let at = |back: usize| -> Option<Position> {
        i.checked_sub(back).and_then(|index| track.get(index)).cloned()
    };

    let head = at(0).map(|pos| {
        let direction = if i > 0 {
            CompassPrimary::of_move(track[i - 1], pos)
        } else {
            CompassPrimary::West
        };
        (pos, direction)
    });

    let body = [at(1), at(2)].iter().filter_map(|pos| *pos).collect();

    // The tail faces the way the segment ahead of it moved; it enters and leaves facing west.
    let tail = at(3).map(|pos| {
        let direction = if i > 3 && i < len + 2 {
            CompassPrimary::of_move(pos, track[i - 2])
        } else {
            CompassPrimary::West
        };
        (pos, direction)
    });

    SnakeFrame {
        tick,
        head,
        body,
        tail,
        cleared: at(SNAKE_LENGTH),
        completed: i == len + SNAKE_LENGTH - 1,
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AnimationState {
    Idle,
    Running(TickIndex),
    Cancelled,
    Completed,
}

/// Escape animation driven by an external scheduler.
///
/// The owner calls `advance` every `TICK_INTERVAL` while `is_running` and draws the returned frame.
#[derive(Debug, Clone)]
pub struct SnakeAnimation {
    state: AnimationState,
}

impl Default for SnakeAnimation {
    fn default() -> Self {
        SnakeAnimation::new()
    }
}

impl SnakeAnimation {
    pub fn new() -> SnakeAnimation {
        SnakeAnimation { state: AnimationState::Idle }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        match self.state {
            AnimationState::Running(_) => true,
            _ => false,
        }
    }

    /// (Re)start from the first tick, cancelling any run in progress.
    pub fn start(&mut self) {
        self.cancel();
        log::debug!("Starting escape animation");
        self.state = AnimationState::Running(TickIndex(0));
    }

    /// Stop a running animation. Returns true if one was running.
    pub fn cancel(&mut self) -> bool {
        if let AnimationState::Running(TickIndex(i)) = self.state {
            log::debug!("Cancelling escape animation at tick {}", i);
            self.state = AnimationState::Cancelled;
            true
        } else {
            false
        }
    }

    /// Produce the frame for the current tick and move on to the next one.
    /// Returns None unless the animation is running.
    pub fn advance(&mut self, track: &[Position]) -> Option<SnakeFrame> {
        if let AnimationState::Running(tick) = self.state {
            let frame = step_animation(track, tick);
            self.state = if frame.completed {
                log::debug!("Escape animation completed after {} ticks", tick.0 + 1);
                AnimationState::Completed
            } else {
                AnimationState::Running(TickIndex(tick.0 + 1))
            };
            Some(frame)
        } else {
            None
        }
    }
}
