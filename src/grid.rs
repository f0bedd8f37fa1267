use bit_set::BitSet;
use fnv::FnvHashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use std::fmt;
use std::rc::Rc;

use crate::cells::{Cell, CellKind, CompassPrimary, Position, PositionSmallVec};
use crate::grid_dimensions::MazeDimensions;
use crate::grid_displays::GridDisplay;
use crate::units::{Height, Stride, Width};

/// Rectangular grid of wall and space cells.
///
/// Cells at odd (row, column) inside the outer boundary start as space, everything else starts as
/// wall. Carving knocks down the walls between lattice cells, so the grid doubles as the maze.
pub struct Grid {
    width: Width,
    height: Height,
    kinds: Vec<CellKind>,
    visited: BitSet,
    unvisited_spaces: usize,
    steps: Vec<Position>,
    grid_display: Option<Rc<dyn GridDisplay>>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {:?}, height: {:?}, unvisited spaces: {}, steps: {}",
               self.width, self.height, self.unvisited_spaces, self.steps.len())
    }
}

impl Grid {
    pub fn new(dimensions: MazeDimensions) -> Grid {
        let (Width(w), Height(h)) = (dimensions.width(), dimensions.height());
        let mut kinds = Vec::with_capacity(w * h);
        let mut unvisited_spaces = 0;

        for row in 0..h {
            for col in 0..w {
                let is_lattice_cell = row % 2 == 1 && col % 2 == 1 && row < h - 1 && col < w - 1;
                if is_lattice_cell {
                    kinds.push(CellKind::Space);
                    unvisited_spaces += 1;
                } else {
                    kinds.push(CellKind::Wall);
                }
            }
        }

        Grid {
            width: dimensions.width(),
            height: dimensions.height(),
            kinds,
            visited: BitSet::with_capacity(w * h),
            unvisited_spaces,
            steps: Vec::new(),
            grid_display: None,
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.kinds.len()
    }

    /// Opening cut into the left boundary, where path walks end.
    #[inline]
    pub fn entrance(&self) -> Position {
        Position::new(0, self.height.0 - 2)
    }

    /// Opening cut into the right boundary, where path walks start.
    #[inline]
    pub fn exit(&self) -> Position {
        Position::new(self.width.0 - 1, 1)
    }

    #[inline]
    pub fn set_grid_display(&mut self, grid_display: Option<Rc<dyn GridDisplay>>) {
        self.grid_display = grid_display;
    }

    /// Space cells that have not been marked visited yet.
    #[inline]
    pub fn unvisited_count(&self) -> usize {
        self.unvisited_spaces
    }

    /// Convert a position to a one dimensional row major index.
    /// Returns None if the position is outside the grid.
    #[inline]
    pub fn position_to_index(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.y * self.width.0 + pos.x)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x < self.width.0 && pos.y < self.height.0
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.position_to_index(pos).map(|index| {
            Cell {
                kind: self.kinds[index],
                visited: self.visited.contains(index),
            }
        })
    }

    #[inline]
    pub fn is_space(&self, pos: Position) -> bool {
        self.cell(pos).map_or(false, |cell| cell.kind == CellKind::Space)
    }

    #[inline]
    pub fn is_visited(&self, pos: Position) -> bool {
        self.cell(pos).map_or(false, |cell| cell.visited)
    }

    /// Unvisited, non wall cells `stride` away to the left, right, top and bottom, in that order.
    pub fn neighbours_at(&self, pos: Position, stride: Stride) -> PositionSmallVec {
        CompassPrimary::QUERY_ORDER
            .iter()
            .filter_map(|dir| pos.offset(*dir, stride.0))
            .filter(|neighbour| {
                self.cell(*neighbour)
                    .map_or(false, |cell| !cell.visited && !cell.is_wall())
            })
            .collect()
    }

    /// Mark a space cell visited and remember it on the step stack for backtracking.
    pub fn mark_visited(&mut self, pos: Position) {
        if let Some(index) = self.position_to_index(pos) {
            let newly_visited = self.visited.insert(index);
            if newly_visited && self.kinds[index] == CellKind::Space {
                self.unvisited_spaces = self.unvisited_spaces.saturating_sub(1);
            }
            self.steps.push(pos);
        }
    }

    /// Set the visited flag only, without touching the step stack or the unvisited counter.
    pub fn visit(&mut self, pos: Position) {
        if let Some(index) = self.position_to_index(pos) {
            self.visited.insert(index);
        }
    }

    /// Most recently visited position, removed from the step stack.
    #[inline]
    pub fn pop_step(&mut self) -> Option<Position> {
        self.steps.pop()
    }

    /// Knock down the wall cell midway between `a` and `b`.
    ///
    /// `a` and `b` must lie on the same row or column.
    pub fn open_wall_between(&mut self, a: Position, b: Position) {
        debug_assert!(a.x == b.x || a.y == b.y, "{:?} and {:?} are not aligned", a, b);

        let step = |from: usize, to: usize| -> isize {
            (to as isize - from as isize).signum()
        };
        let mid_x = (a.x as isize + step(a.x, b.x)) as usize;
        let mid_y = (a.y as isize + step(a.y, b.y)) as usize;
        self.open_cell(Position::new(mid_x, mid_y));
    }

    /// Turn a cell into visited space, whatever it was before.
    pub fn open_cell(&mut self, pos: Position) {
        if let Some(index) = self.position_to_index(pos) {
            self.kinds[index] = CellKind::Space;
            self.visited.insert(index);
        }
    }

    /// Forget every visited flag and the step stack. Cell kinds are untouched and every
    /// space cell counts as unvisited again.
    pub fn reset_visited(&mut self) {
        self.visited.clear();
        self.steps.clear();
        self.unvisited_spaces = self.kinds.iter().filter(|&&kind| kind == CellKind::Space).count();
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            width: self.width.0,
            cells_count: self.size(),
        }
    }

    pub fn iter_row(&self) -> impl Iterator<Item = Vec<Position>> {
        let width = self.width.0;
        (0..self.height.0).map(move |y| {
            (0..width).map(|x| Position::new(x, y)).collect::<Vec<_>>()
        })
    }

    /// Undirected graph with a node per space cell and an edge between each pair of
    /// horizontally or vertically adjacent space cells.
    pub fn to_graph(&self) -> UnGraph<Position, ()> {
        let spaces_count = self.kinds.iter().filter(|kind| **kind == CellKind::Space).count();
        let mut graph = UnGraph::with_capacity(spaces_count, spaces_count);
        let mut node_indices: FnvHashMap<Position, NodeIndex> =
            FnvHashMap::with_capacity_and_hasher(spaces_count, Default::default());

        for pos in self.iter().filter(|pos| self.is_space(*pos)) {
            let node = graph.add_node(pos);
            let _ = node_indices.insert(pos, node);
        }

        for (pos, node) in node_indices.iter() {
            for dir in &[CompassPrimary::East, CompassPrimary::South] {
                if let Some(neighbour_node) = pos.offset(*dir, 1)
                    .and_then(|neighbour| node_indices.get(&neighbour)) {
                    let _ = graph.add_edge(*node, *neighbour_node, ());
                }
            }
        }

        graph
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL: char = '#';
        const SPACE: char = ' ';

        let mut output = String::with_capacity(self.size() + self.height.0);
        for row in self.iter_row() {
            for pos in row {
                let overlay = self.grid_display
                    .as_ref()
                    .and_then(|display| display.render_cell_body(pos));
                let glyph = match overlay {
                    Some(c) => c,
                    None if self.is_space(pos) => SPACE,
                    None => WALL,
                };
                output.push(glyph);
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    width: usize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let pos = Position::new(self.current_cell_number % self.width,
                                    self.current_cell_number / self.width);
            self.current_cell_number += 1;
            Some(pos)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()

impl<'a> IntoIterator for &'a Grid {
    type Item = Position;
    type IntoIter = CellIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
