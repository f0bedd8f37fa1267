use rand::Rng;

use crate::cells::Position;
use crate::grid::Grid;
use crate::grid_dimensions::MazeDimensions;
use crate::units::{Height, Stride, Width};

/// Uniformly random integer in `[min, max]`, both inclusive.
///
/// Calling with `min > max` is a bug at the call site.
pub fn random_integer<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    debug_assert!(min <= max, "empty range [{}, {}]", min, max);
    rng.gen_range(min..=max)
}

/// Allocate a fresh grid with the given dimensions and carve a maze into it.
pub fn build_maze<R: Rng>(dimensions: MazeDimensions, rng: &mut R) -> Grid {
    let mut grid = Grid::new(dimensions);
    recursive_backtracker(&mut grid, rng);
    grid
}

/// Apply the recursive backtracker maze generation algorithm to a freshly initialised grid.
///
/// A random walk starts from the top left lattice cell, knocking down the wall to a random
/// unvisited lattice cell two steps away. When the walk reaches a dead end it backtracks along
/// the step stack until it finds a cell with unvisited neighbours. The walk ends once every
/// lattice cell has been visited, which leaves a perfect maze: a spanning tree over the space
/// cells.
///
/// Finally the entrance (left boundary, second to last row) and the exit (right boundary, second
/// row) are opened.
pub fn recursive_backtracker<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let (Width(w), Height(h)) = (grid.width(), grid.height());
    log::debug!("Carving {}x{} maze with {} lattice cells", w, h, grid.unvisited_count());

    let mut current = Position::new(1, 1);
    grid.mark_visited(current);
    let mut backtracks = 0usize;

    while grid.unvisited_count() > 0 {
        let neighbours = grid.neighbours_at(current, Stride(2));

        if !neighbours.is_empty() {
            let next = neighbours[random_integer(rng, 0, neighbours.len() - 1)];
            grid.open_wall_between(current, next);
            current = next;
            grid.mark_visited(current);
        } else if let Some(previous) = grid.pop_step() {
            current = previous;
            backtracks += 1;
        } else {
            // Nowhere left to go with lattice cells unvisited: they are unreachable from (1, 1).
            log::warn!("{} lattice cells unreachable while carving", grid.unvisited_count());
            break;
        }
    }

    grid.open_cell(Position::new(0, h - 2));
    grid.open_cell(Position::new(w - 1, 1));

    log::debug!("Carving finished after {} backtracks", backtracks);
}

#[cfg(test)]
mod tests {
    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::CellKind;

    fn carved(w: usize, h: usize, seed: u64) -> Grid {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        build_maze(MazeDimensions::new(w, h).unwrap(), &mut rng)
    }

    fn is_boundary_opening(g: &Grid, pos: Position) -> bool {
        let (Width(w), Height(h)) = (g.width(), g.height());
        pos == Position::new(0, h - 2) || pos == Position::new(w - 1, 1)
    }

    fn assert_perfect_maze(g: &Grid) {
        let graph = g.to_graph();
        assert_eq!(connected_components(&graph), 1, "maze not connected:\n{}", g);
        assert!(!is_cyclic_undirected(&graph), "maze has a loop:\n{}", g);
        assert_eq!(graph.edge_count(), graph.node_count() - 1);
    }

    #[test]
    fn random_integer_stays_in_range() {
        let mut rng = XorShiftRng::seed_from_u64(7);
        for _ in 0..1000 {
            let n = random_integer(&mut rng, 2, 5);
            assert!(n >= 2 && n <= 5);
        }
        assert_eq!(random_integer(&mut rng, 3, 3), 3);
    }

    #[test]
    fn smallest_maze() {
        let g = carved(3, 3, 1);
        assert_eq!(g.to_string(), "###\n   \n###\n");
    }

    #[test]
    fn five_by_five_scenario() {
        for seed in 0..20 {
            let g = carved(5, 5, seed);
            for &(x, y) in &[(1, 1), (3, 1), (1, 3), (3, 3)] {
                assert!(g.is_space(Position::new(x, y)));
            }
            // entrance at (row 3, col 0), exit at (row 1, col 4)
            assert!(g.is_space(Position::new(0, 3)));
            assert!(g.is_space(Position::new(4, 1)));
            // three of the four walls between lattice cells are knocked down
            let openings = [(2, 1), (1, 2), (3, 2), (2, 3)]
                .iter()
                .filter(|&&(x, y)| g.is_space(Position::new(x, y)))
                .count();
            assert_eq!(openings, 3);
            assert_perfect_maze(&g);
        }
    }

    #[test]
    fn every_lattice_cell_visited() {
        let g = carved(21, 15, 42);
        assert_eq!(g.unvisited_count(), 0);
        for pos in g.iter() {
            if g.is_space(pos) {
                assert!(g.is_visited(pos), "{:?} never visited", pos);
            }
        }
    }

    #[test]
    fn even_lines_stay_walls() {
        let g = carved(31, 17, 3);
        for pos in g.iter() {
            if (pos.x % 2 == 0 && pos.y % 2 == 0) && !is_boundary_opening(&g, pos) {
                assert_eq!(g.cell(pos).unwrap().kind, CellKind::Wall, "{:?}", pos);
            }
        }
    }

    #[test]
    fn boundary_has_exactly_two_openings() {
        let g = carved(15, 9, 11);
        let (Width(w), Height(h)) = (g.width(), g.height());
        let boundary_spaces = g.iter()
            .filter(|pos| pos.x == 0 || pos.y == 0 || pos.x == w - 1 || pos.y == h - 1)
            .filter(|pos| g.is_space(*pos))
            .collect::<Vec<_>>();
        assert_eq!(boundary_spaces, vec![Position::new(14, 1), Position::new(0, 7)]);
    }

    #[test]
    fn quickcheck_perfect_mazes() {
        fn prop(w: u8, h: u8, seed: u64) -> TestResult {
            let g = carved(3 + (w % 40) as usize, 3 + (h % 40) as usize, seed);
            let (Width(w), Height(h)) = (g.width(), g.height());
            let graph = g.to_graph();
            let perfect = connected_components(&graph) == 1 && !is_cyclic_undirected(&graph);
            let openings_open = g.is_space(Position::new(0, h - 2)) &&
                                g.is_space(Position::new(w - 1, 1));
            let boundary_spaces = g.iter()
                .filter(|pos| pos.x == 0 || pos.y == 0 || pos.x == w - 1 || pos.y == h - 1)
                .filter(|pos| g.is_space(*pos))
                .count();
            TestResult::from_bool(perfect && openings_open && boundary_spaces == 2)
        }
        quickcheck(prop as fn(u8, u8, u64) -> TestResult);
    }
}
