use docopt::Docopt;
use log::LevelFilter;
use serde_derive::Deserialize;
use simple_logger::SimpleLogger;
use snake_maze::{
    animation::TICK_INTERVAL,
    grid::Grid,
    grid_dimensions::MazeDimensions,
    grid_displays::{EndPointsDisplay, FrameLayout, GridDisplay, SnakeFrameDisplay, TrackDisplay},
    maze::Maze,
    renderers,
};
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
    rc::Rc,
    thread,
};

const USAGE: &str = "Snake Maze

Usage:
    snake_maze_driver -h | --help
    snake_maze_driver [render | path] [options]
    snake_maze_driver escape [options] [--frames]

Commands:
    render                 Generate a maze and show it with its entrance (S) and exit (E) [default].
    path                   Generate a maze and show an escape track from the exit to the entrance.
    escape                 Generate a maze and play the snake escaping along the track.

Options:
    -h --help              Show this screen.
    --width=<w>            Maze width in cells, at least 3, even values are rounded up [default: 21].
    --height=<h>           Maze height in cells, at least 3, even values are rounded up [default: 21].
    --seed=<n>             Seed the random number generator for a reproducible maze.
    --text-out=<path>      Output file path for a textual rendering of the maze.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --cell-pixels=<n>      Pixel count for the side of one cell in the image [default: 10] max 255.
    --save-edges=<path>    Serialize the open cells as a graph: line 1 is n(#cells) m(#edges), every other line an edge between two 1-based row major cell indices.
    --frames               Print every escape frame below the previous one, without pausing, instead of redrawing in place.
    --verbose              Log debug details of carving and path walking.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_render: bool,
    cmd_path: bool,
    cmd_escape: bool,
    flag_width: String,
    flag_height: String,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_save_edges: String,
    flag_frames: bool,
    flag_verbose: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::snake_maze::errors::Error, ::snake_maze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            ImageSaveError(::image::ImageError);
            LoggerSetup(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let level = if args.flag_verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let dimensions = MazeDimensions::parse(&args.flag_width, &args.flag_height)?;
    let mut maze = match args.flag_seed {
        Some(seed) => Maze::with_seed(dimensions, seed),
        None => Maze::new(dimensions),
    };
    maze.regenerate();

    if !args.flag_save_edges.is_empty() {
        let grid = maze.grid().ok_or_else(no_maze)?;
        save_maze_graph(grid, &args.flag_save_edges)?;
    }

    let show_track = args.cmd_path || args.cmd_escape;
    let track = if show_track {
        Some(maze.draw_path()?.to_vec())
    } else {
        None
    };

    if args.cmd_escape {
        let layout = if args.flag_frames {
            FrameLayout::Sequential
        } else {
            FrameLayout::InPlace
        };
        play_escape(&mut maze, layout)?;
    }

    let grid = maze.grid_mut().ok_or_else(no_maze)?;
    let display: Rc<dyn GridDisplay> = match track {
        Some(ref t) => Rc::new(TrackDisplay::new(t)),
        None => Rc::new(EndPointsDisplay::new(grid.entrance(), grid.exit())),
    };
    grid.set_grid_display(Some(display));

    if args.flag_text_out.is_empty() {
        println!("{}", grid);
    } else {
        write_text_to_file(&grid.to_string(), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_image_out.is_empty() {
        let render_options = renderers::RenderOptionsBuilder::new()
            .track(track.as_ref().map(|t| t.as_slice()))
            .cell_side_pixels_length(args.flag_cell_pixels)
            .output_file(Some(Path::new(&args.flag_image_out)))
            .build();
        renderers::render_grid(grid, &render_options)?;
    }

    Ok(())
}

/// Draw every animation frame in the terminal, one frame per tick.
fn play_escape(maze: &mut Maze, layout: FrameLayout) -> Result<()> {
    maze.start_escape()?;
    let track = maze.track().cloned().ok_or_else(no_maze)?;
    let stdout = io::stdout();

    while let Some(frame) = maze.tick() {
        let tick = frame.tick;
        let grid = maze.grid_mut().ok_or_else(no_maze)?;
        let display: Rc<dyn GridDisplay> = Rc::new(SnakeFrameDisplay::new(frame, &track));
        grid.set_grid_display(Some(display));

        layout.write_frame(&mut stdout.lock(), grid, tick)?;

        if layout == FrameLayout::InPlace {
            thread::sleep(TICK_INTERVAL);
        }
    }

    Ok(())
}

fn no_maze() -> snake_maze::errors::Error {
    snake_maze::errors::ErrorKind::NoMaze.into()
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(grid: &Grid, file_path: &str) -> Result<()> {

    let graph = grid.to_graph();
    let mut graph_data = String::new();
    graph_data.push_str(&format!("{} {}\n", grid.size(), graph.edge_count()));

    for edge in graph.raw_edges() {
        let (src, dst) = (graph[edge.source()], graph[edge.target()]);
        let index_a = grid.position_to_index(src)
            .expect("graph nodes are grid positions");
        let index_b = grid.position_to_index(dst)
            .expect("graph nodes are grid positions");
        graph_data.push_str(&format!("{} {}\n", index_a + 1, index_b + 1));
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
