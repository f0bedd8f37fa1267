use image::{ImageResult, Rgb, RgbImage};
use std::path::Path;

use crate::cells::Position;
use crate::grid::Grid;
use crate::units::{Height, Width};

const WALL_COLOUR: Rgb<u8> = Rgb([40, 40, 48]);
const SPACE_COLOUR: Rgb<u8> = Rgb([235, 235, 225]);
const TRACK_COLOUR: Rgb<u8> = Rgb([230, 120, 40]);

#[derive(Debug)]
pub struct RenderOptions<'path> {
    track: Option<Vec<Position>>,
    cell_side_pixels_length: u8,
    output_file: Option<&'path Path>,
}

impl<'path> Default for RenderOptions<'path> {
    fn default() -> Self {
        RenderOptions {
            track: None,
            cell_side_pixels_length: 10,
            output_file: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderOptionsBuilder<'path> {
    options: RenderOptions<'path>,
}

impl<'path> RenderOptionsBuilder<'path> {
    pub fn new() -> RenderOptionsBuilder<'path> {
        RenderOptionsBuilder { options: RenderOptions::default() }
    }

    pub fn track(mut self, track: Option<&[Position]>) -> Self {
        self.options.track = track.map(|t| t.to_vec());
        self
    }

    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u8) -> Self {
        self.options.cell_side_pixels_length = cell_side_pixels_length.max(1);
        self
    }

    pub fn output_file(mut self, output_file: Option<&'path Path>) -> Self {
        self.options.output_file = output_file;
        self
    }

    pub fn build(self) -> RenderOptions<'path> {
        self.options
    }
}

/// Paint every cell of the grid as a filled square, highlighting the track if there is one.
pub fn render_image(grid: &Grid, options: &RenderOptions) -> RgbImage {
    let side = u32::from(options.cell_side_pixels_length);
    let (Width(w), Height(h)) = (grid.width(), grid.height());
    let mut img = RgbImage::from_pixel(w as u32 * side, h as u32 * side, WALL_COLOUR);

    let mut paint_cell = |pos: Position, colour: Rgb<u8>| {
        let (left, top) = (pos.x as u32 * side, pos.y as u32 * side);
        for x in left..left + side {
            for y in top..top + side {
                img.put_pixel(x, y, colour);
            }
        }
    };

    for pos in grid.iter().filter(|pos| grid.is_space(*pos)) {
        paint_cell(pos, SPACE_COLOUR);
    }
    if let Some(ref track) = options.track {
        for pos in track {
            paint_cell(*pos, TRACK_COLOUR);
        }
    }

    img
}

/// Render the grid and save it as a PNG if an output file is set.
pub fn render_grid(grid: &Grid, options: &RenderOptions) -> ImageResult<RgbImage> {
    let img = render_image(grid, options);
    if let Some(path) = options.output_file {
        img.save(path)?;
        log::info!("Saved maze image to {}", path.display());
    }
    Ok(img)
}
