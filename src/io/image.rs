//! PNG export of generated chunks for visual debugging

use crate::io::configuration::PNG_CELL_SCALE;
use crate::io::error::{AlgorithmError, Result};
use crate::io::output::ChunkOutput;
use crate::spatial::tiles::{Direction, EdgeState, TileSet};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const WALL_COLOR: Rgba<u8> = Rgba([40, 40, 48, 255]);
const FLOOR_COLOR: Rgba<u8> = Rgba([214, 196, 150, 255]);
const BLOCKED_COLOR: Rgba<u8> = Rgba([170, 40, 40, 255]);
const UNKNOWN_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draw a chunk with one `PNG_CELL_SCALE` square per cell
///
/// Each placed tile is drawn as a floor path from the cell center out to
/// every open side, so connections between neighbors are visible. Blocked
/// cells are filled solid; ids missing from the tile set stay transparent.
pub fn render_chunk(output: &ChunkOutput, tiles: &TileSet) -> RgbaImage {
    let scale = PNG_CELL_SCALE;
    let mid = scale / 2;
    let width = output.width() as u32 * scale;
    let height = output.height() as u32 * scale;
    let mut img = ImageBuffer::from_pixel(width, height, WALL_COLOR);

    for ((y, x), id) in output.ids().indexed_iter() {
        let origin_x = x as u32 * scale;
        let origin_y = y as u32 * scale;

        let Some(id) = id else {
            fill_cell(&mut img, origin_x, origin_y, BLOCKED_COLOR);
            continue;
        };
        let Some(tile) = tiles.by_id(id) else {
            fill_cell(&mut img, origin_x, origin_y, UNKNOWN_COLOR);
            continue;
        };

        img.put_pixel(origin_x + mid, origin_y + mid, FLOOR_COLOR);
        for direction in Direction::ALL {
            if tile.edges.get(direction) != EdgeState::Open {
                continue;
            }
            for step in 1..=mid {
                let (px, py) = match direction {
                    Direction::North => (mid, mid - step),
                    Direction::South => (mid, mid + step),
                    Direction::East => (mid + step, mid),
                    Direction::West => (mid - step, mid),
                };
                img.put_pixel(origin_x + px, origin_y + py, FLOOR_COLOR);
            }
        }
    }

    img
}

fn fill_cell(img: &mut RgbaImage, origin_x: u32, origin_y: u32, color: Rgba<u8>) {
    for dy in 0..PNG_CELL_SCALE {
        for dx in 0..PNG_CELL_SCALE {
            img.put_pixel(origin_x + dx, origin_y + dy, color);
        }
    }
}

/// Export a chunk as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_chunk_as_png(output: &ChunkOutput, tiles: &TileSet, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_chunk(output, tiles)
        .save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
