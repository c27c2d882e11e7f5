/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */


//! split images into grids of square tiles that are stored as individual PNG files, e.g. to post
//! image grids as custom emojis on chat platforms

use std::{fs, path::{Path,PathBuf}};
use image::{DynamicImage, GenericImageView};
use tracing::{debug,info};
use split_common::fs::{is_existing_file, reset_dir, path_to_lossy_string};

mod errors;
pub use errors::{Result,SplitImageError};

mod naming;
pub use naming::{grid_dimensions, tile_filename, output_path, emoji_shortcode, emoji_lines, derive_target, derive_target_in, EMOJI_FILENAME, TILE_EXT};

mod tiler;
pub use tiler::{split_image, pad_image, padded_dimensions, Tile, TileIter};

pub const DEFAULT_TILE_SIZE: u32 = 32;

/// everything a single split (or estimate) invocation needs to know
#[derive(Debug,Clone)]
pub struct SplitConfig {
    pub src_file: PathBuf,
    pub size: u32,
    pub estimate: bool,
    /// where the output directory gets created
    pub base_dir: PathBuf
}

impl SplitConfig {
    pub fn new (src_file: impl Into<PathBuf>, base_dir: impl Into<PathBuf>)->Self {
        SplitConfig {
            src_file: src_file.into(),
            size: DEFAULT_TILE_SIZE,
            estimate: false,
            base_dir: base_dir.into()
        }
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum SplitReport {
    Estimated { cols: u32, rows: u32 },
    Written { output_dir: PathBuf, cols: u32, rows: u32, n_tiles: usize }
}

/// (cols,rows) of the tile grid for `img`. This does not touch the file system
pub fn estimate (img: &DynamicImage, size: u32)->Result<(u32,u32)> {
    if size == 0 {
        return Err( SplitImageError::IllegalArgument("tile size has to be positive".into()))
    }
    let (w,h) = img.dimensions();
    let (cols,rows) = grid_dimensions( w, h, size);
    info!("grid dimensions {cols}x{rows} for {w}x{h} image with tile size {size}");

    Ok( (cols,rows) )
}

/// make sure `dir` exists and is empty. Whatever was in there before is gone
pub fn prepare_output_dir (dir: impl AsRef<Path>)->Result<()> {
    let dir = dir.as_ref();
    debug!("resetting output directory {:?}", dir);
    Ok( reset_dir( dir)? )
}

/// save tiles as PNGs in `dir`, returning the number of tiles written.
/// This stops at the first error - tiles that were saved before remain on disk
pub fn write_tiles<I> (tiles: I, dir: impl AsRef<Path>, name: &str)->Result<usize> where I: IntoIterator<Item=Tile> {
    let dir = dir.as_ref();
    let mut n = 0;

    for (x, y, tile) in tiles {
        let path = output_path( dir, name, x, y);
        debug!("saving {}", path_to_lossy_string( &path));
        tile.save( &path)?;
        n += 1;
    }

    Ok(n)
}

/// write the emoji shortcode file for a `cols`x`rows` grid into `dir`
pub fn write_emoji_file (dir: impl AsRef<Path>, name: &str, cols: u32, rows: u32)->Result<PathBuf> {
    let path = dir.as_ref().join( EMOJI_FILENAME);

    let mut contents = String::new();
    for line in emoji_lines( name, cols, rows) {
        contents.push_str( &line);
        contents.push('\n');
    }

    debug!("saving {}", path_to_lossy_string( &path));
    fs::write( &path, contents)?;
    Ok(path)
}

pub fn split_to_dir (img: &DynamicImage, size: u32, dir: impl AsRef<Path>, name: &str)->Result<SplitReport> {
    let dir = dir.as_ref();
    let tiles = split_image( img, size)?;
    let (cols,rows) = tiles.grid_dimensions();

    prepare_output_dir( dir)?;
    let n_tiles = write_tiles( tiles, dir, name)?;
    write_emoji_file( dir, name, cols, rows)?;

    info!("wrote {n_tiles} tiles to {}", path_to_lossy_string( dir));
    Ok( SplitReport::Written { output_dir: dir.to_path_buf(), cols, rows, n_tiles } )
}

/// the complete split (or estimate) operation for a source image file
pub fn run (config: &SplitConfig)->Result<SplitReport> {
    let src = &config.src_file;
    if !is_existing_file( src) {
        return Err( SplitImageError::NotFound(format!("no image file {}", path_to_lossy_string( src))))
    }

    let (output_dir, name) = derive_target_in( &config.base_dir, src)?;
    let img = image::open( src)?;

    if config.estimate {
        let (cols,rows) = estimate( &img, config.size)?;
        Ok( SplitReport::Estimated { cols, rows } )
    } else {
        split_to_dir( &img, config.size, &output_dir, &name)
    }
}
