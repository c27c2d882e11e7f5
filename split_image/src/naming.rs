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


use std::path::{Path,PathBuf};
use split_common::fs::{base_name, filename_of_path, cwd_path};

use crate::errors::{Result,SplitImageError};

pub const TILE_EXT: &str = "png";
pub const EMOJI_FILENAME: &str = "emoji.txt";

/// number of (cols,rows) required to cover a `width`x`height` image with `size`x`size` tiles
pub fn grid_dimensions (width: u32, height: u32, size: u32)->(u32,u32) {
    (width.div_ceil(size), height.div_ceil(size))
}

/// coordinates are zero padded to at least two digits, wider values are not truncated
pub fn tile_filename (name: &str, x: u32, y: u32)->String {
    format!("{name}-{x:02}-{y:02}.{TILE_EXT}")
}

pub fn output_path (dir: impl AsRef<Path>, name: &str, x: u32, y: u32)->PathBuf {
    dir.as_ref().join( tile_filename( name, x, y))
}

pub fn emoji_shortcode (name: &str, x: u32, y: u32)->String {
    format!(":{name}-{x:02}-{y:02}:")
}

/// one line per column, each with the concatenated shortcodes for all rows of that column
pub fn emoji_lines (name: &str, cols: u32, rows: u32)->Vec<String> {
    (0..cols).map( |x| {
        (0..rows).map( |y| emoji_shortcode( name, x, y)).collect::<String>()
    }).collect()
}

/// get (output_dir, base_name) for the given source image path, with output_dir being
/// the base_name resolved in the current working directory
pub fn derive_target (src_path: impl AsRef<Path>)->Result<(PathBuf,String)> {
    let name = target_name( src_path)?;
    let output_dir = cwd_path( &name)?;
    Ok( (output_dir, name) )
}

pub fn derive_target_in (base_dir: impl AsRef<Path>, src_path: impl AsRef<Path>)->Result<(PathBuf,String)> {
    let name = target_name( src_path)?;
    let output_dir = base_dir.as_ref().join( &name);
    Ok( (output_dir, name) )
}

fn target_name (src_path: impl AsRef<Path>)->Result<String> {
    let fname = filename_of_path( src_path)?;
    base_name( &fname)
        .map( |s| s.to_string())
        .ok_or( SplitImageError::InvalidFilename(format!("no base name with extension in {fname:?}")))
}
