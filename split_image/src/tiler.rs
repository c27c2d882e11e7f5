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


use std::iter::FusedIterator;
use image::{imageops, DynamicImage, GenericImageView, Limits, RgbaImage, Rgba};

use crate::naming::grid_dimensions;
use crate::errors::{Result,SplitImageError};

/// (x,y,tile) with x being the column and y the row index of the tile
pub type Tile = (u32, u32, RgbaImage);

const RGBA_BYTES: u64 = 4;

/// width and height rounded up to the next multiple of `size`. Fails if the padded dimensions do not
/// fit into u32 or if the padded RGBA buffer would exceed the default image allocation limit
pub fn padded_dimensions (width: u32, height: u32, size: u32)->Result<(u32,u32)> {
    if size == 0 {
        return Err( SplitImageError::IllegalArgument("tile size has to be positive".into()))
    }
    let (cols,rows) = grid_dimensions( width, height, size);
    let pw = cols as u64 * size as u64;
    let ph = rows as u64 * size as u64;

    let n_bytes = pw.checked_mul(ph).and_then( |n| n.checked_mul( RGBA_BYTES));
    let max_alloc = Limits::default().max_alloc;

    match (u32::try_from(pw), u32::try_from(ph), n_bytes) {
        (Ok(pw), Ok(ph), Some(n)) if max_alloc.map_or( true, |max| n <= max) => Ok( (pw,ph) ),
        _ => Err( SplitImageError::IllegalArgument(
            format!("tile size {size} too large for {width}x{height} image (padded to {pw}x{ph})")))
    }
}

/// copy `img` into the upper left corner of a fully transparent RGBA canvas that has padded dimensions.
/// Source pixels (including alpha) are copied as-is, not blended
pub fn pad_image (img: &DynamicImage, size: u32)->Result<RgbaImage> {
    let (w,h) = img.dimensions();
    let (pw,ph) = padded_dimensions( w, h, size)?;

    let mut padded = RgbaImage::from_pixel( pw, ph, Rgba([0,0,0,0]));
    imageops::replace( &mut padded, &img.to_rgba8(), 0, 0);
    Ok(padded)
}

/// lazy iterator over the square tiles of a padded image.
/// Tiles are produced in column-major order (all rows of column 0, then column 1 etc.). Each tile
/// is an independent copy of the padded image region
pub struct TileIter {
    padded: RgbaImage,
    size: u32,
    cols: u32,
    rows: u32,
    x: u32,
    y: u32
}

impl TileIter {
    pub fn new (img: &DynamicImage, size: u32)->Result<Self> {
        let (w,h) = img.dimensions();
        if size == 0 {
            return Err( SplitImageError::IllegalArgument("tile size has to be positive".into()))
        }
        if w == 0 || h == 0 {
            return Err( SplitImageError::IllegalArgument(format!("cannot split empty image {w}x{h}")))
        }

        let (cols,rows) = grid_dimensions( w, h, size);
        let padded = pad_image( img, size)?;

        Ok( TileIter{ padded, size, cols, rows, x: 0, y: 0 } )
    }

    /// (cols,rows) of the tile grid
    pub fn grid_dimensions (&self)->(u32,u32) { (self.cols, self.rows) }

    fn remaining (&self)->usize {
        if self.x >= self.cols {
            0
        } else {
            let n_done = (self.x * self.rows + self.y) as usize;
            (self.cols * self.rows) as usize - n_done
        }
    }
}

impl Iterator for TileIter {
    type Item = Tile;

    fn next (&mut self)->Option<Tile> {
        if self.x >= self.cols { return None }

        let (x,y) = (self.x, self.y);
        let tile = imageops::crop_imm( &self.padded, x * self.size, y * self.size, self.size, self.size).to_image();

        self.y += 1;
        if self.y >= self.rows {
            self.y = 0;
            self.x += 1;
        }

        Some( (x, y, tile) )
    }

    fn size_hint (&self)->(usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for TileIter {}
impl FusedIterator for TileIter {}

/// split `img` into `size`x`size` tiles, padding right and bottom with transparent pixels as required
pub fn split_image (img: &DynamicImage, size: u32)->Result<TileIter> {
    TileIter::new( img, size)
}
