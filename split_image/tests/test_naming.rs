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

#![allow(unused)]

use std::path::{Path,PathBuf};
use split_image::{grid_dimensions, output_path, tile_filename, emoji_shortcode, emoji_lines, derive_target, derive_target_in, SplitImageError};

#[test]
fn test_grid_dimensions() {
    assert_eq!( grid_dimensions( 70, 50, 32), (3,2));
    assert_eq!( grid_dimensions( 64, 64, 32), (2,2));
    assert_eq!( grid_dimensions( 1, 1, 32), (1,1));
    assert_eq!( grid_dimensions( 33, 32, 32), (2,1));

    for w in 1..50u32 {
        for s in 1..12u32 {
            let (cols,_) = grid_dimensions( w, 1, s);
            assert!( cols * s >= w && (cols-1) * s < w, "w={w} s={s} cols={cols}");
        }
    }
}

#[test]
fn test_output_path() {
    let dir = Path::new("some/dir");
    assert_eq!( output_path( dir, "img", 3, 7), dir.join("img-03-07.png"));
    assert_eq!( output_path( dir, "img", 123, 4), dir.join("img-123-04.png"));
    assert_eq!( tile_filename( "img", 0, 10), "img-00-10.png");
}

#[test]
fn test_emoji_lines() {
    assert_eq!( emoji_shortcode( "cat", 1, 12), ":cat-01-12:");

    let lines = emoji_lines( "cat", 3, 2);
    assert_eq!( lines, vec![
        ":cat-00-00::cat-00-01:".to_string(),
        ":cat-01-00::cat-01-01:".to_string(),
        ":cat-02-00::cat-02-01:".to_string(),
    ]);
}

#[test]
fn test_derive_target() {
    let (dir, name) = derive_target( "photo.png").unwrap();
    assert_eq!( name, "photo");
    assert_eq!( dir, std::env::current_dir().unwrap().join("photo"));

    let (dir, name) = derive_target_in( "/tmp/out", "/some/where/photo.tar.gz").unwrap();
    assert_eq!( name, "photo");
    assert_eq!( dir, PathBuf::from("/tmp/out/photo"));
}

#[test]
fn test_derive_target_without_extension() {
    match derive_target( "photo") {
        Err(SplitImageError::InvalidFilename(_)) => {}
        other => panic!("expected InvalidFilename, got {other:?}")
    }
    assert!( derive_target_in( "/tmp", "dir/.hidden").is_err());
}
