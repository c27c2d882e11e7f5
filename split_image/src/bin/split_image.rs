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


use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use split_common::logging::init_logging;
use split_image::{run, SplitConfig, SplitReport, DEFAULT_TILE_SIZE};


#[derive(Parser, Debug)]
#[command(version, about, long_about = "split an image into a grid of smaller square images for social messaging platforms")]
pub struct Args {
    /// grid (tile) size in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// log debug messages (e.g. for each saved tile)
    #[arg(short, long)]
    pub verbose: bool,

    /// only report the grid dimensions, do not write any files
    #[arg(long)]
    pub estimate: bool,

    /// directory in which to create the output directory (default is the current working dir)
    #[arg(short, long)]
    pub output_base: Option<PathBuf>,

    /// image file to split
    #[arg(value_parser = existing_file)]
    pub image: PathBuf,
}

fn existing_file (s: &str)->std::result::Result<PathBuf,String> {
    let path = PathBuf::from(s);
    if !path.exists() {
        Err( format!("file {s} does not exist"))
    } else if path.is_dir() {
        Err( format!("{s} is a directory"))
    } else {
        Ok(path)
    }
}

fn main()->Result<()> {
    let args = Args::parse();
    init_logging( args.verbose);

    let base_dir = match args.output_base {
        Some(dir) => dir,
        None => std::env::current_dir()?
    };

    let config = SplitConfig {
        src_file: args.image,
        size: args.size,
        estimate: args.estimate,
        base_dir
    };

    if let SplitReport::Estimated { cols, rows } = run( &config)? {
        println!("cols: {cols}, rows: {rows}");
    }

    Ok(())
}
