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


use std::fs;
use std::io::{self,ErrorKind};
use std::path::{Path,PathBuf};
use tracing::debug;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn filename_of_path (path: impl AsRef<Path>)->Result<String> {
    let path = path.as_ref();

    Ok( path.file_name()
        .ok_or(io::Error::new( ErrorKind::InvalidInput, format!("not a valid filename {path:?}")))?
        .to_str().ok_or(io::Error::new( ErrorKind::InvalidInput, format!("invalid char in filename {path:?}")))?
        .to_string())
}

/// the part of a filename (not path) before its *first* '.'. Returns `None` if there is no '.'
/// or if it is the first char (e.g. "photo.tar.gz" -> "photo", ".profile" -> None)
pub fn base_name<'a> (fname: &'a str)->Option<&'a str> {
    match fname.find('.') {
        Some(idx) if idx > 0 => Some( &fname[..idx]),
        _ => None
    }
}

pub fn is_existing_file (path: impl AsRef<Path>)->bool {
    path.as_ref().is_file()
}

/// make sure `path` is an existing, empty directory. Anything that was stored under `path` before gets
/// removed - this is not reversible.
/// The parent directory has to exist already
pub fn reset_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();

    if path.is_dir() {
        debug!("removing directory tree {:?}", path);
        fs::remove_dir_all(path)?;
    } else if path.exists() {
        debug!("removing file {:?}", path);
        fs::remove_file(path)?;
    }

    fs::create_dir(path)
}

pub fn path_to_lossy_string (path: impl AsRef<Path>) -> String {
    path.as_ref().to_string_lossy().as_ref().to_string()
}

pub fn cwd_path (rel_path: impl AsRef<Path>)->io::Result<PathBuf> {
    Ok( std::env::current_dir()?.join( rel_path))
}
