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


use std::io::IsTerminal;
use tracing::Level;

/// non-verbose runs only report warnings and errors
pub fn log_level (verbose: bool)->Level {
    if verbose { Level::DEBUG } else { Level::WARN }
}

/// install a global fmt subscriber that writes to stderr.
/// Note this only succeeds for the first call in a process - subsequent calls are ignored
pub fn init_logging (verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level( log_level(verbose))
        .with_target(false)
        .with_ansi( std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}
