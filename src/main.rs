/*
 * Copyright (c) 2026 Ilya Shishov
 * Licensed under the MIT License.
 * See the LICENSE file in the project root for full license information.
 */

use std::io;

mod args;
mod modes;

use crate::args::IpsetCreateArgs;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut command = IpsetCreateArgs::get_scenario();
    command.execute();
    Ok(())
}
