/* Copyright 2018 Torbjørn Birch Moltu
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

//! Starts a game variant with logging set up, shared by the binaries.

use game::Config;

use std::fmt::Display;

fn init_logging() {
    #[cfg(not(target_arch="wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    #[cfg(target_arch="wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    }
}

fn fatal(error: impl Display) {
    log::error!("{}", error);
    #[cfg(not(target_arch="wasm32"))]
    std::process::exit(1);
}

pub fn run(config: Config) {
    init_logging();
    if let Err(e) = config.validate() {
        return fatal(e);
    }
    let game = game::create_game(config);
    if let Err(e) = engine::start(game, config.title, config.screen) {
        fatal(e);
    }
}
