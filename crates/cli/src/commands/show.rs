// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::display::format_board;
use crate::error::Result;
use crate::session::Session;

use super::current_board;

pub fn run(session: &Session) -> Result<()> {
    print!("{}", format_board(current_board(session)?));
    Ok(())
}
