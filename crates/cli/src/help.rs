// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_lists}
  {boards}      List boards
  {board}       Create, rename or delete a board
  {show}        Show the board grouped by category
  {add}         Add an item
  {edit}        Change an item's text
  {toggle}      Mark item(s) done or not done
  {rm}          Delete item(s)
  {mv}          Move an item before or after another
  {categorize}  Put an item in a category
  {category}    Manage categories

{header_sync}
  {sync}        Push all boards to the server now
  {sync_info}   Show the server's last sync
  {backup}      Ask the server to back up its data
  {health}      Check the server
  {remote}      Configure the server URL
  {completion}  Generate shell completions
",
        header_lists = colors::header("Lists:"),
        header_sync = colors::header("Sync & Setup:"),
        boards = colors::literal("boards"),
        board = colors::literal("board"),
        show = colors::literal("show"),
        add = colors::literal("add"),
        edit = colors::literal("edit"),
        toggle = colors::literal("toggle"),
        rm = colors::literal("rm"),
        mv = colors::literal("mv"),
        categorize = colors::literal("categorize"),
        category = colors::literal("category"),
        sync = colors::literal("sync"),
        sync_info = colors::literal("sync-info"),
        backup = colors::literal("backup"),
        health = colors::literal("health"),
        remote = colors::literal("remote"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  kelist board new \"Groceries\"            Create a board
  kelist category add \"Produce\"           Add a category
  kelist add \"Apples\" -c produce          Add an item to it
  kelist toggle apples                    Check it off
  kelist show                             See the board",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
