//! Text rendering of a generated maze.

use std::io::{self, Write};
use std::str::FromStr;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::error::MazeError;
use crate::generator::Generator;
use crate::grid::Tile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    UnicodeBlock,
    AsciiHash,
    AsciiBracket,
    UnicodeShade,
    AsciiPlus,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::UnicodeBlock,
        Style::AsciiHash,
        Style::AsciiBracket,
        Style::UnicodeShade,
        Style::AsciiPlus,
    ];

    pub fn wall(self) -> &'static str {
        match self {
            Style::UnicodeBlock => "██",
            Style::AsciiHash => "##",
            Style::AsciiBracket => "[]",
            Style::UnicodeShade => "▓▓",
            Style::AsciiPlus => "++",
        }
    }

    pub fn passage(self) -> &'static str {
        "  "
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::UnicodeBlock => "block",
            Style::AsciiHash => "hash",
            Style::AsciiBracket => "bracket",
            Style::UnicodeShade => "shade",
            Style::AsciiPlus => "plus",
        }
    }
}

impl FromStr for Style {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| MazeError::UnknownStyle(s.to_string()))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Wall,
    Passage,
    Entrance,
    Exit,
}

fn glyph_at(generator: &Generator, col: usize, row: usize, tile: Tile) -> Glyph {
    if tile == Tile::Wall {
        return Glyph::Wall;
    }
    let is_marker = |marker: Option<(usize, usize)>| {
        marker.is_some_and(|(x, y)| col == 2 * x + 1 && row == 2 * y + 1)
    };
    if is_marker(generator.entrance()) {
        Glyph::Entrance
    } else if is_marker(generator.exit()) {
        Glyph::Exit
    } else {
        Glyph::Passage
    }
}

fn glyph_text(glyph: Glyph, style: Style) -> &'static str {
    match glyph {
        Glyph::Wall => style.wall(),
        Glyph::Passage => style.passage(),
        Glyph::Entrance => "S ",
        Glyph::Exit => "E ",
    }
}

/// Renders the maze, two characters per matrix position, with `S`/`E`
/// markers on passage cells when they have been set.
pub fn render(generator: &Generator, style: Style) -> String {
    let mut out = String::new();
    for (row, tiles) in generator.tiles().iter().enumerate() {
        for (col, &tile) in tiles.iter().enumerate() {
            out.push_str(glyph_text(glyph_at(generator, col, row, tile), style));
        }
        out.push('\n');
    }
    out
}

/// Wraps rendered text in a double-line box with an optional centered title.
pub fn render_with_border(text: &str, title: Option<&str>) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let title_width = title.map_or(0, UnicodeWidthStr::width);
    let width = lines
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0)
        .max(title_width);

    let mut out = String::new();
    out.push_str(&format!("╔{}╗\n", "═".repeat(width)));
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        let left = (width - title_width) / 2;
        let right = width - title_width - left;
        out.push_str(&format!("║{}{}{}║\n", " ".repeat(left), title, " ".repeat(right)));
        out.push_str(&format!("╠{}╣\n", "═".repeat(width)));
    }
    for line in lines {
        let pad = width - UnicodeWidthStr::width(line);
        out.push_str(&format!("║{}{}║\n", line, " ".repeat(pad)));
    }
    out.push_str(&format!("╚{}╝\n", "═".repeat(width)));
    out
}

/// Writes the maze with terminal colors: walls blue, entrance green, exit red.
pub fn write_colored<W: Write>(out: &mut W, generator: &Generator, style: Style) -> io::Result<()> {
    for (row, tiles) in generator.tiles().iter().enumerate() {
        for (col, &tile) in tiles.iter().enumerate() {
            let glyph = glyph_at(generator, col, row, tile);
            let color = match glyph {
                Glyph::Wall => Color::Blue,
                Glyph::Passage => Color::Reset,
                Glyph::Entrance => Color::Green,
                Glyph::Exit => Color::Red,
            };
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(glyph_text(glyph, style)))?;
        }
        out.queue(ResetColor)?;
        out.queue(Print('\n'))?;
    }
    out.flush()
}
