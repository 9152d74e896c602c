//! Terminal rendering of command results.

use std::io::{self, Write};

use colored::Colorize;
use termfs_core::CommandResult;
use termfs_core::models::{EntryKind, Listing, OutputLine, OutputLineData};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn render_result(out: &mut impl Write, result: &CommandResult) -> io::Result<()> {
    if result.clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }
    for line in &result.output {
        render_line(out, line)?;
    }
    if let Some(listing) = &result.listing {
        render_listing(out, listing)?;
    }
    Ok(())
}

pub fn render_line(out: &mut impl Write, line: &OutputLine) -> io::Result<()> {
    match &line.data {
        OutputLineData::Command { prompt, input } => {
            writeln!(out, "{} {}", prompt.green().bold(), input)
        }
        OutputLineData::Text(s) => writeln!(out, "{}", s),
        OutputLineData::Error(s) => writeln!(out, "{}", s.red()),
        OutputLineData::Info(s) => writeln!(out, "{}", s.yellow()),
    }
}

/// One row per entry: icon, padded name, right-aligned size, modified date.
pub fn render_listing(out: &mut impl Write, listing: &Listing) -> io::Result<()> {
    if listing.entries.is_empty() {
        return writeln!(out, "{}", "(empty)".dimmed());
    }

    let width = listing
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in &listing.entries {
        let padded = format!("{:<width$}", entry.name, width = width);
        let name = match entry.kind {
            EntryKind::Parent | EntryKind::Directory => padded.cyan().bold(),
            EntryKind::File => padded.normal(),
        };
        let row = format!(
            "{} {}  {:>8}  {}",
            entry.icon(),
            name,
            entry.size,
            entry.modified
        );
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfs_core::models::{FileMetadata, FsEntry};

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn docs() -> FsEntry {
        FsEntry::directory(
            "docs",
            vec![
                FsEntry::file("readme.txt", FileMetadata::new("1.2 KB", "2024-06-01")),
                FsEntry::directory("sub", vec![]),
            ],
        )
    }

    #[test]
    fn test_render_listing_rows() {
        let listing = Listing::of("/docs", &docs());
        let text = rendered(|out| render_listing(out, &listing));
        assert_eq!(
            text,
            "📁 ..\n📄 readme.txt    1.2 KB  2024-06-01\n📁 sub\n"
        );
    }

    #[test]
    fn test_render_empty_listing() {
        let listing = Listing::of("/", &FsEntry::directory("", vec![]));
        assert_eq!(rendered(|out| render_listing(out, &listing)), "(empty)\n");
    }

    #[test]
    fn test_render_result_lines() {
        let result = CommandResult::output(vec![
            OutputLine::command(">", "ls"),
            OutputLine::error("Directory not found: x"),
        ]);
        assert_eq!(
            rendered(|out| render_result(out, &result)),
            "> ls\nDirectory not found: x\n"
        );
    }

    #[test]
    fn test_render_clear() {
        let text = rendered(|out| render_result(out, &CommandResult::clear()));
        assert!(text.starts_with(CLEAR_SCREEN));
    }
}
