//! `quire toc` command implementation.

use clap::Args;
use quire_config::CliSettings;
use quire_nav::{TocNode, UnitPath, build_toc_with};

use super::BookArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the toc command.
#[derive(Args)]
pub(crate) struct TocArgs {
    #[command(flatten)]
    pub book: BookArgs,

    /// Identity of the page being rendered (default: the overview page).
    path: Option<String>,

    /// Minimum number of chapter headings to list (overrides config).
    #[arg(long)]
    min_chapter_headings: Option<usize>,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,
}

impl TocArgs {
    /// Execute the toc command.
    ///
    /// # Errors
    ///
    /// Returns an error if the book cannot be loaded, is malformed, or does
    /// not contain the requested path.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let (config, book) = self.book.load_with(CliSettings {
            min_chapter_headings: self.min_chapter_headings,
            ..CliSettings::default()
        })?;
        let current = self.path.map_or_else(|| book.path.clone(), UnitPath::new);
        let toc = build_toc_with(&book, &current, &config.toc.options())?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&toc)?);
            return Ok(());
        }

        let mut lines = Vec::new();
        render_lines(&toc, 0, &mut lines);
        for (line, active) in lines {
            if active {
                output.data_highlight(&line);
            } else {
                output.data(&line);
            }
        }
        Ok(())
    }
}

/// Render the tree as indented lines, flagging the rendered node.
fn render_lines(node: &TocNode, depth: usize, lines: &mut Vec<(String, bool)>) {
    let indent = "  ".repeat(depth);
    let marker = if node.is_active_page {
        "*"
    } else if node.is_active_chapter {
        ">"
    } else {
        " "
    };
    let label = if node.label.is_empty() {
        String::new()
    } else {
        format!("{} ", node.label)
    };
    lines.push((
        format!("{marker} {indent}{label}{} ({})", node.title, node.link),
        node.is_active_page,
    ));

    for heading in &node.headings {
        lines.push((
            format!("  {indent}  # {} (#{})", heading.title, heading.anchor),
            false,
        ));
    }
    for child in &node.children {
        render_lines(child, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quire_nav::Heading;

    use super::*;

    fn node(title: &str, link: &str, label: &str) -> TocNode {
        TocNode {
            title: title.to_owned(),
            link: UnitPath::from(link),
            label: label.to_owned(),
            is_active_chapter: false,
            is_active_page: false,
            headings: Vec::new(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_render_lines_marks_active_path() {
        let mut page = node("Install", "basics/install", "1.1");
        page.is_active_page = true;
        page.headings = vec![Heading::new("From source", "source")];
        let mut chapter = node("Basics", "basics", "1");
        chapter.is_active_chapter = true;
        chapter.children = vec![page];
        let mut root = node("Handbook", "", "");
        root.children = vec![chapter, node("Reference", "reference", "2")];

        let mut lines = Vec::new();
        render_lines(&root, 0, &mut lines);

        assert_eq!(
            lines,
            vec![
                ("  Handbook ()".to_owned(), false),
                (">   1 Basics (basics)".to_owned(), false),
                ("*     1.1 Install (basics/install)".to_owned(), true),
                ("        # From source (#source)".to_owned(), false),
                ("    2 Reference (reference)".to_owned(), false),
            ]
        );
    }
}
