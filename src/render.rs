//! Terminal output for the chat application.
//!
//! This module provides a trait-based rendering abstraction over the blocks
//! produced by [`crate::view`].  The default implementation writes plain text
//! with optional ANSI escape codes.

use std::io::{self, Stdout, Write};

use crate::chat::QuickAction;
use crate::view::Block;

/// ANSI escape code for dim text (used for hints and the loading line).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for bold text (used for labels).
const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for selectable cards).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (used for fixed-width blocks).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for green text (used for idea cards).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for magenta text (used for post labels).
const ANSI_MAGENTA: &str = "\x1b[35m";

/// Fence drawn around fixed-width blocks.
const FENCE: &str = "--------------------------------------------------------------";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - TUI rendering
pub trait Renderer: Send {
    /// Print a user turn.
    fn print_user(&mut self, text: &str);

    /// Print an assistant turn.
    fn print_block(&mut self, block: &Block);

    /// Print the loading indicator shown while a request is in flight.
    fn print_pending(&mut self);

    /// Print the quick-action menu.
    fn print_quick_actions(&mut self, actions: &[QuickAction]);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer<W: Write + Send = Stdout> {
    out: W,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer on stdout with ANSI colors enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new PlainTextRenderer on stdout with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self::with_writer(io::stdout(), use_color)
    }
}

impl<W: Write + Send> PlainTextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn with_writer(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Consumes the renderer, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&mut self, style: &str, text: &str) {
        if self.use_color {
            let _ = writeln!(self.out, "{style}{text}{ANSI_RESET}");
        } else {
            let _ = writeln!(self.out, "{text}");
        }
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> Renderer for PlainTextRenderer<W> {
    fn print_user(&mut self, text: &str) {
        self.styled(ANSI_BOLD, &format!("You: {text}"));
        self.flush();
    }

    fn print_block(&mut self, block: &Block) {
        match block {
            Block::Text { text } => {
                self.line(text);
            }
            Block::Steps { heading, items } => {
                self.line(heading);
                for (index, item) in items.iter().enumerate() {
                    self.line(&format!("  {}. {item}", index + 1));
                }
            }
            Block::Choices { caption, items } => {
                self.line(caption);
                for (index, item) in items.iter().enumerate() {
                    self.styled(ANSI_CYAN, &format!("  [{}] {}", index + 1, item.label));
                }
                self.styled(ANSI_DIM, "  (use /pick <n> to choose a name)");
            }
            Block::Preformatted { caption, body } => {
                self.line(caption);
                self.styled(ANSI_YELLOW, FENCE);
                self.styled(ANSI_YELLOW, body);
                self.styled(ANSI_YELLOW, FENCE);
            }
            Block::Post {
                caption,
                label,
                body,
            } => {
                self.line(caption);
                self.styled(&format!("{ANSI_BOLD}{ANSI_MAGENTA}"), label);
                self.line(body);
            }
            Block::Cards { caption, cards } => {
                self.line(caption);
                for card in cards {
                    self.styled(ANSI_GREEN, &format!("  * {card}"));
                }
            }
        }
        self.line("");
        self.flush();
    }

    fn print_pending(&mut self) {
        self.styled(ANSI_DIM, "Thinking...");
        self.flush();
    }

    fn print_quick_actions(&mut self, actions: &[QuickAction]) {
        self.line("Quick actions (use /quick <n>):");
        for (index, action) in actions.iter().enumerate() {
            self.line(&format!("  {}. {}: {}", index + 1, action.title, action.prompt));
        }
        self.line("");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        self.styled(ANSI_RED, &format!("Error: {error}"));
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        self.line(info);
        self.flush();
    }
}
