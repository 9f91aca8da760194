//! Indentation tracking: NEWLINE/INDENT/DEDENT emission.
//!
//! ## Notes
//! - The first indent fixes the indent factor and the whitespace kind; every later indent must add exactly one
//!   factor and use the same kind.
//! - Inside brackets indentation is ignored, unless the bracket contains a Block (a `:` that ends its line).
//!   A Block ends when a line dedents to (or past) the Block's start, or when its bracket closes.

use super::{LexResult, Lexer, TokenKind};
use std::cmp::Ordering;
use viper_core::lang::chars;
use viper_core::lang::punctuation;

/// Whitespace character used for indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentSpaceKind {
    /// No indent seen yet.
    #[default]
    Unknown,
    Space,
    Tab,
}

impl IndentSpaceKind {
    fn of(c: char) -> Self {
        if c == ' ' { IndentSpaceKind::Space } else { IndentSpaceKind::Tab }
    }

    fn accepts(self, c: char) -> bool {
        match self {
            IndentSpaceKind::Unknown => true,
            IndentSpaceKind::Space => c == ' ',
            IndentSpaceKind::Tab => c == '\t',
        }
    }
}

/// An indentation-sensitive region opened inside brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Block {
    /// Indentation count of the line that opened the Block.
    pub(super) start: usize,
}

/// Indentation state of the top level or of one open bracket.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct IndentationFrame {
    pub(super) close_bracket: Option<char>,
    /// Indentation width of the most recent measured line.
    pub(super) count: usize,
    pub(super) block: Option<Block>,
}

impl IndentationFrame {
    fn bracketed(open: char, count: usize) -> Self {
        Self {
            close_bracket: punctuation::closing_for(open),
            count,
            block: None,
        }
    }

    /// Width still indented past the start of this frame's Block.
    fn pending_block_width(&self) -> usize {
        match self.block {
            Some(block) if self.count > block.start => self.count - block.start,
            _ => 0,
        }
    }
}

impl Lexer {
    pub(super) fn is_in_brackets(&self) -> bool {
        !self.brackets.is_empty()
    }

    fn current_frame(&self) -> &IndentationFrame {
        self.brackets.last().unwrap_or(&self.top)
    }

    fn current_frame_mut(&mut self) -> &mut IndentationFrame {
        match self.brackets.last_mut() {
            Some(frame) => frame,
            None => &mut self.top,
        }
    }

    fn factor(&self) -> usize {
        self.indent_factor.unwrap_or(1)
    }

    fn push_dedents(&mut self, width: usize) {
        for _ in 0..width / self.factor() {
            self.push_layout(TokenKind::Dedent);
        }
    }

    /// Handle a consumed line break and the indentation of the line that follows it.
    pub(super) fn lex_newline(&mut self) -> LexResult<()> {
        let mut width = 0;
        let mut space_char = None;
        let mut is_mixed = false;

        while let Some(c) = self.peek_char(1).filter(|&c| chars::is_horizontal_space(c)) {
            self.eat_char();
            if space_char.is_some_and(|prev| prev != c) {
                is_mixed = true;
            }
            space_char = Some(c);
            width += 1;
        }

        // Blank line
        if self.peek_char(1).is_some_and(chars::is_newline) {
            if !self.is_in_brackets() {
                self.push_layout(TokenKind::Newline);
            }
            return Ok(());
        }

        if is_mixed || space_char.is_some_and(|c| !self.indent_space_type.accepts(c)) {
            return Err(self.error("Unexpected mix of different types of spaces in indentation"));
        }

        let frame = *self.current_frame();
        if frame.block.is_some() || !self.is_in_brackets() {
            match width.cmp(&frame.count) {
                Ordering::Greater => self.lex_indent(width - frame.count, space_char)?,
                Ordering::Less => self.lex_dedent(&frame, width)?,
                Ordering::Equal => self.push_layout(TokenKind::Newline),
            }
        }

        self.current_frame_mut().count = width;
        Ok(())
    }

    fn lex_indent(&mut self, diff: usize, space_char: Option<char>) -> LexResult<()> {
        match self.indent_factor {
            None => {
                self.indent_factor = Some(diff);
                if let Some(c) = space_char {
                    self.indent_space_type = IndentSpaceKind::of(c);
                }
            }
            Some(factor) if factor != diff => {
                return Err(self.error(format!("Expected an indent of {factor} spaces")));
            }
            Some(_) => {}
        }
        self.push_layout(TokenKind::Indent);
        Ok(())
    }

    fn lex_dedent(&mut self, frame: &IndentationFrame, width: usize) -> LexResult<()> {
        let steps = match frame.block {
            Some(block) if width <= block.start => {
                self.current_frame_mut().block = None;
                frame.count.abs_diff(block.start)
            }
            _ => {
                let diff = frame.count - width;
                if diff % self.factor() != 0 {
                    return Err(self.error("Unexpected number of spaces in dedent"));
                }
                diff
            }
        };
        self.push_dedents(steps);
        Ok(())
    }

    /// Open a frame for an opening bracket, or close the innermost frame when `c` is its closer.
    pub(super) fn track_bracket(&mut self, c: char) {
        if punctuation::is_open_bracket(c) {
            let count = self.current_frame().count;
            self.brackets.push(IndentationFrame::bracketed(c, count));
            return;
        }

        let closes_innermost = self.brackets.last().is_some_and(|frame| frame.close_bracket == Some(c));
        if closes_innermost {
            if let Some(frame) = self.brackets.pop() {
                self.push_dedents(frame.pending_block_width());
            }
        }
    }

    /// After a `:` inside brackets, open a Block if only horizontal space remains on the line.
    pub(super) fn detect_block(&mut self) {
        if !self.is_in_brackets() || self.current_frame().block.is_some() {
            return;
        }

        let mut offset = 1;
        while self.peek_char(offset).is_some_and(chars::is_horizontal_space) {
            offset += 1;
        }
        if self.peek_char(offset).is_some_and(chars::is_newline) {
            let frame = self.current_frame_mut();
            frame.block = Some(Block { start: frame.count });
        }
    }

    /// Close every indentation level still open at end of input.
    ///
    /// The frames are reset afterwards, so input that is already exhausted closes nothing.
    pub(super) fn close_open_indentation(&mut self) {
        let brackets = std::mem::take(&mut self.brackets);
        let top = std::mem::take(&mut self.top);
        if self.indent_factor.is_none() {
            return;
        }
        for frame in &brackets {
            self.push_dedents(frame.pending_block_width());
        }
        self.push_dedents(top.count);
    }
}
