//! In-memory `TextBuffer` backed by a rope.

use ropey::Rope;

use crate::kernel::services::ports::TextBuffer;

#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
    cursor: (usize, usize),
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, row: usize) -> String {
        let line = self.rope.line(row).to_string();
        let trimmed = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(line.as_str());
        trimmed.to_string()
    }
}

impl TextBuffer for RopeBuffer {
    fn lines(&self, start: usize, end: usize) -> Vec<String> {
        let end = end.min(self.len_lines());
        (start..end).map(|row| self.line_text(row)).collect()
    }

    fn set_lines(&mut self, start: usize, end: usize, lines: Vec<String>) {
        let len_lines = self.len_lines();
        let start = start.min(len_lines);
        let end = end.clamp(start, len_lines);

        let start_char = self.rope.line_to_char(start);
        let end_char = if end < len_lines {
            self.rope.line_to_char(end)
        } else {
            self.rope.len_chars()
        };

        let mut text = lines.join("\n");
        if !lines.is_empty() && end < len_lines {
            text.push('\n');
        }

        self.rope.remove(start_char..end_char);
        self.rope.insert(start_char, &text);
    }

    fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }
}
