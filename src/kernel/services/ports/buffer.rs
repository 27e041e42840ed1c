/// Line-oriented view of the host editor buffer.
///
/// Rows are zero based; columns count chars. `start..end` ranges are
/// half-open over rows.
pub trait TextBuffer {
    fn lines(&self, start: usize, end: usize) -> Vec<String>;

    fn set_lines(&mut self, start: usize, end: usize, lines: Vec<String>);

    fn cursor(&self) -> (usize, usize);

    fn set_cursor(&mut self, row: usize, col: usize);
}

/// Expands an accepted snippet at the current cursor.
pub trait SnippetService {
    fn insert_snippet(&mut self, snippet: &str);
}
