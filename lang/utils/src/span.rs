use std::{
    fmt::{Debug, Display},
    path::PathBuf,
    sync::Arc,
};

pub type Cursor1 = usize;

/// A half-open byte range `[start, end)` into the source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Cursor1,
    pub end: Cursor1,
}

impl Span {
    pub fn new(start: Cursor1, end: Cursor1) -> Span {
        Span { start, end }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span { start, end } = self;
        write!(f, "{start}-{end}")
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Line and column, both counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor2 {
    pub line: usize,
    pub column: usize,
}

impl Display for Cursor2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Cursor2 { line, column } = self;
        write!(f, "{line}:{column}")
    }
}

/// Translates byte offsets of one source text into line/column cursors.
#[derive(Clone, Debug)]
pub struct FileInfo {
    /// byte offset at which every line starts
    line_starts: Vec<usize>,
    len: usize,
    path: Option<Arc<PathBuf>>,
}

impl FileInfo {
    pub fn new(s: &str, path: Option<Arc<PathBuf>>) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in s.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        FileInfo { line_starts, len: s.len(), path }
    }
    pub fn trans_span2(&self, offset: Cursor1) -> Cursor2 {
        let offset = offset.min(self.len);
        // index of the last line starting at or before `offset`
        let idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Cursor2 { line: idx + 1, column: offset - self.line_starts[idx] + 1 }
    }
    /// `path:line:column` of a span's start, or just `line:column` for
    /// sources that did not come from a file.
    pub fn locate(&self, span: Span) -> String {
        let cursor = self.trans_span2(span.start);
        match &self.path {
            | Some(path) => format!("{}:{}", path.display(), cursor),
            | None => format!("{}", cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_on_first_line() {
        let info = FileInfo::new("let x = 1", None);
        assert_eq!(info.trans_span2(0), Cursor2 { line: 1, column: 1 });
        assert_eq!(info.trans_span2(4), Cursor2 { line: 1, column: 5 });
    }

    #[test]
    fn cursor_after_newlines() {
        let info = FileInfo::new("let x = 1\nin\n  x", None);
        assert_eq!(info.trans_span2(10), Cursor2 { line: 2, column: 1 });
        assert_eq!(info.trans_span2(15), Cursor2 { line: 3, column: 3 });
    }

    #[test]
    fn cursor_at_end_of_input() {
        let info = FileInfo::new("(1 +\n", None);
        assert_eq!(info.trans_span2(5), Cursor2 { line: 2, column: 1 });
        assert_eq!(info.trans_span2(99), Cursor2 { line: 2, column: 1 });
    }

    #[test]
    fn locate_with_path() {
        let info = FileInfo::new("1\n+", Some(Arc::new(PathBuf::from("a.tl"))));
        assert_eq!(info.locate(Span::new(2, 3)), "a.tl:2:1");
        assert_eq!(FileInfo::new("1", None).locate(Span::new(0, 1)), "1:1");
    }
}
