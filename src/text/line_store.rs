use crate::errors::{SubDemuxError, SubDemuxResult};
use crate::streams::LineSource;
use log::debug;

/// The whole subtitle file as owned lines with a forward cursor.
///
/// The only backward move is `push_back_one`, used by parsers that read one
/// line too far while looking for the start of the next record.
#[derive(Debug, Default)]
pub struct LineStore {
    lines: Vec<String>,
    cursor: usize,
}

impl LineStore {
    /// Read `source` to exhaustion. Fails with `EmptyInput` when it yields no line.
    pub fn load<L: LineSource + ?Sized>(source: &mut L) -> SubDemuxResult<Self> {
        let mut lines = Vec::new();
        while let Some(line) = source.read_line()? {
            lines.try_reserve(1)?;
            lines.push(line);
        }
        debug!("Loaded {} lines", lines.len());
        Self::from_vec(lines)
    }

    /// Build a store from lines already in memory.
    pub fn from_lines<I, S>(lines: I) -> SubDemuxResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_vec(lines.into_iter().map(Into::into).collect())
    }

    fn from_vec(lines: Vec<String>) -> SubDemuxResult<Self> {
        if lines.is_empty() {
            return Err(SubDemuxError::EmptyInput);
        }
        Ok(Self { lines, cursor: 0 })
    }

    /// Return the line under the cursor and advance, or `None` at the end.
    pub fn next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line.as_str())
    }

    /// Step back over the line returned by the last `next_line`. No-op at the start.
    pub fn push_back_one(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
