use callprep_model::ValidationOutcome;

#[derive(Debug)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub accepted: usize,
    pub rejected: usize,
    pub unreadable: usize,
}

impl BatchResult {
    pub fn has_failures(&self) -> bool {
        self.rejected > 0 || self.unreadable > 0
    }
}

#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based line number in the source.
    pub line: usize,
    pub result: LineResult,
}

#[derive(Debug)]
pub enum LineResult {
    Validated(ValidationOutcome),
    /// The line looked like JSON but did not parse.
    Unreadable(String),
}
