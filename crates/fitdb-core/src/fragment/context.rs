//! Issue collection for checking a single value.

///
/// IssueSink
/// Receives the problems a check finds in one value.
///

pub trait IssueSink {
    fn issue(&mut self, message: String);
}

///
/// ItemIssues
/// Forwards issues for one array element, prefixed with its position.
///

pub struct ItemIssues<'a> {
    parent: &'a mut dyn IssueSink,
    index: usize,
}

impl<'a> ItemIssues<'a> {
    #[must_use]
    pub const fn new(parent: &'a mut dyn IssueSink, index: usize) -> Self {
        Self { parent, index }
    }
}

impl IssueSink for ItemIssues<'_> {
    fn issue(&mut self, message: String) {
        self.parent.issue(format!("[{}] {message}", self.index));
    }
}

///
/// Issues
/// Issues raised against one value, in the order they were found.
///

#[derive(Debug, Default)]
pub struct Issues(Vec<String>);

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Collapse into one detail line, or `Ok` if nothing was raised.
    pub fn into_result(self) -> Result<(), String> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0.join("; "))
        }
    }
}

impl IssueSink for Issues {
    fn issue(&mut self, message: String) {
        self.0.push(message);
    }
}
