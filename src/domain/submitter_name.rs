#[derive(Debug)]
pub struct SubmitterName(String);

impl SubmitterName {
    /// Trims surrounding whitespace and rejects names that are empty after
    /// trimming. No further shape is imposed on the value.
    pub fn parse(s: String) -> Result<SubmitterName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err(format!("{} is not a valid submitter name.", s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl std::fmt::Display for SubmitterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for SubmitterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
