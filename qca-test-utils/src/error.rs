use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// Rendered markup did not contain what the test expected
    #[error("expected rendered HTML to contain {needle:?}, got: {html}")]
    MissingMarkup { needle: String, html: String },
    /// Rendered markup contained something the test expected to be absent
    #[error("expected rendered HTML not to contain {needle:?}, got: {html}")]
    UnexpectedMarkup { needle: String, html: String },
}
