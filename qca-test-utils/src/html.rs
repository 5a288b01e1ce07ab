use crate::error::TestError;

/// HTML produced by [`render_component`](crate::render_component)
#[derive(Debug, Clone)]
pub struct RenderedHtml(pub String);

impl RenderedHtml {
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    pub fn count(&self, needle: &str) -> usize {
        self.0.matches(needle).count()
    }

    pub fn expect_contains(&self, needle: &str) -> Result<(), TestError> {
        if self.contains(needle) {
            Ok(())
        } else {
            Err(TestError::MissingMarkup {
                needle: needle.to_string(),
                html: self.0.clone(),
            })
        }
    }

    pub fn expect_absent(&self, needle: &str) -> Result<(), TestError> {
        if self.contains(needle) {
            Err(TestError::UnexpectedMarkup {
                needle: needle.to_string(),
                html: self.0.clone(),
            })
        } else {
            Ok(())
        }
    }
}
