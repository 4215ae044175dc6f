/// Limits applied while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
  max_string_len: Option<usize>,
}

impl CodecConfig {
  /// Unbounded configuration. Declared lengths are still checked against the
  /// bytes actually remaining in the source before anything is allocated.
  pub const fn new() -> Self {
    Self { max_string_len: None }
  }

  /// Rejects strings whose declared byte length exceeds `max_string_len`.
  pub const fn with_max_string_len(mut self, max_string_len: usize) -> Self {
    self.max_string_len = Some(max_string_len);
    self
  }

  /// Configured string length limit, if any.
  pub const fn max_string_len(&self) -> Option<usize> {
    self.max_string_len
  }
}
