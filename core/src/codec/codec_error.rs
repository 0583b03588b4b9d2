use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
  #[error("module `{0}` is not registered")]
  UnresolvedModule(String),
  #[error("type `{type_name}` is not registered in module `{module}`")]
  UnresolvedType { module: String, type_name: String },
  #[error("malformed type identity `{0}`")]
  MalformedIdentity(String),
  #[error("malformed container header: {0}")]
  MalformedHeader(String),
  #[error("population failed: {0}")]
  PopulationFailure(String),
  #[error("shape mismatch: {0}")]
  ShapeMismatch(String),
  #[error("construction failed: {0}")]
  ConstructionFailure(String),
  #[error("non-nullable field of type `{0}` is absent")]
  AbsentField(String),
  #[error("no codec is active on this thread")]
  MissingScope,
  #[error("document error: {0}")]
  Document(String),
}

impl CodecError {
  pub fn is_resolution_failure(&self) -> bool {
    matches!(self, CodecError::UnresolvedModule(_) | CodecError::UnresolvedType { .. })
  }

  /// Whether lenient mode may turn this error into an absent value.
  pub fn is_recoverable(&self) -> bool {
    !matches!(
      self,
      CodecError::ShapeMismatch(_) | CodecError::AbsentField(_) | CodecError::MissingScope | CodecError::Document(_)
    )
  }
}

impl From<serde_json::Error> for CodecError {
  fn from(err: serde_json::Error) -> Self {
    CodecError::Document(err.to_string())
  }
}

static_assertions::assert_impl_all!(CodecError: std::error::Error, Send, Sync);
