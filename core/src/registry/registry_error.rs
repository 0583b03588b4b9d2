use crate::identity::TypeIdentity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  #[error("type identity {0} is already registered for a different type")]
  DuplicateIdentity(TypeIdentity),
}

static_assertions::assert_impl_all!(RegistryError: std::error::Error, Send, Sync);
