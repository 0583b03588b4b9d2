use crate::codec::Config;
use crate::identity::TypeIdentity;
use std::collections::BTreeSet;

/// Whitelist/blacklist over abstract element types. The blacklist always wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionPolicy {
  included: Option<BTreeSet<TypeIdentity>>,
  excluded: Option<BTreeSet<TypeIdentity>>,
}

impl InclusionPolicy {
  pub fn new(included: Option<BTreeSet<TypeIdentity>>, excluded: Option<BTreeSet<TypeIdentity>>) -> Self {
    Self { included, excluded }
  }

  pub fn from_config(config: &Config) -> Self {
    Self::new(config.included_types.clone(), config.excluded_types.clone())
  }

  pub fn allowed(&self, identity: &TypeIdentity) -> bool {
    if self.excluded.as_ref().is_some_and(|excluded| excluded.contains(identity)) {
      return false;
    }
    match &self.included {
      Some(included) => included.contains(identity),
      None => true,
    }
  }

  /// A container is handled only when every abstract type it carries is allowed.
  pub fn allows_all<'a>(&self, identities: impl IntoIterator<Item = &'a TypeIdentity>) -> bool {
    identities.into_iter().all(|identity| self.allowed(identity))
  }

  pub fn is_unrestricted(&self) -> bool {
    self.included.is_none() && self.excluded.is_none()
  }
}
