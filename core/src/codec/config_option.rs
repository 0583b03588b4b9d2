use crate::codec::Config;
use crate::identity::TypeIdentity;
use crate::registry::AbstractType;

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetSkipUnresolvedTypes(bool),
  SetCacheEnabled(bool),
  Include(TypeIdentity),
  Exclude(TypeIdentity),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetSkipUnresolvedTypes(skip) => {
        config.skip_unresolved_types = *skip;
      }
      ConfigOption::SetCacheEnabled(enabled) => {
        config.cache_enabled = *enabled;
      }
      ConfigOption::Include(identity) => {
        config.included_types.get_or_insert_with(Default::default).insert(identity.clone());
      }
      ConfigOption::Exclude(identity) => {
        config.excluded_types.get_or_insert_with(Default::default).insert(identity.clone());
      }
    }
  }

  pub fn with_strict() -> ConfigOption {
    ConfigOption::SetSkipUnresolvedTypes(false)
  }

  pub fn with_lenient() -> ConfigOption {
    ConfigOption::SetSkipUnresolvedTypes(true)
  }

  pub fn with_cache(enabled: bool) -> ConfigOption {
    ConfigOption::SetCacheEnabled(enabled)
  }

  pub fn with_included<A: AbstractType + ?Sized>() -> ConfigOption {
    ConfigOption::Include(A::identity())
  }

  pub fn with_excluded<A: AbstractType + ?Sized>() -> ConfigOption {
    ConfigOption::Exclude(A::identity())
  }

  pub fn with_included_identity(identity: TypeIdentity) -> ConfigOption {
    ConfigOption::Include(identity)
  }

  pub fn with_excluded_identity(identity: TypeIdentity) -> ConfigOption {
    ConfigOption::Exclude(identity)
  }
}
