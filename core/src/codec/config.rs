use crate::codec::ConfigOption;
use crate::identity::TypeIdentity;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Lenient mode: unresolvable or unpopulatable values degrade to absent instead of failing.
  pub skip_unresolved_types: bool,
  pub cache_enabled: bool,
  /// Whitelist of abstract element types; `None` allows every type.
  pub included_types: Option<BTreeSet<TypeIdentity>>,
  /// Blacklist of abstract element types; wins over the whitelist.
  pub excluded_types: Option<BTreeSet<TypeIdentity>>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      skip_unresolved_types: true,
      cache_enabled: true,
      included_types: None,
      excluded_types: None,
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn is_strict(&self) -> bool {
    !self.skip_unresolved_types
  }
}
