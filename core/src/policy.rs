mod inclusion_policy;

pub use self::inclusion_policy::*;
