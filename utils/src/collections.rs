mod dash_map_ext;

pub use self::dash_map_ext::*;
