mod codec_error;
mod codec_scope;
mod collection;
mod composite_codec;
mod config;
mod config_option;
mod container_codec;
mod from_array;
mod leaf;
mod pair;
mod polymorph;
mod polymorph_codec;
mod tagged_codec;
mod tagged_codec_test;
mod tuple;

pub use self::{
  codec_error::*, codec_scope::*, config::*, config_option::*, from_array::*, pair::*, polymorph::*,
  polymorph_codec::*, tagged_codec::TYPE_KEY,
};
