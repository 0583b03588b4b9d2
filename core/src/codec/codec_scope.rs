use crate::codec::{CodecError, PolymorphCodec};
use std::cell::RefCell;
use std::marker::PhantomData;

std::thread_local! {
  static ACTIVE_CODECS: RefCell<Vec<PolymorphCodec>> = const { RefCell::new(Vec::new()) };
  static STASHED_ERROR: RefCell<Option<CodecError>> = const { RefCell::new(None) };
}

/// Makes a codec reachable from serde callbacks running on this thread.
///
/// Scopes nest; the innermost codec is current. Dropping the outermost scope
/// discards any error still stashed.
pub struct CodecScope {
  _not_send: PhantomData<*const ()>,
}

impl CodecScope {
  /// Entering the outermost scope drops errors stashed outside any scope.
  pub fn enter(codec: &PolymorphCodec) -> Self {
    let outer = ACTIVE_CODECS.with_borrow_mut(|codecs| {
      codecs.push(codec.clone());
      codecs.len() == 1
    });
    if outer {
      STASHED_ERROR.with_borrow_mut(|stashed| stashed.take());
    }
    Self { _not_send: PhantomData }
  }

  pub fn current() -> Option<PolymorphCodec> {
    ACTIVE_CODECS.with_borrow(|codecs| codecs.last().cloned())
  }

  pub fn depth() -> usize {
    ACTIVE_CODECS.with_borrow(Vec::len)
  }

  /// Keeps `err` for the top-level caller unless an earlier error is already kept.
  pub fn stash(err: CodecError) {
    STASHED_ERROR.with_borrow_mut(|stashed| {
      if stashed.is_none() {
        *stashed = Some(err);
      }
    });
  }

  pub fn take_stashed() -> Option<CodecError> {
    STASHED_ERROR.with_borrow_mut(Option::take)
  }

  pub fn take_error(&self) -> Option<CodecError> {
    Self::take_stashed()
  }
}

impl Drop for CodecScope {
  fn drop(&mut self) {
    let remaining = ACTIVE_CODECS.with_borrow_mut(|codecs| {
      codecs.pop();
      codecs.len()
    });
    if remaining == 0 {
      STASHED_ERROR.with_borrow_mut(|stashed| stashed.take());
    }
  }
}
