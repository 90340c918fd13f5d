//! Compile-time checks for marker traits.
//!
//! The containers add no interior state, so they are `Send`, `Sync` and
//! `Copy` exactly when their payloads are.

#![cfg(feature = "control")]

use std::cell::Cell;
use std::rc::Rc;

use carton::control::{Maybe, Outcome};
use carton::typeclass::Identity;

static_assertions::assert_impl_all!(Identity<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Send, Sync, Copy);

static_assertions::assert_not_impl_any!(Identity<Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<Cell<i32>>: Sync);
static_assertions::assert_not_impl_any!(Outcome<String, String>: Copy);

#[test]
fn containers_move_across_threads() {
    let outcome: Outcome<i32, String> = Outcome::success(20);
    let handle = std::thread::spawn(move || outcome.map(|n| n + 1));
    assert_eq!(handle.join().unwrap(), Outcome::Success(21));
}
