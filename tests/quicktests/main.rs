//! Property tests against the public API of `OrderedTree`.

#[macro_use]
extern crate quickcheck_macros;

mod ordered;
mod scenarios;
