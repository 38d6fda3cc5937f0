#[macro_use]
extern crate pest_derive;

pub mod ast;
pub mod typechecker;
