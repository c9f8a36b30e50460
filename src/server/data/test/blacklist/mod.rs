use super::*;

mod add;
mod get;
mod remove;
