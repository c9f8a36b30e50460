use super::*;

mod load;
mod mutate;
mod reload;
