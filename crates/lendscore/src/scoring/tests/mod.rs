mod common;

mod engine;
mod offer;
