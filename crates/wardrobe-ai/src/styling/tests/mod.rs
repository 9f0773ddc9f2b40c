mod common;

mod generation;
