mod cli;
mod common;
mod library;
