mod catalog;
mod cli;
