mod common;
mod history;
mod scoring;
