mod applicability;
mod common;
mod scoring;
