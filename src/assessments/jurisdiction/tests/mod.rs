mod applicability;
mod common;
