mod common;
mod validate;
