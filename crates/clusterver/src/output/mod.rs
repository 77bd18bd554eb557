mod formatter;
mod json;
mod plain;

pub(crate) use formatter::{OutputFormat, ResolveReport};
