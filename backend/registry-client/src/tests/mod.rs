mod body;
mod config;
mod content_type;
mod error_kind;
mod params;
mod resolver;
mod validation;
