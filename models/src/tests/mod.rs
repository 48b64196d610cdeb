mod artifact_builder;
mod artifact_type;
mod wire_shapes;
