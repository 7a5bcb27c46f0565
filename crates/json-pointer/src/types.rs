/// One step of a [`Path`]: an object key, or an array index in decimal.
pub type PathStep = String;

/// Ordered steps locating a node within one JSON tree.
pub type Path = Vec<PathStep>;
