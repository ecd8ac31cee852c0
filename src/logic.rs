//! Line-oriented statement logic: cursor positions, line ranges and the
//! statement-boundary resolver.
crate::reexport!(cursor);
crate::reexport!(range);
crate::reexport!(resolver);
