//! The editing surface boundary and the adapter that drives it.
//!
//! - `surface`  : [`EditorSurface`], the capabilities required from a text widget.
//! - `option`   : typed widget options and the initial [`EditorConfig`].
//! - `hint`     : autocomplete hint tables handed to the widget.
//! - `observer` : register-once callback slots.
//! - `memory`   : [`MemorySurface`], an in-memory widget.
//! - `adapter`  : [`Editor`], value binding and statement selection over a surface.
crate::reexport!(surface);
crate::reexport!(option);
crate::reexport!(hint);
crate::reexport!(observer);
crate::reexport!(memory);
crate::reexport!(adapter);
