//! Statement selection for SQL editors.
//!
//! Given a multi-statement SQL buffer and the caret, find the lines of the
//! statement under the caret and select them on the editing widget.
//!
//! ```rust
//! use sqlfocus::*;
//!
//! let range = resolve_text("SELECT 1;\nSELECT *\nFROM t;", 1).unwrap();
//! assert_eq!((range.start(), range.end()), (1, 3));
//! ```

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

reexport!(error);
reexport!(config);
reexport!(logic);
reexport!(editor);
reexport!(testing, test);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, info, trace, warn};
