mod standard_library;

pub use standard_library::{StandardLibraryPolicy, STD_PREFIX};
