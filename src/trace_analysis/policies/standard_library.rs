/// Prefix under which standard-library packages are rooted in the tree
pub const STD_PREFIX: &str = "std/";

/// StandardLibraryPolicy decides which package paths belong to the Go
/// standard library
///
/// The rule is a heuristic: a path whose first `/`-delimited segment has no
/// `.` carries no domain name, so it is assumed to be part of the standard
/// library. Module paths are not required to start with a domain, so a
/// module named e.g. `mycorp/tools` is misfiled under `std/`.
pub struct StandardLibraryPolicy;

impl StandardLibraryPolicy {
    pub fn is_standard_library(package: &str) -> bool {
        let first_segment = package.split('/').next().unwrap_or_default();
        !first_segment.contains('.')
    }

    /// Returns the path as it is placed in the package tree
    pub fn tree_path(package: &str) -> String {
        if Self::is_standard_library(package) {
            format!("{}{}", STD_PREFIX, package)
        } else {
            package.to_string()
        }
    }
}
