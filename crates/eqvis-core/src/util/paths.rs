//! Path helpers.

use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a tilde are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use eqvis_core::util::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("README.md"), PathBuf::from("README.md"));
/// assert_eq!(expand_tilde("/etc/eqvis.toml"), PathBuf::from("/etc/eqvis.toml"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
