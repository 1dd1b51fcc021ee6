//! Artifact file-name conventions.
//!
//! Platform builds are named `<product>-<os>-<arch>[.exe]`; a generic build is
//! just `<product>[.exe]`.

use crate::platform::PlatformId;

/// Product identifier shared by every artifact name.
pub const PRODUCT: &str = "surgery";

/// Separator between name segments.
const DELIMITER: char = '-';

/// Platform-and-arch specific executable name, e.g. `surgery-linux-amd64`.
pub fn binary_name(platform: &PlatformId) -> String {
    format!(
        "{PRODUCT}{DELIMITER}{}{DELIMITER}{}{}",
        platform.os_segment(),
        platform.arch.tag(),
        platform.exe_suffix()
    )
}

/// Generic executable name, e.g. `surgery` or `surgery.exe`.
pub fn generic_binary_name(platform: &PlatformId) -> String {
    format!("{PRODUCT}{}", platform.exe_suffix())
}
