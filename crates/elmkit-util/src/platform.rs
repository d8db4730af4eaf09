/// Host operating systems the tool installer ships binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    MacOs,
    Windows,
}

/// Identify the host OS, or `None` on an unsupported platform.
///
/// Tool resolution is skipped entirely when the platform is unknown,
/// since no installable binaries exist for it.
pub fn host_os() -> Option<HostOs> {
    match std::env::consts::OS {
        "linux" => Some(HostOs::Linux),
        "macos" => Some(HostOs::MacOs),
        "windows" => Some(HostOs::Windows),
        _ => None,
    }
}
