use sysinfo::System;
use tracing::debug;

use crate::error::{Result, SysdumpError};
use crate::hardware::types::OsInfo;

pub fn collect_os_info() -> Result<OsInfo> {
    let name = system_name(std::env::consts::OS);
    let release = System::kernel_version().ok_or(SysdumpError::Unavailable("kernel release"))?;
    let architecture = std::env::consts::ARCH.to_string();
    let hostname = System::host_name().ok_or(SysdumpError::Unavailable("hostname"))?;

    let boot_time = System::boot_time();
    if boot_time == 0 {
        return Err(SysdumpError::Unavailable("boot time"));
    }

    let distribution = System::os_version().map(|version| format!("{}-{}", System::distribution_id(), version));
    let platform_detail = platform_detail(&name, &release, &architecture, distribution);

    debug!(%name, %release, %hostname, boot_time, "Collected OS info");

    Ok(OsInfo {
        name,
        release,
        architecture,
        platform_detail,
        hostname,
        boot_time,
    })
}

/// Kernel family name as `uname -s` reports it, e.g. `Linux` or `Darwin`.
fn system_name(target_os: &str) -> String {
    match target_os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// `<name>-<release>-<arch>`, plus `-with-<distribution>` when the OS reports one.
fn platform_detail(name: &str, release: &str, arch: &str, distribution: Option<String>) -> String {
    let base = format!("{}-{}-{}", name, release, arch);
    match distribution.map(|d| d.trim().replace(' ', "-")) {
        Some(d) if !d.is_empty() => format!("{}-with-{}", base, d),
        _ => base,
    }
}
