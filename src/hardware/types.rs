use std::fmt;

#[derive(Debug, Clone)]
pub struct OsInfo {
    pub name: String,
    pub release: String,
    pub architecture: String,
    pub platform_detail: String,
    pub hostname: String,
    /// Seconds since the Unix epoch.
    pub boot_time: u64,
}

/// Frequencies and memory figures are already rendered for display.
#[derive(Debug, Clone)]
pub struct HardwareInfo {
    pub processor: String,
    pub architecture: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub max_frequency: String,
    pub min_frequency: String,
    pub current_frequency: String,
    pub total_memory: String,
    pub available_memory: String,
    pub used_memory: String,
    pub memory_percent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
    Link,
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
            AddressFamily::Link => write!(f, "link"),
        }
    }
}

/// One bound address of one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterfaceAddress {
    pub interface: String,
    pub family: AddressFamily,
    pub address: String,
    pub netmask: Option<String>,
    pub broadcast: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GpuRecord {
    pub id: u32,
    pub name: String,
    /// Utilisation as a fraction in `0.0..=1.0`.
    pub load: f64,
    pub free_memory_mb: u64,
    pub used_memory_mb: u64,
    pub total_memory_mb: u64,
    pub temperature_celsius: u32,
    pub uuid: String,
}
