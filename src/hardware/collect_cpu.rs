use std::fs;
use std::path::Path;

use smbioslib::{DefinedStruct, SMBiosData};
use sysinfo::System;
use tracing::{debug, warn};

use crate::error::{Result, SysdumpError};

const CPUFREQ_DIR: &str = "/sys/devices/system/cpu/cpu0/cpufreq";
const DMI_TABLE: &str = "/sys/firmware/dmi/tables/DMI";

#[derive(Debug, Clone, PartialEq)]
pub struct CpuSummary {
    pub processor: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub max_mhz: f64,
    pub min_mhz: f64,
    pub current_mhz: f64,
}

/// Expects `sys` to have refreshed its CPU list with frequencies.
pub fn collect_cpu_info(sys: &System) -> Result<CpuSummary> {
    let cpus = sys.cpus();
    if cpus.is_empty() {
        return Err(SysdumpError::Unavailable("CPU list"));
    }

    let logical_cores = cpus.len();
    let physical_cores = sys.physical_core_count().unwrap_or(logical_cores);

    let brand = cpus[0].brand().trim();
    let processor = if brand.is_empty() {
        warn!("CPU brand string is empty, falling back to SMBIOS");
        smbios_processor_name().unwrap_or_else(|| std::env::consts::ARCH.to_string())
    } else {
        brand.to_string()
    };

    let current_mhz = mean_mhz(cpus.iter().map(|cpu| cpu.frequency()));
    let (max_mhz, min_mhz) = read_cpufreq_limits(Path::new(CPUFREQ_DIR));

    let summary = CpuSummary {
        processor,
        physical_cores,
        logical_cores,
        max_mhz,
        min_mhz,
        current_mhz,
    };
    debug!(?summary, "Collected CPU info");
    Ok(summary)
}

fn mean_mhz(frequencies: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = frequencies.fold((0u64, 0u64), |(sum, count), f| (sum + f, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

/// cpufreq reports kHz; 0.0 when the platform exposes no limits.
fn read_cpufreq_limits(cpufreq_dir: &Path) -> (f64, f64) {
    let read_mhz = |file: &str| {
        fs::read_to_string(cpufreq_dir.join(file))
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .map(|khz| khz / 1000.0)
            .unwrap_or(0.0)
    };
    (read_mhz("cpuinfo_max_freq"), read_mhz("cpuinfo_min_freq"))
}

fn smbios_processor_name() -> Option<String> {
    let smbios_data = match SMBiosData::try_load_from_file(DMI_TABLE, None) {
        Ok(data) => data,
        Err(_) => SMBiosData::from_vec_and_version(fs::read(DMI_TABLE).ok()?, None),
    };

    smbios_data.iter().find_map(|structure| match structure.defined_struct() {
        DefinedStruct::ProcessorInformation(processor) => processor
            .processor_version()
            .to_utf8_lossy()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty() && v != "Not Specified"),
        _ => None,
    })
}
