use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::error::Result;
use crate::hardware::collect_cpu::{collect_cpu_info, CpuSummary};
use crate::hardware::collect_memory::{collect_memory_info, MemorySummary};
use crate::hardware::types::HardwareInfo;
use crate::output::{format_bytes, format_size};

pub fn collect_hardware_info() -> Result<HardwareInfo> {
    let sys = System::new_with_specifics(
        RefreshKind::new()
            .with_cpu(CpuRefreshKind::new().with_frequency())
            .with_memory(MemoryRefreshKind::new().with_ram()),
    );

    let cpu = collect_cpu_info(&sys)?;
    let memory = collect_memory_info(&sys);

    Ok(build_hardware_info(cpu, memory, std::env::consts::ARCH))
}

fn build_hardware_info(cpu: CpuSummary, memory: MemorySummary, architecture: &str) -> HardwareInfo {
    HardwareInfo {
        processor: cpu.processor,
        architecture: architecture.to_string(),
        physical_cores: cpu.physical_cores,
        logical_cores: cpu.logical_cores,
        max_frequency: format_mhz(cpu.max_mhz),
        min_frequency: format_mhz(cpu.min_mhz),
        current_frequency: format_mhz(cpu.current_mhz),
        total_memory: format_bytes(memory.total_bytes),
        available_memory: format_bytes(memory.available_bytes),
        used_memory: format_bytes(memory.used_bytes),
        // Scaled like a byte count before the percent sign is appended.
        memory_percent: format!("{}%", format_size(memory.percent_used, "B")),
    }
}

fn format_mhz(mhz: f64) -> String {
    format!("{:.2}MHz", mhz)
}
