//! The full plain-text report, written section by section.

use std::io::Write;

use chrono::{DateTime, Local, TimeZone};
use comfy_table::{CellAlignment, Table};
use tracing::info;

use crate::error::{Result, SysdumpError};
use crate::hardware::types::{AddressFamily, GpuRecord, HardwareInfo, NetInterfaceAddress, OsInfo};
use crate::hardware::{collect_gpus, collect_hardware_info, collect_network_info, collect_os_info};

/// Only the rule under the header row is drawn.
const GPU_TABLE_STYLE: &str = "     --            ";
const BOOT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const GPU_HEADERS: [&str; 8] = [
    "id",
    "name",
    "load",
    "free memory",
    "used memory",
    "total memory",
    "temperature",
    "uuid",
];

/// Collect everything and write the report. The first failed query aborts the run.
pub fn write_report<W: Write>(out: &mut W) -> Result<()> {
    let os = collect_os_info()?;
    let hardware = collect_hardware_info()?;
    let boot_time = format_boot_time(boot_time_in(os.boot_time, &Local)?);

    write_os_section(out, &os, &boot_time)?;
    writeln!(out)?;
    write_hardware_section(out, &hardware)?;
    writeln!(out)?;
    write_network_section(out, &collect_network_info())?;
    writeln!(out)?;
    write_gpu_section(out, &collect_gpus()?)?;
    writeln!(out, "To save the output to a file run the following command and customize it if you want")?;
    writeln!(out, "sysdump > filename.txt")?;
    out.flush()?;

    info!("Report written");
    Ok(())
}

fn boot_time_in<Tz: TimeZone>(epoch_secs: u64, tz: &Tz) -> Result<DateTime<Tz>> {
    i64::try_from(epoch_secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(tz))
        .ok_or(SysdumpError::InvalidBootTime(epoch_secs))
}

fn format_boot_time<Tz: TimeZone>(boot_time: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    boot_time.format(BOOT_TIME_FORMAT).to_string()
}

fn write_os_section<W: Write>(out: &mut W, os: &OsInfo, boot_time: &str) -> Result<()> {
    writeln!(out, "Operating System Info")?;
    writeln!(out, "OS Name: {}", os.name)?;
    writeln!(out, "OS Version: {}", os.release)?;
    writeln!(out, "OS Architecture: {}", os.architecture)?;
    writeln!(out, "OS System Aliases: {}", os.platform_detail)?;
    writeln!(out, "OS Username: {}", os.hostname)?;
    writeln!(out, "System Boot Time: {}", boot_time)?;
    Ok(())
}

fn write_hardware_section<W: Write>(out: &mut W, hw: &HardwareInfo) -> Result<()> {
    writeln!(out, "Hardware Info")?;
    writeln!(out, "Processor: {}", hw.processor)?;
    writeln!(out, "Architecture: {}", hw.architecture)?;
    writeln!(out, "CPU Physical Cores: {}", hw.physical_cores)?;
    writeln!(out, "CPU Total Cores: {}", hw.logical_cores)?;
    writeln!(out, "CPU Max Frequency: {}", hw.max_frequency)?;
    writeln!(out, "CPU Min Frequency: {}", hw.min_frequency)?;
    writeln!(out, "CPU Current Frequency: {}", hw.current_frequency)?;
    writeln!(out, "Total Memory: {}", hw.total_memory)?;
    writeln!(out, "Available Memory: {}", hw.available_memory)?;
    writeln!(out, "Memory in Use: {}", hw.used_memory)?;
    writeln!(out, "Memory Percentage: {}", hw.memory_percent)?;
    Ok(())
}

fn write_network_section<W: Write>(out: &mut W, addresses: &[NetInterfaceAddress]) -> Result<()> {
    writeln!(out, "Network Info")?;
    for addr in addresses {
        match addr.family {
            AddressFamily::Ipv4 => {
                writeln!(out, "Interface Name: {}", addr.interface)?;
                writeln!(out, "    IP Address: {}", addr.address)?;
                writeln!(out, "    Netmask: {}", addr.netmask.as_deref().unwrap_or("None"))?;
                writeln!(out, "    Broadcast IP: {}", addr.broadcast.as_deref().unwrap_or("None"))?;
            }
            AddressFamily::Link => writeln!(out, "    MAC Address: {}", addr.address)?,
            AddressFamily::Ipv6 => writeln!(out, "    IP Address (IPv6): {}", addr.address)?,
        }
    }
    Ok(())
}

fn write_gpu_section<W: Write>(out: &mut W, gpus: &[GpuRecord]) -> Result<()> {
    writeln!(out, "GPU Info")?;
    writeln!(out, "{}", gpu_table(gpus).trim_fmt())?;
    Ok(())
}

fn gpu_table(gpus: &[GpuRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(GPU_TABLE_STYLE);
    table.set_header(GPU_HEADERS);
    if let Some(id_column) = table.column_mut(0) {
        id_column.set_cell_alignment(CellAlignment::Right);
    }
    for gpu in gpus {
        table.add_row(vec![
            gpu.id.to_string(),
            gpu.name.clone(),
            format!("{:.1}%", gpu.load * 100.0),
            format!("{}MB", gpu.free_memory_mb),
            format!("{}MB", gpu.used_memory_mb),
            format!("{}MB", gpu.total_memory_mb),
            format!("{} °C", gpu.temperature_celsius),
            gpu.uuid.clone(),
        ]);
    }
    table
}
