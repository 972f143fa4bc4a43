use nvml_wrapper::enum_wrappers::device::TemperatureSensor;
use nvml_wrapper::Nvml;
use tracing::{debug, warn};

use crate::error::Result;
use crate::hardware::types::GpuRecord;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Telemetry for every GPU NVML can see.
///
/// A missing driver library means no GPUs, not an error. Queries that fail once
/// the driver is loaded abort the collection.
pub fn collect_gpus() -> Result<Vec<GpuRecord>> {
    let nvml = match Nvml::init() {
        Ok(nvml) => nvml,
        Err(e) => {
            warn!(error = %e, "NVML unavailable, reporting no GPUs");
            return Ok(Vec::new());
        }
    };

    let device_count = nvml.device_count()?;
    let mut gpus = Vec::with_capacity(device_count as usize);

    for i in 0..device_count {
        let device = nvml.device_by_index(i)?;
        let utilization = device.utilization_rates()?;
        let memory = device.memory_info()?;

        gpus.push(GpuRecord {
            id: device.index()?,
            name: device.name()?,
            load: f64::from(utilization.gpu) / 100.0,
            free_memory_mb: memory.free / BYTES_PER_MB,
            used_memory_mb: memory.used / BYTES_PER_MB,
            total_memory_mb: memory.total / BYTES_PER_MB,
            temperature_celsius: device.temperature(TemperatureSensor::Gpu)?,
            uuid: device.uuid()?,
        });
    }

    debug!(count = gpus.len(), "Collected GPU info");
    Ok(gpus)
}
