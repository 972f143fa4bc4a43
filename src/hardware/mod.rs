// Local system collection modules
pub mod types;
pub mod collect_os;
pub mod collect_cpu;
pub mod collect_memory;
pub mod collect_network;
pub mod collect_gpus;
pub mod collector;

pub use collect_os::collect_os_info;
pub use collect_network::collect_network_info;
pub use collect_gpus::collect_gpus;
pub use collector::collect_hardware_info;
