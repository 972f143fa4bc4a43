use std::net::{IpAddr, Ipv4Addr};

use sysinfo::Networks;
use tracing::{debug, trace};

use crate::hardware::types::{AddressFamily, NetInterfaceAddress};

/// Every (interface, address) pair, interfaces in name order.
///
/// Within an interface: IPv4 addresses, then the MAC address, then IPv6 addresses.
pub fn collect_network_info() -> Vec<NetInterfaceAddress> {
    let networks = Networks::new_with_refreshed_list();

    let snapshots: Vec<InterfaceSnapshot> = networks
        .iter()
        .map(|(name, data)| InterfaceSnapshot {
            name: name.clone(),
            mac: data.mac_address().to_string(),
            ip_networks: data.ip_networks().iter().map(|net| (net.addr, net.prefix)).collect(),
        })
        .collect();
    let records = addresses_in_name_order(snapshots);

    debug!(interfaces = networks.len(), addresses = records.len(), "Collected network info");
    records
}

struct InterfaceSnapshot {
    name: String,
    mac: String,
    ip_networks: Vec<(IpAddr, u8)>,
}

fn addresses_in_name_order(mut interfaces: Vec<InterfaceSnapshot>) -> Vec<NetInterfaceAddress> {
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
        .iter()
        .flat_map(|iface| interface_addresses(&iface.name, &iface.mac, &iface.ip_networks))
        .collect()
}

fn interface_addresses(name: &str, mac: &str, ip_networks: &[(IpAddr, u8)]) -> Vec<NetInterfaceAddress> {
    let mut ipv4 = Vec::new();
    let mut ipv6 = Vec::new();

    for (addr, prefix) in ip_networks {
        match addr {
            IpAddr::V4(v4) => ipv4.push(NetInterfaceAddress {
                interface: name.to_string(),
                family: AddressFamily::Ipv4,
                address: v4.to_string(),
                netmask: Some(ipv4_netmask(*prefix).to_string()),
                broadcast: ipv4_broadcast(*v4, *prefix).map(|b| b.to_string()),
            }),
            IpAddr::V6(v6) => ipv6.push(NetInterfaceAddress {
                interface: name.to_string(),
                family: AddressFamily::Ipv6,
                address: v6.to_string(),
                netmask: None,
                broadcast: None,
            }),
        }
    }

    let link = NetInterfaceAddress {
        interface: name.to_string(),
        family: AddressFamily::Link,
        address: mac.to_string(),
        netmask: None,
        broadcast: None,
    };

    let records: Vec<NetInterfaceAddress> = ipv4
        .into_iter()
        .chain(std::iter::once(link))
        .chain(ipv6)
        .collect();
    for record in &records {
        trace!(interface = name, family = %record.family, address = %record.address);
    }
    records
}

fn ipv4_netmask(prefix: u8) -> Ipv4Addr {
    let bits = match prefix {
        0 => 0,
        p if p >= 32 => u32::MAX,
        p => u32::MAX << (32 - p),
    };
    Ipv4Addr::from(bits)
}

/// None for loopback and for /31 and /32 networks, which have no broadcast address.
fn ipv4_broadcast(addr: Ipv4Addr, prefix: u8) -> Option<Ipv4Addr> {
    if addr.is_loopback() || prefix >= 31 {
        return None;
    }
    let mask = u32::from(ipv4_netmask(prefix));
    Some(Ipv4Addr::from(u32::from(addr) | !mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn netmask_from_prefix() {
        assert_eq!(ipv4_netmask(24), Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(ipv4_netmask(8), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(ipv4_netmask(0), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(ipv4_netmask(32), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(ipv4_netmask(20), Ipv4Addr::new(255, 255, 240, 0));
    }

    #[test]
    fn broadcast_from_prefix() {
        assert_eq!(
            ipv4_broadcast(Ipv4Addr::new(192, 168, 1, 42), 24),
            Some(Ipv4Addr::new(192, 168, 1, 255))
        );
        assert_eq!(
            ipv4_broadcast(Ipv4Addr::new(10, 0, 17, 3), 20),
            Some(Ipv4Addr::new(10, 0, 31, 255))
        );
        assert_eq!(ipv4_broadcast(Ipv4Addr::new(127, 0, 0, 1), 8), None);
        assert_eq!(ipv4_broadcast(Ipv4Addr::new(10, 0, 0, 1), 32), None);
    }

    #[test]
    fn one_record_per_address() {
        let records = interface_addresses(
            "eth0",
            "aa:bb:cc:dd:ee:ff",
            &[
                (IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)), 64),
                (IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42)), 24),
            ],
        );

        let families: Vec<AddressFamily> = records.iter().map(|r| r.family).collect();
        assert_eq!(
            families,
            vec![AddressFamily::Ipv4, AddressFamily::Link, AddressFamily::Ipv6]
        );
        assert!(records.iter().all(|r| r.interface == "eth0"));

        assert_eq!(records[0].address, "192.168.1.42");
        assert_eq!(records[0].netmask.as_deref(), Some("255.255.255.0"));
        assert_eq!(records[0].broadcast.as_deref(), Some("192.168.1.255"));
        assert_eq!(records[1].address, "aa:bb:cc:dd:ee:ff");
        assert_eq!(records[2].address, "fe80::1");
        assert_eq!(records[2].netmask, None);
    }

    #[test]
    fn interfaces_are_reported_in_name_order() {
        let snapshot = |name: &str, last_octet: u8| InterfaceSnapshot {
            name: name.to_string(),
            mac: "00:00:00:00:00:00".to_string(),
            ip_networks: vec![(IpAddr::V4(Ipv4Addr::new(10, 0, 0, last_octet)), 24)],
        };
        let records = addresses_in_name_order(vec![snapshot("wlan0", 3), snapshot("eth0", 1), snapshot("lo", 2)]);

        let order: Vec<(&str, AddressFamily)> = records
            .iter()
            .map(|r| (r.interface.as_str(), r.family))
            .collect();
        assert_eq!(
            order,
            vec![
                ("eth0", AddressFamily::Ipv4),
                ("eth0", AddressFamily::Link),
                ("lo", AddressFamily::Ipv4),
                ("lo", AddressFamily::Link),
                ("wlan0", AddressFamily::Ipv4),
                ("wlan0", AddressFamily::Link),
            ]
        );
        assert_eq!(records[0].address, "10.0.0.1");
    }

    #[test]
    fn interface_without_ip_still_reports_mac() {
        let records = interface_addresses("dummy0", "00:00:00:00:00:00", &[]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].family, AddressFamily::Link);
    }
}
