//! Startup banner.
//!
//! Printed once the listener is bound: key legend, route paths and the
//! URLs the server answers on.

use std::fmt::Write;
use std::net::{IpAddr, Ipv4Addr};

use crate::config::ServerConfig;
use crate::routing::RouteTable;

pub const TITLE: &str = "JSON Mock API";

/// First non-loopback IPv4 address of this host, if any.
pub fn lan_address() -> Option<Ipv4Addr> {
    let interfaces = match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            tracing::debug!(error = %e, "Could not list network interfaces");
            return None;
        }
    };
    interfaces
        .iter()
        .filter(|iface| !iface.is_loopback())
        .find_map(|iface| match iface.ip() {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(_) => None,
        })
}

/// Render the banner.
pub fn banner(config: &ServerConfig, table: &RouteTable, lan: Option<Ipv4Addr>) -> String {
    let mut out = String::new();
    let prefix = config.url_prefix();

    let _ = writeln!(out, "{} v{}\n", TITLE, env!("CARGO_PKG_VERSION"));
    if config.interactive {
        let _ = writeln!(out, "  a, s    change status code");
        let _ = writeln!(out, "  d       toggle delay");
    }
    let _ = writeln!(out, "  ctrl+c  stop server\n");
    let _ = writeln!(out, "For more info, run help.\n");

    if table.is_empty() {
        let _ = writeln!(out, "(no routes)");
    }
    for path in table.paths() {
        let _ = writeln!(out, "{}", path);
    }

    let _ = writeln!(out, "\nListening on http://localhost:{}{}", config.port, prefix);
    if let Some(ip) = lan {
        let _ = writeln!(out, "             http://{}:{}{}", ip, config.port, prefix);
    }
    out
}
