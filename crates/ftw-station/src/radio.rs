//! Stand-in for the station's Wi-Fi interface
//!
//! The host is already attached to whatever network it has. Association only
//! checks that credentials were configured, and the link counts as up once the
//! collector's host name resolves.

use std::net::ToSocketAddrs;

use ftw_core::network::{RadioError, WifiRadio};
use log::{debug, info};
use reqwest::Url;

pub struct HostRadio {
    active: bool,
    associated: bool,
    probe: Option<(String, u16)>,
}

impl HostRadio {
    /// Radio whose connectivity check resolves the host of `probe_url`.
    pub fn new(probe_url: &str) -> Self {
        let probe = Url::parse(probe_url).ok().and_then(|url| {
            let host = url.host_str()?.to_string();
            let port = url.port_or_known_default()?;
            Some((host, port))
        });

        Self {
            active: false,
            associated: false,
            probe,
        }
    }
}

impl WifiRadio for HostRadio {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) -> Result<(), RadioError> {
        self.active = true;
        Ok(())
    }

    fn connect(&mut self, ssid: &str, _psk: &str) -> Result<(), RadioError> {
        if ssid.is_empty() {
            return Err(RadioError::Association("no SSID configured"));
        }

        info!("Associating with {}", ssid);
        self.associated = true;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        let Some((host, port)) = self.probe.as_ref().filter(|_| self.associated) else {
            return false;
        };

        match (host.as_str(), *port).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                debug!("Resolving {} failed: {}", host, e);
                false
            }
        }
    }
}
