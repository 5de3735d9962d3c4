//! UDP transport glue: binds the codec and resolver to a socket and a
//! shared binding table.
//!
//! The core library never logs and never drops datagrams on its own;
//! this transport does both. Undecodable datagrams and unknown
//! communities are logged and dropped without a reply.

use std::io::ErrorKind;
use std::net::{SocketAddr, UdpSocket};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::oid::Oid;
use crate::resolver;
use crate::snmp::{self, SnmpValue, VarBinding};

pub struct SnmpAgent {
    socket: UdpSocket,
    communities: Vec<String>,
    table: Arc<RwLock<Vec<VarBinding>>>,
}

impl SnmpAgent {
    pub fn new(addr: &str, communities: Vec<String>) -> Result<Self> {
        let socket = UdpSocket::bind(addr).context("Failed to bind UDP socket")?;
        socket
            .set_read_timeout(Some(Duration::from_secs(5)))
            .context("Failed to set socket timeout")?;

        Ok(Self {
            socket,
            communities,
            table: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().context("Failed to get local address")
    }

    /// Insert a binding, overwriting any existing value at the same OID.
    pub fn register(&self, oid: Oid, value: SnmpValue) {
        let mut table = self.table.write().unwrap();
        match table.iter_mut().find(|vb| vb.oid == oid) {
            Some(existing) => existing.value = value,
            None => table.push(VarBinding::new(oid, value)),
        }
    }

    fn process_datagram(&self, data: &[u8], src_addr: SocketAddr) -> Result<()> {
        let request = match snmp::decode_request(data) {
            Ok(request) => request,
            Err(e) => {
                warn!("dropping undecodable datagram from {src_addr}: {e}");
                return Ok(());
            }
        };

        if !self
            .communities
            .iter()
            .any(|c| c.as_bytes() == request.community.as_bytes())
        {
            warn!(
                "dropping request from {src_addr} with unknown community {}",
                request.community
            );
            return Ok(());
        }

        let varbinds = {
            let table = self.table.read().unwrap();
            resolver::handle_request(&request, &table)
        };

        let response = request.create_response(varbinds, 0, 0);
        let datagram = snmp::encode_response(&response)?;
        self.socket
            .send_to(&datagram, src_addr)
            .context("Failed to send SNMP response")?;

        debug!(
            "answered {:?} from {src_addr} with {} varbinds",
            request.pdu_type,
            response.variable_bindings.len()
        );
        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        info!("SNMP agent listening on {}", self.local_addr()?);

        let mut buf = [0u8; 4096];
        loop {
            match self.socket.recv_from(&mut buf) {
                Ok((size, src_addr)) => {
                    if let Err(e) = self.process_datagram(&buf[..size], src_addr) {
                        warn!("error processing datagram from {src_addr}: {e:#}");
                    }
                }
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    continue;
                }
                Err(e) => return Err(e).context("Failed to receive datagram"),
            }
        }
    }

    pub fn run_in_thread(self) -> thread::JoinHandle<Result<()>> {
        thread::spawn(move || self.run())
    }
}
