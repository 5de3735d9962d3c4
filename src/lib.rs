//! Agent-side SNMPv1/v2c protocol engine.
//!
//! The core is a BER codec specialised for the SNMP tag universe, the
//! request/response PDU model, and a resolver implementing Get, GetNext
//! and GetBulk over a caller-supplied binding table. The `agent` module
//! binds the three to a UDP socket.

pub mod agent;
pub mod asn1;
pub mod oid;
pub mod resolver;
pub mod snmp;
