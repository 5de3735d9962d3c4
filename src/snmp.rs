//! SNMP value model, PDU model, and the message codec built on the BER
//! layer.
//!
//! The agent-side contract is three calls: `decode_request` turns a
//! datagram into an [`SnmpRequest`], the resolver produces the response
//! varbinds, and `encode_response` emits the reply datagram.
//! `decode_response` exists for round-trip checks and for client-side
//! consumers.

use std::fmt;
use std::net::Ipv4Addr;

use bytes::Bytes;
use thiserror::Error;

use crate::asn1::decode::Decoder;
use crate::asn1::encode::{self, Encoder};
use crate::asn1::{BerError, Tag};
use crate::oid::Oid;

pub type SnmpResult<T> = Result<T, SnmpError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnmpError {
    #[error(transparent)]
    Ber(#[from] BerError),

    #[error("unsupported SNMP version {0}")]
    UnsupportedVersion(i64),

    #[error("unsupported PDU tag {0:#04x}")]
    UnsupportedPdu(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1 = 0,
    V2c = 1,
}

impl Version {
    fn from_wire(value: i64) -> SnmpResult<Self> {
        match value {
            0 => Ok(Version::V1),
            1 => Ok(Version::V2c),
            other => Err(SnmpError::UnsupportedVersion(other)),
        }
    }

    pub fn as_wire(self) -> i64 {
        self as i64
    }
}

/// PDU variants, discriminated by the context-specific constructed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PduType {
    GetRequest,
    GetNextRequest,
    GetResponse,
    GetBulkRequest,
}

impl PduType {
    pub fn tag(self) -> Tag {
        match self {
            PduType::GetRequest => Tag::GetRequest,
            PduType::GetNextRequest => Tag::GetNextRequest,
            PduType::GetResponse => Tag::GetResponse,
            PduType::GetBulkRequest => Tag::GetBulkRequest,
        }
    }
}

/// Every value an SNMP varbind can carry.
///
/// Boolean has no tag of its own here: it encodes under the INTEGER tag
/// as `0x00`/`0xFF` and therefore decodes back as an Integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnmpValue {
    Integer(i64),
    Boolean(bool),
    OctetString(Vec<u8>),
    Null,
    ObjectIdentifier(Oid),
    IpAddress(Ipv4Addr),
    Counter32(u32),
    Gauge32(u32),
    TimeTicks(u32),
    Counter64(u64),
    NoSuchObject,
    NoSuchInstance,
    EndOfMibView,
}

impl SnmpValue {
    pub fn tag(&self) -> Tag {
        match self {
            SnmpValue::Integer(_) | SnmpValue::Boolean(_) => Tag::Integer,
            SnmpValue::OctetString(_) => Tag::OctetString,
            SnmpValue::Null => Tag::Null,
            SnmpValue::ObjectIdentifier(_) => Tag::ObjectIdentifier,
            SnmpValue::IpAddress(_) => Tag::IpAddress,
            SnmpValue::Counter32(_) => Tag::Counter32,
            SnmpValue::Gauge32(_) => Tag::Gauge32,
            SnmpValue::TimeTicks(_) => Tag::TimeTicks,
            SnmpValue::Counter64(_) => Tag::Counter64,
            SnmpValue::NoSuchObject => Tag::NoSuchObject,
            SnmpValue::NoSuchInstance => Tag::NoSuchInstance,
            SnmpValue::EndOfMibView => Tag::EndOfMibView,
        }
    }

    /// BER payload octets for this value.
    pub fn payload(&self) -> Result<Vec<u8>, BerError> {
        Ok(match self {
            SnmpValue::Integer(value) => encode::integer_bytes(*value),
            SnmpValue::Boolean(value) => vec![if *value { 0xFF } else { 0x00 }],
            SnmpValue::OctetString(data) => data.clone(),
            SnmpValue::Null
            | SnmpValue::NoSuchObject
            | SnmpValue::NoSuchInstance
            | SnmpValue::EndOfMibView => Vec::new(),
            SnmpValue::ObjectIdentifier(oid) => encode::oid_bytes(oid)?,
            SnmpValue::IpAddress(addr) => addr.octets().to_vec(),
            SnmpValue::Counter32(value) | SnmpValue::Gauge32(value) | SnmpValue::TimeTicks(value) => {
                encode::unsigned_bytes(u64::from(*value))
            }
            SnmpValue::Counter64(value) => encode::unsigned_bytes(*value),
        })
    }
}

/// Community string as it appeared on the wire. Valid UTF-8 displays as
/// text; anything else is preserved byte-for-byte and displayed lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community(Vec<u8>);

impl Community {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl From<&str> for Community {
    fn from(s: &str) -> Self {
        Community(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Community {
    fn from(bytes: Vec<u8>) -> Self {
        Community(bytes)
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBinding {
    pub oid: Oid,
    pub value: SnmpValue,
}

impl VarBinding {
    pub fn new(oid: Oid, value: SnmpValue) -> Self {
        VarBinding { oid, value }
    }

    pub fn null(oid: Oid) -> Self {
        VarBinding {
            oid,
            value: SnmpValue::Null,
        }
    }
}

/// A decoded request. `non_repeaters` and `max_repetitions` are zero
/// unless the PDU is a GetBulk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpRequest {
    pub version: Version,
    pub community: Community,
    pub pdu_type: PduType,
    pub request_id: i32,
    pub non_repeaters: u32,
    pub max_repetitions: u32,
    pub variable_bindings: Vec<VarBinding>,
}

impl SnmpRequest {
    /// A GetResponse carrying `variable_bindings`, with version,
    /// community and request id copied from this request. Callers pass
    /// zero for both error fields until SET support exists.
    pub fn create_response(
        &self,
        variable_bindings: Vec<VarBinding>,
        error_status: i32,
        error_index: i32,
    ) -> SnmpResponse {
        SnmpResponse {
            version: self.version,
            community: self.community.clone(),
            request_id: self.request_id,
            error_status,
            error_index,
            variable_bindings,
        }
    }
}

/// A response. The PDU variant is always GetResponse; `error_status` and
/// `error_index` stay zero until SET support exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpResponse {
    pub version: Version,
    pub community: Community,
    pub request_id: i32,
    pub error_status: i32,
    pub error_index: i32,
    pub variable_bindings: Vec<VarBinding>,
}

fn enter_expect(decoder: &mut Decoder<'_>, expect: Tag) -> SnmpResult<()> {
    let offset = decoder.offset();
    let tag = decoder.enter()?;
    if tag != expect {
        return Err(BerError::Malformed {
            offset,
            reason: "unexpected constructed tag",
        }
        .into());
    }
    Ok(())
}

fn read_i32(decoder: &mut Decoder<'_>, reason: &'static str) -> SnmpResult<i32> {
    let offset = decoder.offset();
    let value = decoder.read_integer()?;
    i32::try_from(value).map_err(|_| BerError::Malformed { offset, reason }.into())
}

/// Decode a request datagram.
///
/// Varbind values are consumed and discarded: the originator sends Null
/// anyway, and a malformed agent echoing request values must not break
/// decoding. The resolver always sees Null.
pub fn decode_request(data: &[u8]) -> SnmpResult<SnmpRequest> {
    let mut decoder = Decoder::new(data);

    enter_expect(&mut decoder, Tag::Sequence)?;
    let version = Version::from_wire(decoder.read_integer()?)?;
    let community = Community::from(decoder.read_octet_string()?);

    let pdu_byte = decoder.peek_byte()?;
    let pdu_type = match Tag::from_u8(pdu_byte) {
        Some(Tag::GetRequest) => PduType::GetRequest,
        Some(Tag::GetNextRequest) => PduType::GetNextRequest,
        Some(Tag::GetBulkRequest) => PduType::GetBulkRequest,
        _ => return Err(SnmpError::UnsupportedPdu(pdu_byte)),
    };
    decoder.enter()?;

    let request_id = read_i32(&mut decoder, "request-id out of range")?;

    // GetBulk carries non-repeaters and max-repetitions where the other
    // PDUs carry error-status and error-index (zero from the originator,
    // not validated).
    let (non_repeaters, max_repetitions) = if pdu_type == PduType::GetBulkRequest {
        let non_repeaters = decoder.read_integer()?.clamp(0, i64::from(u32::MAX)) as u32;
        let max_repetitions = decoder.read_integer()?.clamp(0, i64::from(u32::MAX)) as u32;
        (non_repeaters, max_repetitions)
    } else {
        let _ = decoder.read_integer()?;
        let _ = decoder.read_integer()?;
        (0, 0)
    };

    enter_expect(&mut decoder, Tag::Sequence)?;
    let mut variable_bindings = Vec::new();
    while !decoder.eof() {
        enter_expect(&mut decoder, Tag::Sequence)?;
        let oid = decoder.read_oid()?;
        decoder.read_any()?;
        variable_bindings.push(VarBinding::null(oid));
        decoder.leave()?;
    }
    decoder.leave()?;
    decoder.leave()?;
    decoder.leave()?;

    Ok(SnmpRequest {
        version,
        community,
        pdu_type,
        request_id,
        non_repeaters,
        max_repetitions,
        variable_bindings,
    })
}

/// Encode a response datagram: Sequence { version, community,
/// GetResponse { request-id, error-status, error-index, Sequence of
/// (OID, value) Sequences } }.
pub fn encode_response(response: &SnmpResponse) -> SnmpResult<Bytes> {
    let mut encoder = Encoder::new();

    encoder.enter(Tag::Sequence)?;
    encoder.write_integer(response.version.as_wire())?;
    encoder.write_octet_string(response.community.as_bytes())?;

    encoder.enter(Tag::GetResponse)?;
    encoder.write_integer(i64::from(response.request_id))?;
    encoder.write_integer(i64::from(response.error_status))?;
    encoder.write_integer(i64::from(response.error_index))?;

    encoder.enter(Tag::Sequence)?;
    for varbind in &response.variable_bindings {
        encoder.enter(Tag::Sequence)?;
        encoder.write_oid(&varbind.oid)?;
        encoder.write_primitive(varbind.value.tag(), &varbind.value.payload()?)?;
        encoder.leave()?;
    }
    encoder.leave()?;
    encoder.leave()?;
    encoder.leave()?;

    Ok(encoder.output()?)
}

/// Decode a response datagram, varbind values included.
pub fn decode_response(data: &[u8]) -> SnmpResult<SnmpResponse> {
    let mut decoder = Decoder::new(data);

    enter_expect(&mut decoder, Tag::Sequence)?;
    let version = Version::from_wire(decoder.read_integer()?)?;
    let community = Community::from(decoder.read_octet_string()?);

    let pdu_byte = decoder.peek_byte()?;
    if Tag::from_u8(pdu_byte) != Some(Tag::GetResponse) {
        return Err(SnmpError::UnsupportedPdu(pdu_byte));
    }
    decoder.enter()?;

    let request_id = read_i32(&mut decoder, "request-id out of range")?;
    let error_status = read_i32(&mut decoder, "error-status out of range")?;
    let error_index = read_i32(&mut decoder, "error-index out of range")?;

    enter_expect(&mut decoder, Tag::Sequence)?;
    let mut variable_bindings = Vec::new();
    while !decoder.eof() {
        enter_expect(&mut decoder, Tag::Sequence)?;
        let oid = decoder.read_oid()?;
        let value = decode_value(&mut decoder)?;
        variable_bindings.push(VarBinding::new(oid, value));
        decoder.leave()?;
    }
    decoder.leave()?;
    decoder.leave()?;
    decoder.leave()?;

    Ok(SnmpResponse {
        version,
        community,
        request_id,
        error_status,
        error_index,
        variable_bindings,
    })
}

fn decode_value(decoder: &mut Decoder<'_>) -> SnmpResult<SnmpValue> {
    let tag = decoder.peek()?;
    Ok(match tag {
        Tag::Integer => SnmpValue::Integer(decoder.read_integer()?),
        Tag::OctetString => SnmpValue::OctetString(decoder.read_octet_string()?),
        Tag::Null => {
            decoder.read_null()?;
            SnmpValue::Null
        }
        Tag::ObjectIdentifier => SnmpValue::ObjectIdentifier(decoder.read_oid()?),
        Tag::IpAddress => SnmpValue::IpAddress(decoder.read_ip_address()?),
        Tag::Counter32 => SnmpValue::Counter32(decoder.read_unsigned32(Tag::Counter32)?),
        Tag::Gauge32 => SnmpValue::Gauge32(decoder.read_unsigned32(Tag::Gauge32)?),
        Tag::TimeTicks => SnmpValue::TimeTicks(decoder.read_unsigned32(Tag::TimeTicks)?),
        Tag::Counter64 => SnmpValue::Counter64(decoder.read_unsigned64(Tag::Counter64)?),
        Tag::NoSuchObject => {
            decoder.read_any()?;
            SnmpValue::NoSuchObject
        }
        Tag::NoSuchInstance => {
            decoder.read_any()?;
            SnmpValue::NoSuchInstance
        }
        Tag::EndOfMibView => {
            decoder.read_any()?;
            SnmpValue::EndOfMibView
        }
        Tag::Sequence
        | Tag::GetRequest
        | Tag::GetNextRequest
        | Tag::GetResponse
        | Tag::GetBulkRequest => {
            return Err(BerError::Malformed {
                offset: decoder.offset(),
                reason: "constructed tag in value position",
            }
            .into());
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request_datagram(pdu_tag: Tag, second: i64, third: i64, oids: &[&str]) -> Bytes {
        let mut encoder = Encoder::new();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.write_integer(1).unwrap();
        encoder.write_octet_string(b"public").unwrap();
        encoder.enter(pdu_tag).unwrap();
        encoder.write_integer(42).unwrap();
        encoder.write_integer(second).unwrap();
        encoder.write_integer(third).unwrap();
        encoder.enter(Tag::Sequence).unwrap();
        for oid in oids {
            encoder.enter(Tag::Sequence).unwrap();
            encoder.write_oid(&oid.parse().unwrap()).unwrap();
            encoder.write_null().unwrap();
            encoder.leave().unwrap();
        }
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.output().unwrap()
    }

    #[test]
    fn test_decode_get_request() {
        let data = request_datagram(Tag::GetRequest, 0, 0, &["1.3.6.1.2.1.1.1.0"]);
        let request = decode_request(&data).unwrap();
        assert_eq!(request.version, Version::V2c);
        assert_eq!(request.community, Community::from("public"));
        assert_eq!(request.pdu_type, PduType::GetRequest);
        assert_eq!(request.request_id, 42);
        assert_eq!(request.non_repeaters, 0);
        assert_eq!(request.max_repetitions, 0);
        assert_eq!(
            request.variable_bindings,
            vec![VarBinding::null("1.3.6.1.2.1.1.1.0".parse().unwrap())]
        );
    }

    #[test]
    fn test_decode_get_bulk_reads_repetition_fields() {
        let data = request_datagram(Tag::GetBulkRequest, 1, 5, &["1.3.6.1", "1.3.6.2"]);
        let request = decode_request(&data).unwrap();
        assert_eq!(request.pdu_type, PduType::GetBulkRequest);
        assert_eq!(request.non_repeaters, 1);
        assert_eq!(request.max_repetitions, 5);
        assert_eq!(request.variable_bindings.len(), 2);
    }

    #[test]
    fn test_decode_clamps_negative_bulk_fields() {
        let data = request_datagram(Tag::GetBulkRequest, -3, -1, &["1.3.6.1"]);
        let request = decode_request(&data).unwrap();
        assert_eq!(request.non_repeaters, 0);
        assert_eq!(request.max_repetitions, 0);
    }

    #[test]
    fn test_request_values_are_discarded() {
        // Hand-build a request whose varbind carries an echoed value
        // instead of Null.
        let mut encoder = Encoder::new();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.write_integer(1).unwrap();
        encoder.write_octet_string(b"public").unwrap();
        encoder.enter(Tag::GetRequest).unwrap();
        encoder.write_integer(7).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.write_oid(&"1.3.6.1".parse().unwrap()).unwrap();
        encoder.write_octet_string(b"echoed").unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        let data = encoder.output().unwrap();

        let request = decode_request(&data).unwrap();
        assert_eq!(request.variable_bindings[0].value, SnmpValue::Null);
    }

    #[test]
    fn test_unsupported_version() {
        let mut encoder = Encoder::new();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.write_integer(3).unwrap();
        encoder.write_octet_string(b"public").unwrap();
        encoder.enter(Tag::GetRequest).unwrap();
        encoder.write_integer(1).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        let data = encoder.output().unwrap();
        assert_eq!(
            decode_request(&data),
            Err(SnmpError::UnsupportedVersion(3))
        );
    }

    #[test]
    fn test_unsupported_pdu() {
        // SET_REQUEST (0xA3) is outside the supported universe.
        let data = [
            0x30, 0x0D, 0x02, 0x01, 0x01, 0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', 0xA3,
            0x00,
        ];
        assert_eq!(decode_request(&data), Err(SnmpError::UnsupportedPdu(0xA3)));
    }

    #[test]
    fn test_response_pdu_rejected_as_request() {
        let response = SnmpResponse {
            version: Version::V2c,
            community: Community::from("public"),
            request_id: 1,
            error_status: 0,
            error_index: 0,
            variable_bindings: Vec::new(),
        };
        let data = encode_response(&response).unwrap();
        assert_eq!(decode_request(&data), Err(SnmpError::UnsupportedPdu(0xA2)));
    }

    #[test]
    fn test_truncated_datagram_is_malformed() {
        let data = request_datagram(Tag::GetRequest, 0, 0, &["1.3.6.1.2.1.1.1.0"]);
        let result = decode_request(&data[..data.len() - 3]);
        assert!(matches!(result, Err(SnmpError::Ber(BerError::Malformed { .. }))));
    }

    #[test]
    fn test_non_utf8_community_is_preserved() {
        let mut encoder = Encoder::new();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.write_octet_string(&[0xFF, 0xFE, 0x70]).unwrap();
        encoder.enter(Tag::GetRequest).unwrap();
        encoder.write_integer(1).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.write_integer(0).unwrap();
        encoder.enter(Tag::Sequence).unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        encoder.leave().unwrap();
        let data = encoder.output().unwrap();

        let request = decode_request(&data).unwrap();
        assert_eq!(request.community.as_bytes(), &[0xFF, 0xFE, 0x70]);
        assert_eq!(request.community.as_str(), None);
    }

    #[test]
    fn test_encode_response_wire_layout() {
        let response = SnmpResponse {
            version: Version::V2c,
            community: Community::from("public"),
            request_id: 42,
            error_status: 0,
            error_index: 0,
            variable_bindings: vec![VarBinding::new(
                "1.3.6.1.2.1.1.3.0".parse().unwrap(),
                SnmpValue::TimeTicks(12345),
            )],
        };
        let data = encode_response(&response).unwrap();
        let expected: &[u8] = &[
            0x30, 0x28, // message sequence
            0x02, 0x01, 0x01, // version v2c
            0x04, 0x06, b'p', b'u', b'b', b'l', b'i', b'c', // community
            0xA2, 0x1B, // GetResponse
            0x02, 0x01, 0x2A, // request-id 42
            0x02, 0x01, 0x00, // error-status
            0x02, 0x01, 0x00, // error-index
            0x30, 0x10, // varbind list
            0x30, 0x0E, // varbind
            0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x03, 0x00, // OID
            0x43, 0x02, 0x30, 0x39, // TimeTicks 12345
        ];
        assert_eq!(&data[..], expected);
    }

    #[test]
    fn test_response_round_trips_all_value_variants() {
        let varbinds = vec![
            VarBinding::new("1.3.6.1.1".parse().unwrap(), SnmpValue::Integer(-42)),
            VarBinding::new(
                "1.3.6.1.2".parse().unwrap(),
                SnmpValue::OctetString(b"sysDescr".to_vec()),
            ),
            VarBinding::new("1.3.6.1.3".parse().unwrap(), SnmpValue::Null),
            VarBinding::new(
                "1.3.6.1.4".parse().unwrap(),
                SnmpValue::ObjectIdentifier("1.3.6.1.4.1.8072".parse().unwrap()),
            ),
            VarBinding::new(
                "1.3.6.1.5".parse().unwrap(),
                SnmpValue::IpAddress(Ipv4Addr::new(10, 0, 0, 1)),
            ),
            VarBinding::new("1.3.6.1.6".parse().unwrap(), SnmpValue::Counter32(u32::MAX)),
            VarBinding::new("1.3.6.1.7".parse().unwrap(), SnmpValue::Gauge32(1000)),
            VarBinding::new("1.3.6.1.8".parse().unwrap(), SnmpValue::TimeTicks(12345)),
            VarBinding::new("1.3.6.1.9".parse().unwrap(), SnmpValue::Counter64(u64::MAX)),
            VarBinding::new("1.3.6.1.10".parse().unwrap(), SnmpValue::NoSuchObject),
            VarBinding::new("1.3.6.1.11".parse().unwrap(), SnmpValue::NoSuchInstance),
            VarBinding::new("1.3.6.1.12".parse().unwrap(), SnmpValue::EndOfMibView),
        ];
        let response = SnmpResponse {
            version: Version::V1,
            community: Community::from("private"),
            request_id: -7,
            error_status: 0,
            error_index: 0,
            variable_bindings: varbinds,
        };
        let data = encode_response(&response).unwrap();
        let decoded = decode_response(&data).unwrap();
        assert_eq!(decoded, response);

        // Canonical messages re-encode byte-for-byte.
        let reencoded = encode_response(&decoded).unwrap();
        assert_eq!(reencoded, data);
    }

    #[test]
    fn test_boolean_encodes_under_integer_tag() {
        let response = SnmpResponse {
            version: Version::V2c,
            community: Community::from("public"),
            request_id: 1,
            error_status: 0,
            error_index: 0,
            variable_bindings: vec![
                VarBinding::new("1.3.6.1.1".parse().unwrap(), SnmpValue::Boolean(true)),
                VarBinding::new("1.3.6.1.2".parse().unwrap(), SnmpValue::Boolean(false)),
            ],
        };
        let data = encode_response(&response).unwrap();
        let decoded = decode_response(&data).unwrap();
        // 0xFF reads back as the integer -1, 0x00 as 0.
        assert_eq!(decoded.variable_bindings[0].value, SnmpValue::Integer(-1));
        assert_eq!(decoded.variable_bindings[1].value, SnmpValue::Integer(0));
    }

    #[test]
    fn test_create_response_copies_request_envelope() {
        let data = request_datagram(Tag::GetNextRequest, 0, 0, &["1.3.6.1"]);
        let request = decode_request(&data).unwrap();
        let response = request.create_response(
            vec![VarBinding::new("1.3.6.2".parse().unwrap(), SnmpValue::Integer(4))],
            0,
            0,
        );
        assert_eq!(response.version, request.version);
        assert_eq!(response.community, request.community);
        assert_eq!(response.request_id, request.request_id);
        assert_eq!(response.error_status, 0);
        assert_eq!(response.error_index, 0);
    }
}
