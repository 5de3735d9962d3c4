//! Get / GetNext / GetBulk semantics over a caller-supplied binding
//! table.
//!
//! The resolver is pure: it never fails, never mutates the table, and
//! never touches I/O. Unknown OIDs come back as NoSuchObject and
//! exhausted traversal as EndOfMibView.

use crate::oid::Oid;
use crate::snmp::{PduType, SnmpRequest, SnmpValue, VarBinding};

/// Resolve a request against `table`, dispatching on the PDU variant.
pub fn handle_request(request: &SnmpRequest, table: &[VarBinding]) -> Vec<VarBinding> {
    match request.pdu_type {
        PduType::GetRequest => get(&request.variable_bindings, table),
        PduType::GetNextRequest => get_next(&request.variable_bindings, table),
        PduType::GetBulkRequest => get_bulk(
            &request.variable_bindings,
            request.non_repeaters,
            request.max_repetitions,
            table,
        ),
        // decode_request never yields a response PDU.
        PduType::GetResponse => Vec::new(),
    }
}

/// Exact-match lookup per requested varbind. On duplicate table OIDs the
/// first entry wins.
pub fn get(req_vbs: &[VarBinding], table: &[VarBinding]) -> Vec<VarBinding> {
    req_vbs
        .iter()
        .map(|req| {
            table
                .iter()
                .find(|vb| vb.oid == req.oid)
                .cloned()
                .unwrap_or_else(|| VarBinding::new(req.oid.clone(), SnmpValue::NoSuchObject))
        })
        .collect()
}

/// Lexicographic successor lookup per requested varbind.
pub fn get_next(req_vbs: &[VarBinding], table: &[VarBinding]) -> Vec<VarBinding> {
    let sorted = sorted_by_oid(table);
    req_vbs
        .iter()
        .map(|req| next_after(&req.oid, &sorted))
        .collect()
}

/// One GetNext pass over the first `non_repeaters` varbinds, then
/// `max_repetitions` GetNext steps over each remaining varbind, every
/// step advancing that slot's cursor to the OID just returned.
///
/// A slot that walked off the view keeps re-emitting EndOfMibView at its
/// current OID; the sentinel is not latched.
pub fn get_bulk(
    req_vbs: &[VarBinding],
    non_repeaters: u32,
    max_repetitions: u32,
    table: &[VarBinding],
) -> Vec<VarBinding> {
    let sorted = sorted_by_oid(table);
    let split = (non_repeaters as usize).min(req_vbs.len());
    let (head, tail) = req_vbs.split_at(split);

    let mut results: Vec<VarBinding> = head
        .iter()
        .map(|req| next_after(&req.oid, &sorted))
        .collect();

    let mut cursors: Vec<Oid> = tail.iter().map(|req| req.oid.clone()).collect();
    for _ in 0..max_repetitions {
        for cursor in cursors.iter_mut() {
            let result = next_after(cursor, &sorted);
            *cursor = result.oid.clone();
            results.push(result);
        }
    }
    results
}

/// Stable sort keeps duplicate OIDs in table order, so the first table
/// entry wins ties.
fn sorted_by_oid<'a>(table: &'a [VarBinding]) -> Vec<&'a VarBinding> {
    let mut sorted: Vec<&VarBinding> = table.iter().collect();
    sorted.sort_by(|a, b| a.oid.cmp(&b.oid));
    sorted
}

fn next_after(oid: &Oid, sorted: &[&VarBinding]) -> VarBinding {
    sorted
        .iter()
        .find(|vb| vb.oid > *oid)
        .map(|vb| (*vb).clone())
        .unwrap_or_else(|| VarBinding::new(oid.clone(), SnmpValue::EndOfMibView))
}
