//! Packet Tests
//!
//! Tests for packet construction, invariants and error classification.

use xswire::protocol::{Event, Op, Packet, MAX_PAYLOAD_SIZE};
use xswire::XsError;

fn reply(payload: &[u8]) -> Packet {
    Packet::request(Op::Read, payload).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_defaults_ids_to_zero() {
    let packet = Packet::new(Op::Read, b"/a\0", None, None).unwrap();

    assert_eq!(packet.rq_id(), 0);
    assert_eq!(packet.tx_id(), 0);
}

#[test]
fn test_omitted_and_zero_ids_are_identical() {
    let omitted = Packet::new(Op::Write, b"x", None, None).unwrap();
    let zero = Packet::new(Op::Write, b"x", Some(0), Some(0)).unwrap();

    assert_eq!(omitted, zero);
    assert_eq!(omitted.to_bytes(), zero.to_bytes());
}

#[test]
fn test_new_keeps_ids() {
    let packet = Packet::with_ids(Op::Rm, "/tmp\0", u32::MAX, 12).unwrap();

    assert_eq!(packet.op(), Op::Rm);
    assert_eq!(packet.rq_id(), u32::MAX);
    assert_eq!(packet.tx_id(), 12);
}

#[test]
fn test_new_accepts_raw_code() {
    let packet = Packet::new(128u32, b"", None, None).unwrap();
    assert_eq!(packet.op(), Op::Restrict);

    let packet = Packet::new(0u32, b"", None, None).unwrap();
    assert_eq!(packet.op(), Op::Debug);
}

#[test]
fn test_invalid_operation() {
    let result = Packet::new(9999u32, b"x", None, None);
    assert!(matches!(result, Err(XsError::InvalidOperation(9999))));

    for code in [20u32, 21, 127, 129] {
        assert!(matches!(
            Packet::new(code, b"", None, None),
            Err(XsError::InvalidOperation(c)) if c == code
        ));
    }
}

#[test]
fn test_payload_limit() {
    let at_limit = Packet::request(Op::Write, vec![b'x'; 4096]).unwrap();
    assert_eq!(at_limit.size(), 4096);

    match Packet::request(Op::Write, vec![b'x'; 4097]) {
        Err(XsError::InvalidPayload { size, max }) => {
            assert_eq!(size, 4097);
            assert_eq!(max, MAX_PAYLOAD_SIZE);
        }
        other => panic!("Expected InvalidPayload, got {:?}", other),
    }
}

#[test]
fn test_payload_checked_before_operation() {
    let result = Packet::new(9999u32, vec![0u8; 5000], None, None);
    assert!(matches!(result, Err(XsError::InvalidPayload { .. })));
}

#[test]
fn test_text_payload_is_utf8() {
    let packet = Packet::request(Op::Write, "héllo").unwrap();

    assert_eq!(packet.size(), 6);
    assert_eq!(packet.payload(), "héllo".as_bytes());
    assert_eq!(&packet.to_bytes()[16..], b"h\xc3\xa9llo");
}

#[test]
fn test_text_payload_limit_counts_bytes() {
    // 2048 two-byte characters fit exactly, one more does not
    let fits = "é".repeat(2048);
    assert!(Packet::request(Op::Write, &fits).is_ok());

    let too_long = format!("{}x", fits);
    assert!(matches!(
        Packet::request(Op::Write, too_long),
        Err(XsError::InvalidPayload { size: 4097, .. })
    ));
}

#[test]
fn test_size_tracks_payload() {
    for len in [0usize, 1, 255, 4096] {
        let packet = Packet::request(Op::Write, vec![7u8; len]).unwrap();
        assert_eq!(packet.size() as usize, packet.payload().len());
        assert_eq!(packet.header().size as usize, len);
    }
}

#[test]
fn test_packets_are_values() {
    let a = Packet::with_ids(Op::Read, "/a\0", 1, 0).unwrap();
    let b = a.clone();
    let c = Packet::with_ids(Op::Read, "/a\0", 2, 0).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_packets_cross_threads() {
    let packet = Packet::with_ids(Op::Read, "/a\0", 1, 0).unwrap();
    let handle = std::thread::spawn(move || packet.to_bytes().len());
    assert_eq!(handle.join().unwrap(), 19);
}

// =============================================================================
// Error Classification Tests
// =============================================================================

#[test]
fn test_is_error_matches_error_names() {
    assert!(reply(b"ENOENT\0").is_error());
    assert!(reply(b"EACCES\0").is_error());
    assert!(reply(b"EX\0").is_error());
}

#[test]
fn test_is_error_rejects_non_errors() {
    assert!(!reply(b"OK\0").is_error());
    assert!(!reply(b"").is_error());
    assert!(!reply(b"EFOO").is_error());
    assert!(!reply(b"E\0").is_error());
    assert!(!reply(b"Enoent\0").is_error());
    assert!(!reply(b"ENOENT\0\0").is_error());
    assert!(!reply(b" ENOENT\0").is_error());
    assert!(!reply(b"ENOENT\0x").is_error());
    assert!(!reply(b"ENO ENT\0").is_error());
    assert!(!reply(b"ENOENT1\0").is_error());
}

#[test]
fn test_error_name() {
    assert_eq!(reply(b"ENOENT\0").error_name(), Some("ENOENT"));
    assert_eq!(reply(b"EQUOTA\0").error_name(), Some("EQUOTA"));
    assert_eq!(reply(b"OK\0").error_name(), None);
    assert_eq!(reply(b"EFOO").error_name(), None);
}

#[test]
fn test_is_error_ignores_op() {
    // Classification only looks at the payload.
    let packet = Packet::request(Op::Error, b"OK\0").unwrap();
    assert!(!packet.is_error());

    let packet = Packet::request(Op::Write, b"EINVAL\0").unwrap();
    assert!(packet.is_error());
}

// =============================================================================
// Event Tests
// =============================================================================

#[test]
fn test_event_fields() {
    let event = Event::new("/local/domain/1/memory", "mem-watch");

    assert_eq!(event.path(), "/local/domain/1/memory");
    assert_eq!(event.token(), "mem-watch");
    assert_eq!(event.to_string(), "/local/domain/1/memory (mem-watch)");
}

#[test]
fn test_event_equality() {
    let a = Event::new("/a", "t");
    assert_eq!(a, Event::new(String::from("/a"), String::from("t")));
    assert_ne!(a, Event::new("/a", "u"));
}

#[test]
fn test_event_serde() {
    let event = Event::new("/vm/1", "tok");
    let json = serde_json::to_string(&event).unwrap();

    assert_eq!(json, r#"{"path":"/vm/1","token":"tok"}"#);
    assert_eq!(serde_json::from_str::<Event>(&json).unwrap(), event);
}
