// Domain module tests.

use super::*;
use crate::dns::StaticSource;
use crate::error_handling::{KindCounts, LookupError};
use hickory_resolver::proto::rr::rdata::{A, MX, PTR, TXT};
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use strum::IntoEnumIterator;

fn name(text: &str) -> Name {
    Name::from_ascii(text).expect("valid test name")
}

fn txt(text: &str) -> RData {
    RData::TXT(TXT::new(vec![text.to_string()]))
}

#[test]
fn test_labels_and_headers() {
    assert_eq!(RecordKind::Dmarc.label(), "DMARC Data");
    assert_eq!(RecordKind::Ptr.label(), "PTR Data");
    assert_eq!(RecordKind::Dmarc.header_name(), "DMARC_DATA");
    assert_eq!(RecordKind::A.header_name(), "A_DATA");
}

#[test]
fn test_processing_order_matches_declaration() {
    let order: Vec<RecordKind> = RecordKind::iter().collect();
    assert_eq!(
        order,
        vec![
            RecordKind::Dmarc,
            RecordKind::Spf,
            RecordKind::Mx,
            RecordKind::A,
            RecordKind::Ptr
        ]
    );
    for (i, kind) in order.iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
}

#[test]
fn test_query_plans() {
    let dmarc = RecordKind::Dmarc.plan("example.com").unwrap();
    assert_eq!(dmarc.name, "_dmarc.example.com");
    assert_eq!(dmarc.record_type, RecordType::TXT);
    assert!(dmarc.filter.is_none());

    let spf = RecordKind::Spf.plan("example.com").unwrap();
    assert_eq!(spf.name, "example.com");
    assert_eq!(spf.record_type, RecordType::TXT);
    assert!(spf.filter.is_some());

    let mx = RecordKind::Mx.plan("example.com").unwrap();
    assert_eq!(mx.record_type, RecordType::MX);

    let a = RecordKind::A.plan("example.com").unwrap();
    assert_eq!(a.record_type, RecordType::A);

    let ptr = RecordKind::Ptr.plan("192.0.2.1").unwrap();
    assert_eq!(ptr.name, "1.2.0.192.in-addr.arpa.");
    assert_eq!(ptr.record_type, RecordType::PTR);
}

#[test]
fn test_kind_table_tracks_widest_row() {
    let mut table = KindTable::default();
    table.push("a.example", vec!["1".into(), "2".into()]);
    table.push("b.example", vec![]);
    table.push("c.example", vec!["3".into()]);
    assert_eq!(table.max_cols, 2);
    assert_eq!(table.rows[0], vec!["a.example", "1", "2"]);
    assert_eq!(table.rows[1], vec!["b.example"]);
    assert_eq!(table.rows[2], vec!["c.example", "3"]);
}

#[test]
fn test_record_tables_populated_in_order() {
    let mut tables = RecordTables::new();
    tables.get_mut(RecordKind::Ptr).push("192.0.2.1", vec![]);
    tables.get_mut(RecordKind::Dmarc).push("example.com", vec![]);
    let kinds: Vec<RecordKind> = tables.populated().map(|(kind, _)| kind).collect();
    assert_eq!(kinds, vec![RecordKind::Dmarc, RecordKind::Ptr]);
}

#[tokio::test]
async fn test_spf_row_keeps_only_spf_strings() {
    let source = StaticSource::new().with_records(
        "example.com",
        RecordType::TXT,
        vec![txt("v=spf1 include:_spf.example.com ~all"), txt("unrelated=1")],
    );
    let mut processor = DomainProcessor::new(&source, &[RecordKind::Spf]);
    processor.process("example.com").await;

    let table = processor.tables().get(RecordKind::Spf);
    assert_eq!(table.max_cols, 1);
    assert_eq!(
        table.rows,
        vec![vec![
            "example.com".to_string(),
            "v=spf1 include:_spf.example.com ~all".to_string()
        ]]
    );
}

#[tokio::test]
async fn test_spf_without_match_keeps_host_row() {
    let source = StaticSource::new().with_records(
        "example.com",
        RecordType::TXT,
        vec![txt("google-site-verification=abc")],
    );
    let mut processor = DomainProcessor::new(&source, &[RecordKind::Spf]);
    processor.process("example.com").await;

    let table = processor.tables().get(RecordKind::Spf);
    assert_eq!(table.rows, vec![vec!["example.com".to_string()]]);
    assert_eq!(table.max_cols, 0);
    assert_eq!(processor.stats().get(RecordKind::Spf).succeeded, 1);
}

#[tokio::test]
async fn test_reverse_for_non_address_is_diagnostic_row() {
    let source = StaticSource::new();
    let mut processor = DomainProcessor::new(&source, &[RecordKind::Ptr]);
    processor.process("not.an.ip").await;

    let table = processor.tables().get(RecordKind::Ptr);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0], "not.an.ip");
    assert_eq!(
        table.rows[0][1],
        LookupError::NotAnAddress("not.an.ip".to_string()).to_string()
    );
    assert_eq!(table.rows[0].len(), 2);
    assert!(source.queries().is_empty(), "no query should be sent");
    assert_eq!(
        processor.stats().get(RecordKind::Ptr),
        KindCounts {
            succeeded: 0,
            failed: 1
        }
    );
}

#[tokio::test]
async fn test_failure_does_not_stop_remaining_kinds() {
    let source = StaticSource::new()
        .with_error(
            "example.com",
            RecordType::MX,
            LookupError::Timeout("example.com.".to_string()),
        )
        .with_records(
            "example.com",
            RecordType::A,
            vec![RData::A(A::new(192, 0, 2, 80))],
        );
    let mut processor = DomainProcessor::new(&source, &[RecordKind::Mx, RecordKind::A]);
    processor.process("example.com").await;

    let mx = processor.tables().get(RecordKind::Mx);
    assert_eq!(mx.rows[0].len(), 2);
    assert!(mx.rows[0][1].contains("timed out"));

    let a = processor.tables().get(RecordKind::A);
    assert_eq!(a.rows, vec![vec!["example.com".to_string(), "192.0.2.80".to_string()]]);
}

#[tokio::test]
async fn test_kinds_run_in_fixed_order() {
    let source = StaticSource::new();
    let kinds = vec![RecordKind::Ptr, RecordKind::A, RecordKind::Dmarc];
    let mut processor = DomainProcessor::new(&source, &kinds);
    processor.process("192.0.2.1").await;

    let asked: Vec<RecordType> = source.queries().into_iter().map(|(_, t)| t).collect();
    assert_eq!(asked, vec![RecordType::TXT, RecordType::A, RecordType::PTR]);
    assert_eq!(source.queries()[0].0, "_dmarc.192.0.2.1.");
}

#[tokio::test]
async fn test_max_cols_equals_widest_tail() {
    let source = StaticSource::new()
        .with_records(
            "one.example",
            RecordType::MX,
            vec![RData::MX(MX::new(10, name("mx.one.example.")))],
        )
        .with_records(
            "three.example",
            RecordType::MX,
            vec![
                RData::MX(MX::new(10, name("mx1.three.example."))),
                RData::MX(MX::new(20, name("mx2.three.example."))),
                RData::MX(MX::new(30, name("mx3.three.example."))),
            ],
        );
    let mut processor = DomainProcessor::new(&source, &[RecordKind::Mx]);
    for host in ["one.example", "three.example", "missing.example"] {
        processor.process(host).await;
    }
    let (tables, stats) = processor.into_parts();
    let mx = tables.get(RecordKind::Mx);

    let widest = mx.rows.iter().map(|row| row.len() - 1).max().unwrap();
    assert_eq!(mx.max_cols, widest);
    assert_eq!(mx.max_cols, 3);
    for row in &mx.rows {
        assert!(row.len() - 1 <= mx.max_cols);
    }
    let hosts: Vec<&str> = mx.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(hosts, vec!["one.example", "three.example", "missing.example"]);
    assert_eq!(stats.get(RecordKind::Mx).failed, 1);
}

#[tokio::test]
async fn test_disabled_kinds_get_no_rows() {
    let source = StaticSource::new().with_records(
        "1.2.0.192.in-addr.arpa.",
        RecordType::PTR,
        vec![RData::PTR(PTR(name("host.example.net.")))],
    );
    let mut processor = DomainProcessor::new(&source, &[]);
    processor.process("192.0.2.1").await;
    assert_eq!(processor.tables().populated().count(), 0);
    assert!(source.queries().is_empty());
}

#[tokio::test]
async fn test_reverse_lookup_resolves_ptr() {
    let source = StaticSource::new().with_records(
        "1.2.0.192.in-addr.arpa.",
        RecordType::PTR,
        vec![RData::PTR(PTR(name("host.example.net.")))],
    );
    let all: Vec<RecordKind> = RecordKind::iter().collect();
    let mut processor = DomainProcessor::new(&source, &all);
    processor.process("192.0.2.1").await;
    let ptr = processor.tables().get(RecordKind::Ptr);
    assert_eq!(
        ptr.rows,
        vec![vec!["192.0.2.1".to_string(), "host.example.net".to_string()]]
    );
    assert_eq!(processor.tables().populated().count(), 5);
}
