use mrv_canonical::{
    canonicalizer::Canonicalizer, compute_record_digest, verify_record_digest,
    CanonicalizationError, Digest, DigestAlg, HygieneStatus, HygieneWarning, SchemaVersion,
};
use serde_json::json;

fn make_canonicalizer() -> Canonicalizer {
    Canonicalizer::new(SchemaVersion::parse("1.0").unwrap())
}

#[test]
fn canonicalizer_produces_ordered_bytes() {
    let canonicalizer = make_canonicalizer();
    let value = json!({"b": 1, "a": {"nested": 2}});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(result.bytes, br#"{"a":{"nested":2},"b":1}"#.to_vec());
    assert_eq!(result.report.status, HygieneStatus::Ok);
}

#[test]
fn key_insertion_order_is_discarded() {
    let canonicalizer = make_canonicalizer();
    let first: serde_json::Value =
        serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":{"b":true,"a":false}}"#).unwrap();
    let second: serde_json::Value =
        serde_json::from_str(r#"{"mid":{"a":false,"b":true},"alpha":2,"zeta":1}"#).unwrap();

    let a = canonicalizer.canonicalize(&first).unwrap();
    let b = canonicalizer.canonicalize(&second).unwrap();
    assert_eq!(a.bytes, b.bytes);
}

#[test]
fn zero_valued_floats_keep_their_decimal_point() {
    let canonicalizer = make_canonicalizer();
    let value = json!({"energy_kwh": 0.5, "co2_kg": 0.0});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(result.bytes, br#"{"co2_kg":0.0,"energy_kwh":0.5}"#.to_vec());
}

#[test]
fn integers_and_floats_canonicalize_differently() {
    let canonicalizer = make_canonicalizer();
    let int_value: serde_json::Value = serde_json::from_str(r#"{"n":0}"#).unwrap();
    let float_value: serde_json::Value = serde_json::from_str(r#"{"n":0.0}"#).unwrap();

    let int_bytes = canonicalizer.canonicalize(&int_value).unwrap().bytes;
    let float_bytes = canonicalizer.canonicalize(&float_value).unwrap().bytes;
    assert_eq!(int_bytes, br#"{"n":0}"#.to_vec());
    assert_eq!(float_bytes, br#"{"n":0.0}"#.to_vec());
    assert_ne!(int_bytes, float_bytes);
}

#[test]
fn numeric_literal_spelling_does_not_matter() {
    let canonicalizer = make_canonicalizer();
    let spellings = [r#"{"x":0.5}"#, r#"{"x":0.50}"#, r#"{"x":5e-1}"#];
    let expected = canonicalizer
        .canonicalize(&serde_json::from_str(spellings[0]).unwrap())
        .unwrap()
        .bytes;
    for spelling in &spellings[1..] {
        let value: serde_json::Value = serde_json::from_str(spelling).unwrap();
        assert_eq!(canonicalizer.canonicalize(&value).unwrap().bytes, expected);
    }
}

#[test]
fn string_escaping_follows_the_fixed_rule() {
    let canonicalizer = make_canonicalizer();
    let value = json!({"s": "quote:\" slash:\\ tab:\t nul:\u{0} unicode:é"});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(
        String::from_utf8(result.bytes).unwrap(),
        "{\"s\":\"quote:\\\" slash:\\\\ tab:\\t nul:\\u0000 unicode:é\"}"
    );
}

#[test]
fn arrays_preserve_element_order() {
    let canonicalizer = make_canonicalizer();
    let value = json!({"seq": [3, 1, 2], "flags": [true, null, false]});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(
        result.bytes,
        br#"{"flags":[true,null,false],"seq":[3,1,2]}"#.to_vec()
    );
}

#[test]
fn empty_object_hashes_to_known_vector() {
    let canonicalizer = make_canonicalizer();
    let result = canonicalizer.canonicalize(&json!({})).unwrap();
    assert_eq!(result.bytes, b"{}".to_vec());
    assert_eq!(
        Digest::of_bytes(&result.bytes).hex,
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
}

#[test]
fn record_with_unknown_schema_version_is_rejected() {
    let canonicalizer = make_canonicalizer();
    let record = json!({"schema_version": "9.7", "mrv_id": "MRV-001"});
    let err = canonicalizer.canonicalize_record(&record).unwrap_err();
    assert!(matches!(
        err,
        CanonicalizationError::UnsupportedSchemaVersion { .. }
    ));
}

#[test]
fn record_without_schema_version_is_rejected() {
    let canonicalizer = make_canonicalizer();
    let record = json!({"mrv_id": "MRV-001"});
    let err = canonicalizer.canonicalize_record(&record).unwrap_err();
    assert!(matches!(err, CanonicalizationError::MissingSchemaVersion));
}

#[test]
fn record_digest_is_deterministic() {
    let canonicalizer = make_canonicalizer();
    let record = json!({
        "schema_version": "1.0",
        "mrv_id": "MRV-001",
        "energy_emissions": {"energy_kwh": 0.5, "co2_kg": 0.0}
    });

    let first = compute_record_digest(&record, &canonicalizer).unwrap();
    let second = compute_record_digest(&record, &canonicalizer).unwrap();
    assert_eq!(first, second);
    assert!(verify_record_digest(&record, &first, &canonicalizer).unwrap());
}

#[test]
fn single_field_mutation_changes_the_digest() {
    let canonicalizer = make_canonicalizer();
    let original = json!({
        "schema_version": "1.0",
        "mrv_id": "MRV-001",
        "energy_emissions": {"energy_kwh": 0.5, "co2_kg": 0.0}
    });
    let mutated = json!({
        "schema_version": "1.0",
        "mrv_id": "MRV-001",
        "energy_emissions": {"energy_kwh": 0.50001, "co2_kg": 0.0}
    });

    let a = compute_record_digest(&original, &canonicalizer).unwrap();
    let b = compute_record_digest(&mutated, &canonicalizer).unwrap();
    assert_ne!(a, b);
    assert!(!verify_record_digest(&mutated, &a, &canonicalizer).unwrap());
}

#[test]
fn many_small_mutations_produce_distinct_digests() {
    let canonicalizer = make_canonicalizer();
    let mut seen = std::collections::HashSet::new();
    for i in 0..200u32 {
        let record = json!({
            "schema_version": "1.0",
            "mrv_id": "MRV-001",
            "energy_emissions": {"energy_kwh": 0.5 + f64::from(i) * 1e-6}
        });
        let digest = compute_record_digest(&record, &canonicalizer).unwrap();
        assert!(seen.insert(digest.hex), "digest collision at mutation {}", i);
    }
}

#[test]
fn digest_serializes_to_golden_json() {
    let digest = Digest::new(
        DigestAlg::Sha256,
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a",
    )
    .unwrap();

    assert_eq!(
        serde_json::to_string(&digest).unwrap(),
        r#"{"alg":"sha-256","hex":"44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"}"#
    );
}

#[test]
fn oversized_integers_canonicalize_with_a_lossy_warning() {
    let canonicalizer = make_canonicalizer();
    // 2^53 + 1: survives our round trip, but not a consumer that parses
    // numbers into f64.
    let value = json!({"big": 9007199254740993u64, "small": 42});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(result.bytes, br#"{"big":9007199254740993,"small":42}"#.to_vec());
    assert_eq!(result.report.status, HygieneStatus::Lossy);
    assert_eq!(
        result.report.warnings,
        vec![HygieneWarning::new("IntegerPrecisionRisk")]
    );

    // In-range integers stay clean.
    let clean = canonicalizer.canonicalize(&json!({"n": 9007199254740992u64}));
    assert_eq!(clean.unwrap().report.status, HygieneStatus::Ok);
}

#[test]
fn hygiene_report_counts_numeric_fields() {
    let canonicalizer = make_canonicalizer();
    let value = json!({"ints": [1, 2], "floats": {"a": 1.5, "b": 0.0, "c": 2.25}});
    let result = canonicalizer.canonicalize(&value).unwrap();
    assert_eq!(result.report.metrics.get("integer_fields"), Some(&2));
    assert_eq!(result.report.metrics.get("float_fields"), Some(&3));
}
