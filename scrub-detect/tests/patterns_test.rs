use scrub_core::IDetector;
use scrub_detect::patterns::{luhn_valid, pii};
use scrub_detect::PatternDetector;

// ── Pattern registry health ───────────────────────────────────────────────

#[test]
fn all_patterns_compile_without_errors() {
    let patterns = pii::all_patterns();
    assert!(
        patterns.len() >= 12,
        "Expected 12+ PII patterns, got {}",
        patterns.len()
    );
    for pat in &patterns {
        assert!(
            pat.regex.is_some(),
            "PII pattern '{}' failed to compile",
            pat.name
        );
    }
}

// ── Known PII strings detected with correct offsets ───────────────────────

#[test]
fn email_detected_with_offsets() {
    let detector = PatternDetector::new();
    let text = "Contact john.doe@company.org for details";
    let spans = detector.detect(text).unwrap();
    assert_eq!(spans.len(), 1, "expected one span, got {spans:?}");
    assert_eq!(spans[0].label, "EMAIL_ADDRESS");
    assert_eq!(&text[spans[0].start..spans[0].end], "john.doe@company.org");
    assert_eq!(spans[0].source, "pattern");
}

#[test]
fn ssn_detected() {
    let detector = PatternDetector::new();
    let spans = detector.detect("SSN: 123-45-6789").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].label, "US_SSN");
}

#[test]
fn phone_with_parens_detected() {
    let detector = PatternDetector::new();
    let text = "Call (555) 123-4567 for support";
    let spans = detector.detect(text).unwrap();
    assert_eq!(spans.len(), 1, "spans: {spans:?}");
    assert_eq!(spans[0].label, "PHONE_NUMBER");
    assert_eq!(&text[spans[0].start..spans[0].end], "(555) 123-4567");
}

#[test]
fn ipv4_detected() {
    let detector = PatternDetector::new();
    let spans = detector.detect("Server IP: 192.168.1.100").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].label, "IP_ADDRESS");
}

#[test]
fn iban_detected() {
    let detector = PatternDetector::new();
    let spans = detector.detect("IBAN: DE89370400440532013000").unwrap();
    assert_eq!(spans.len(), 1, "spans: {spans:?}");
    assert_eq!(spans[0].label, "IBAN_CODE");
}

#[test]
fn date_detected() {
    let detector = PatternDetector::new();
    let spans = detector.detect("born on 03/15/1994, probably").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].label, "DATE_TIME");
}

#[test]
fn url_detected() {
    let detector = PatternDetector::new();
    let text = "docs at https://example.com/a/b?q=1 here";
    let spans = detector.detect(text).unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].label, "URL");
    assert_eq!(
        &text[spans[0].start..spans[0].end],
        "https://example.com/a/b?q=1"
    );
}

// ── Credit cards are checksum-validated ───────────────────────────────────

#[test]
fn luhn_valid_card_detected() {
    let detector = PatternDetector::new();
    let spans = detector.detect("Card: 4111-1111-1111-1111").unwrap();
    assert_eq!(spans.len(), 1, "spans: {spans:?}");
    assert_eq!(spans[0].label, "CREDIT_CARD");
}

#[test]
fn luhn_invalid_card_ignored() {
    let detector = PatternDetector::new();
    let spans = detector.detect("Card: 4111-1111-1111-1112").unwrap();
    assert!(spans.is_empty(), "spans: {spans:?}");
}

#[test]
fn luhn_checksum_cases() {
    assert!(luhn_valid("4111111111111111"));
    assert!(luhn_valid("4111-1111-1111-1111"));
    assert!(luhn_valid("5500 0000 0000 0004"));
    assert!(!luhn_valid("4111111111111112"));
    assert!(!luhn_valid("not-a-number"));
    assert!(!luhn_valid("411"));
}

// ── Overlap resolution within the detector ────────────────────────────────

#[test]
fn email_inside_url_yields_single_url_span() {
    let detector = PatternDetector::new();
    let text = "See https://example.com/u/jane.doe@corp.org?x=1 now";
    let spans = detector.detect(text).unwrap();
    assert_eq!(spans.len(), 1, "spans: {spans:?}");
    assert_eq!(spans[0].label, "URL");
}

#[test]
fn passport_wins_over_drivers_license_on_same_range() {
    // A12345678 matches both patterns over the identical range; the
    // registry lists passport first, so it wins.
    let detector = PatternDetector::new();
    let spans = detector.detect("Passport no. A12345678").unwrap();
    assert_eq!(spans.len(), 1, "spans: {spans:?}");
    assert_eq!(spans[0].label, "US_PASSPORT");
}

#[test]
fn detector_output_never_overlaps_itself() {
    let detector = PatternDetector::new();
    let text = "mailto john@host.io https://h.io/john@host.io 192.168.0.1 123-45-6789";
    let spans = detector.detect(text).unwrap();
    for pair in spans.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "overlapping spans: {pair:?}"
        );
    }
}

// ── No PII means no spans ─────────────────────────────────────────────────

#[test]
fn clean_text_yields_no_spans() {
    let detector = PatternDetector::new();
    let spans = detector
        .detect("a perfectly ordinary sentence about nothing")
        .unwrap();
    assert!(spans.is_empty());
}
