use regex::Regex;
use std::sync::LazyLock;

/// A compiled PII detection pattern.
pub struct PiiPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Category label substituted as `<LABEL>` in the output.
    pub label: &'static str,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// ── Phone numbers (US formats, separators required) ───────────────────────
pii_pattern!(
    RE_PHONE,
    r"(?:\+?1[-.\s])?\(?\d{3}\)?[-.\s]\d{3}[-.\s]?\d{4}\b"
);

// ── SSN ────────────────────────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Credit card (Visa, MC, Amex, Discover); Luhn-checked after match ───────
pii_pattern!(
    RE_CREDIT_CARD,
    r"\b(?:4\d{3}|5[1-5]\d{2}|3[47]\d{2}|6(?:011|5\d{2}))[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{3,4}\b"
);

// ── IPv4 ───────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── IPv6 (full form) ──────────────────────────────────────────────────────
pii_pattern!(RE_IPV6, r"\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b");

// ── URL ────────────────────────────────────────────────────────────────────
pii_pattern!(RE_URL, r"https?://[^\s<>]+");

// ── Date (US formats, MM/DD/YYYY and MM-DD-YYYY) ──────────────────────────
pii_pattern!(
    RE_DATE,
    r"\b(?:0?[1-9]|1[0-2])[/\-](?:0?[1-9]|[12]\d|3[01])[/\-](?:19|20)\d{2}\b"
);

// ── IBAN ───────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_IBAN,
    r"\b[A-Z]{2}\d{2}[A-Z0-9]{4}\d{7}(?:[A-Z0-9]?\d{0,16})\b"
);

// ── US Passport ────────────────────────────────────────────────────────────
pii_pattern!(RE_PASSPORT, r"\b[A-Z]\d{8}\b");

// ── US Driver's License (generic pattern) ──────────────────────────────────
pii_pattern!(RE_DRIVERS_LICENSE, r"\b[A-Z]\d{7,14}\b");

// ── Bitcoin address ────────────────────────────────────────────────────────
pii_pattern!(RE_CRYPTO, r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b");

/// All PII patterns in detection order (most specific first so the
/// earliest-longest overlap rule favors the tighter match).
pub fn all_patterns() -> Vec<PiiPattern> {
    vec![
        PiiPattern {
            name: "email",
            regex: &RE_EMAIL,
            label: "EMAIL_ADDRESS",
        },
        PiiPattern {
            name: "url",
            regex: &RE_URL,
            label: "URL",
        },
        PiiPattern {
            name: "ssn",
            regex: &RE_SSN,
            label: "US_SSN",
        },
        PiiPattern {
            name: "credit_card",
            regex: &RE_CREDIT_CARD,
            label: "CREDIT_CARD",
        },
        PiiPattern {
            name: "iban",
            regex: &RE_IBAN,
            label: "IBAN_CODE",
        },
        PiiPattern {
            name: "ipv6",
            regex: &RE_IPV6,
            label: "IP_ADDRESS",
        },
        PiiPattern {
            name: "ipv4",
            regex: &RE_IPV4,
            label: "IP_ADDRESS",
        },
        PiiPattern {
            name: "phone",
            regex: &RE_PHONE,
            label: "PHONE_NUMBER",
        },
        PiiPattern {
            name: "date",
            regex: &RE_DATE,
            label: "DATE_TIME",
        },
        PiiPattern {
            name: "crypto",
            regex: &RE_CRYPTO,
            label: "CRYPTO",
        },
        PiiPattern {
            name: "passport",
            regex: &RE_PASSPORT,
            label: "US_PASSPORT",
        },
        PiiPattern {
            name: "drivers_license",
            regex: &RE_DRIVERS_LICENSE,
            label: "US_DRIVER_LICENSE",
        },
    ]
}
