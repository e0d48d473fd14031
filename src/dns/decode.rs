//! Record data to text conversion.

use hickory_resolver::proto::rr::RData;

/// Renders one answer record as report text.
///
/// - A/AAAA/CNAME/PTR: address or name, root-label dots stripped
/// - TXT: character-strings decoded as UTF-8 and concatenated
/// - MX: the exchange host name only, dots stripped
/// - anything else: the record's presentation form, dots stripped
pub fn record_text(rdata: &RData) -> String {
    match rdata {
        RData::A(a) => trim_root(&a.to_string()),
        RData::AAAA(aaaa) => trim_root(&aaaa.to_string()),
        RData::CNAME(cname) => trim_root(&cname.to_string()),
        RData::PTR(ptr) => trim_root(&ptr.to_string()),
        RData::TXT(txt) => txt
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk))
            .collect::<String>(),
        RData::MX(mx) => trim_root(&mx.exchange().to_string()),
        other => trim_root(&other.to_string()),
    }
}

/// Strips leading and trailing `.` characters.
pub fn trim_root(text: &str) -> String {
    text.trim_matches('.').to_string()
}

/// Makes `name` fully qualified so resolver search domains are never appended.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
