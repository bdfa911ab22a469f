//! CSV row codec
//!
//! Maps a [`Contact`] to and from one eight-column CSV record.

use chrono::{DateTime, SecondsFormat, Utc};
use csv::StringRecord;

use crate::contact::Contact;
use crate::error::{AddressBookError, Result};

/// Fixed header row, also the column order of every data row
pub const HEADER: [&str; 8] = [
    "ID",
    "FirstName",
    "LastName",
    "Email",
    "Phone",
    "Address",
    "CreatedAt",
    "UpdatedAt",
];

/// Columns per row
pub const FIELD_COUNT: usize = HEADER.len();

/// Render a timestamp as RFC 3339 UTC with as many fractional digits as needed
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an RFC 3339 timestamp with any offset, normalized to UTC
pub fn parse_timestamp(raw: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

/// Encode a contact as a row in [`HEADER`] order
pub fn encode_record(contact: &Contact) -> [String; FIELD_COUNT] {
    [
        contact.id.clone(),
        contact.first_name.clone(),
        contact.last_name.clone(),
        contact.email.clone(),
        contact.phone.clone(),
        contact.address.clone(),
        format_timestamp(contact.created_at),
        format_timestamp(contact.updated_at),
    ]
}

/// Decode a row in [`HEADER`] order
///
/// Fails with `MalformedRecord` on a wrong column count, an unparsable
/// timestamp, an empty ID or `UpdatedAt < CreatedAt`.
pub fn decode_record(record: &StringRecord) -> Result<Contact> {
    if record.len() != FIELD_COUNT {
        return Err(AddressBookError::malformed(format!(
            "expected {} fields, found {}{}",
            FIELD_COUNT,
            record.len(),
            line_suffix(record)
        )));
    }

    let field = |i: usize| record.get(i).unwrap_or_default().to_string();
    let id = field(0);

    let timestamp = |i: usize, column: &str| {
        let raw = record.get(i).unwrap_or_default();
        parse_timestamp(raw).map_err(|e| {
            AddressBookError::malformed(format!(
                "failed to parse {} {:?} for contact {}: {}{}",
                column,
                raw,
                id,
                e,
                line_suffix(record)
            ))
        })
    };

    let created_at = timestamp(6, "CreatedAt")?;
    let updated_at = timestamp(7, "UpdatedAt")?;

    let contact = Contact {
        id: id.clone(),
        first_name: field(1),
        last_name: field(2),
        email: field(3),
        phone: field(4),
        address: field(5),
        created_at,
        updated_at,
    };
    contact.check_invariants()?;

    Ok(contact)
}

fn line_suffix(record: &StringRecord) -> String {
    record
        .position()
        .map(|pos| format!(" (line {})", pos.line()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_keeps_sub_second_precision() {
        let now = Utc::now();
        let text = format_timestamp(now);
        assert!(text.ends_with('Z'));
        assert_eq!(parse_timestamp(&text).unwrap(), now);
    }

    #[test]
    fn offset_timestamps_are_normalized() {
        let parsed = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(format_timestamp(parsed), "2024-01-01T10:00:00Z");
    }

    #[test]
    fn decode_rejects_short_row() {
        let record = StringRecord::from(vec!["id", "a", "b"]);
        let err = decode_record(&record).unwrap_err();
        assert!(err.to_string().contains("expected 8 fields, found 3"));
    }

    #[test]
    fn decode_names_the_bad_column() {
        let record = StringRecord::from(vec![
            "x-1",
            "A",
            "B",
            "",
            "",
            "",
            "2024-01-01T00:00:00Z",
            "yesterday",
        ]);
        let err = decode_record(&record).unwrap_err();
        assert!(matches!(err, AddressBookError::MalformedRecord(_)));
        assert!(err.to_string().contains("UpdatedAt"));
    }
}
