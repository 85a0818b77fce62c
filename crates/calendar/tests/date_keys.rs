use khayyam_calendar::{CalendarDate, CalendarError, CalendarView, key};
use serde::Deserialize;

#[test]
fn keys_are_view_independent() {
    let from_jalali = CalendarDate::from_jalali(1403, 1, 1).unwrap();
    let from_gregorian = CalendarDate::from_gregorian(2024, 3, 20).unwrap();
    let from_key = CalendarDate::from_date_key("2024-03-20").unwrap();

    assert_eq!(from_jalali.date_key(), "2024-03-20");
    assert_eq!(from_gregorian.date_key(), "2024-03-20");
    assert_eq!(from_key, from_jalali);
}

#[test]
fn encode_decode_roundtrip() {
    let mut dates = vec![
        CalendarDate::from_jalali(1, 1, 1).unwrap(),
        CalendarDate::from_jalali(1357, 11, 22).unwrap(),
        CalendarDate::from_jalali(1403, 12, 30).unwrap(),
        CalendarDate::from_jalali(3177, 12, 29).unwrap(),
    ];
    for month in 1..=12u8 {
        dates.push(CalendarDate::from_jalali(1403, month, 1).unwrap());
    }
    for date in dates {
        let encoded = key::encode(date);
        let decoded = key::decode(&encoded).unwrap();
        assert_eq!(decoded.jdn(), date.jdn(), "roundtrip failed for {encoded}");
    }
}

#[test]
fn keys_sort_chronologically() {
    // Every in-window key has a four-digit year, so string order is
    // date order.
    let days = [
        CalendarDate::from_gregorian(622, 3, 22).unwrap(),
        CalendarDate::from_gregorian(1979, 2, 11).unwrap(),
        CalendarDate::from_gregorian(2024, 3, 20).unwrap(),
        CalendarDate::from_gregorian(2024, 3, 21).unwrap(),
        CalendarDate::from_gregorian(3799, 3, 19).unwrap(),
    ];
    let keys: Vec<String> = days.iter().map(|date| date.date_key()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn decode_rejects_bad_shapes() {
    for bad in ["", "2024", "2024-03", "2024-03-20-01", "2024/03/20", "-2024-03-20"] {
        assert_eq!(
            CalendarDate::from_date_key(bad).unwrap_err(),
            CalendarError::MalformedKey {
                key: bad.to_string(),
                reason: "expected three dash-separated fields".to_string(),
            },
            "key {bad:?} should fail on shape"
        );
    }
}

#[test]
fn decode_rejects_bad_numbers() {
    assert_eq!(
        CalendarDate::from_date_key("20x4-03-20").unwrap_err(),
        CalendarError::MalformedKey {
            key: "20x4-03-20".to_string(),
            reason: "year is not a valid number".to_string(),
        }
    );
    assert!(CalendarDate::from_date_key("2024-۳-20").is_err());
    assert!(CalendarDate::from_date_key("2024-03-20 ").is_err());
}

#[test]
fn decode_rejects_invalid_and_out_of_window_dates() {
    let invalid = CalendarDate::from_date_key("2024-02-30").unwrap_err();
    assert!(matches!(invalid, CalendarError::MalformedKey { .. }));
    assert!(invalid.to_string().contains("invalid day"));

    let out_of_window = CalendarDate::from_date_key("0100-01-01").unwrap_err();
    assert!(matches!(out_of_window, CalendarError::MalformedKey { .. }));
    assert!(out_of_window.to_string().contains("outside supported range"));
}

#[test]
fn dates_embed_in_documents_as_keys() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Note {
        date: CalendarDate,
        text: String,
    }

    let note: Note =
        serde_json::from_str(r#"{ "date": "2024-03-20", "text": "tahvil" }"#).unwrap();
    assert_eq!(note.date.ymd(CalendarView::Jalali), (1403, 1, 1));

    let serialized = serde_json::to_string(&note.date).unwrap();
    assert_eq!(serialized, "\"2024-03-20\"");

    let err = serde_json::from_str::<Note>(r#"{ "date": "1403-13-01", "text": "" }"#).unwrap_err();
    assert!(err.to_string().contains("malformed date key"));
}
