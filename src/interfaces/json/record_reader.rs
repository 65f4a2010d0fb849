use crate::domain::record::BillingRecord;
use crate::error::{FragmentError, Result};
use std::io::Read;

/// Reads a JSON array of billing records.
///
/// The outer error covers input that is not a JSON array at all. Each element is
/// deserialized on its own, so one malformed record does not hide the others.
pub fn read_records<R: Read>(source: R) -> Result<Vec<Result<BillingRecord>>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(source)?;
    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(FragmentError::from))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expiry::ExpiryDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_records() {
        let data = r#"[
            {"first_name": "Ann", "expiry_date": [7, 23], "amount": 1.5},
            {"pan": "4111", "expiry_date": "07/2023"}
        ]"#;
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.expiry_date, Some(ExpiryDate::Pair(7, 23)));
        assert_eq!(first.amount, Some(dec!(1.5)));
        assert_eq!(records[1].as_ref().unwrap().pan.as_deref(), Some("4111"));
    }

    #[test]
    fn test_bad_element_does_not_hide_neighbours() {
        let data = r#"[{"first_name": "Ann"}, {"first_name": ["Bob"]}, {"first_name": "Cat"}]"#;
        let records = read_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().unwrap().first_name.as_deref(), Some("Ann"));
        assert!(matches!(records[1], Err(FragmentError::JsonError(_))));
        assert_eq!(records[2].as_ref().unwrap().first_name.as_deref(), Some("Cat"));
    }

    #[test]
    fn test_read_records_rejects_non_array() {
        let result = read_records(r#"{"first_name": "Ann"}"#.as_bytes());
        assert!(matches!(result, Err(FragmentError::JsonError(_))));
    }
}
