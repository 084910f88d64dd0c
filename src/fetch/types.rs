//! Response types for the register API

use serde::Deserialize;
use serde_json::Value;

/// One page of the register, as returned by the API
///
/// `records_filtered` carries the total matching the date filter; only the
/// probe response's value is read. Records are opaque, the tool never
/// inspects their fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPage {
    /// Server-reported total for the current filter
    #[serde(rename = "recordsFiltered", default)]
    pub records_filtered: u64,
    /// Records in this page, in server order
    #[serde(default)]
    pub data: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_page_deserialize() {
        let page: ApiPage = serde_json::from_str(
            r#"{"recordsFiltered": 2500, "data": [{"sakId": 1}, {"sakId": 2}]}"#,
        )
        .unwrap();

        assert_eq!(page.records_filtered, 2500);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0]["sakId"], 1);
    }

    #[test]
    fn test_api_page_missing_fields_default() {
        let page: ApiPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.records_filtered, 0);
        assert!(page.data.is_empty());

        let page: ApiPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_api_page_ignores_unknown_fields() {
        let page: ApiPage = serde_json::from_str(
            r#"{"recordsFiltered": 1, "recordsTotal": 99, "draw": 0, "data": [{}]}"#,
        )
        .unwrap();
        assert_eq!(page.records_filtered, 1);
        assert_eq!(page.data.len(), 1);
    }
}
