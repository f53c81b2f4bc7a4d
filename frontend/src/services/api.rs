//! HTTP service for fetching the record array from the backend.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, FinancialRecord};

/// Fetch the full record array from `GET {backend_url}/api/data`.
///
/// One shot, no retry. A non-success status or transport failure becomes
/// an [`AppError::Network`]; an undecodable body becomes
/// [`AppError::Decode`].
pub async fn fetch_records(backend_url: &str) -> AppResult<Vec<FinancialRecord>> {
    let url = format!("{}/api/data", backend_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Network(format!(
            "server returned status {}. Is the backend running?",
            response.status()
        )));
    }

    response
        .json::<Vec<FinancialRecord>>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::types::FinancialRecord;

    #[test]
    fn test_response_array_deserialization() {
        let json = r#"[
            {"Company":"HCL Technologies Ltd.","Metric":"SALES","Year":2022,"Value":1250.0},
            {"Company":"HCL Technologies Ltd.","Metric":"SALES","Year":2023,"Value":null}
        ]"#;

        let records: Vec<FinancialRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].value, Some(1250.0));
        assert_eq!(records[1].value, None);
    }
}
