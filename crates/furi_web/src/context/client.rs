//! Client context for communicating with the backend.

use crate::error::{WebError, WebResult};
use furi_api::{response as res, ALL_RECORDS_PATH};

#[derive(Clone, Copy, Default)]
pub struct Client {}

impl Client {
    pub fn new() -> Self {
        Self {}
    }
}

/// API methods
impl Client {
    pub async fn all_records(&self) -> WebResult<res::AllRecords> {
        tracing::info!("Fetching all records");

        let res = reqwasm::http::Request::post(ALL_RECORDS_PATH)
            .send()
            .await
            .map_err(WebError::from)?;
        let status = res.status();
        let bytes = res.binary().await.map_err(WebError::from)?;
        let records = decode_records(status, &bytes)?;

        tracing::info!("Fetched {} records", records.len());
        Ok(records)
    }
}

/// Interprets an `/api/all` response.
///
/// Only 200 counts as success, everything else is reported as an error.
/// A body that isn't an array of records is an error as well, even if only one record is off.
pub fn decode_records(status: u16, body: &[u8]) -> WebResult<res::AllRecords> {
    match status {
        200 => {
            let records = serde_json::from_slice::<res::AllRecords>(body)
                .map_err(|err| eyre::eyre!("Invalid response body: {err}"))?;
            Ok(records)
        }
        code => {
            let body = match serde_json::from_slice::<res::Error>(body) {
                Ok(error) => error.message.into(),
                Err(_) => String::from_utf8_lossy(body),
            };
            Err(eyre::eyre!("Request failed: HTTP {code} {body}").into())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use furi_core::FuriganaRecord;

    #[test]
    fn decodes_ok_response() {
        let body = r#"[{"word":"日","furigana":"にち","meaning":"day","note":"","ruby":"<ruby>日<rt>にち</rt></ruby>"}]"#;
        let records = decode_records(200, body.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![FuriganaRecord::new(
                "日",
                "にち",
                "day",
                "",
                "<ruby>日<rt>にち</rt></ruby>"
            )]
        );
    }

    #[test]
    fn decodes_empty_array() {
        let records = decode_records(200, b"[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn fails_on_server_error() {
        let body = br#"{"message":"database unavailable"}"#;
        let err = decode_records(500, body).unwrap_err();
        assert_eq!(
            err.message,
            "Request failed: HTTP 500 database unavailable"
        );
    }

    #[test]
    fn fails_on_other_success_codes() {
        assert!(decode_records(204, b"").is_err());
        assert!(decode_records(201, b"[]").is_err());
    }

    #[test]
    fn decodes_null_fields_as_empty() {
        let body = r#"[{"word":"日","furigana":"にち","meaning":null,"note":null,"ruby":""}]"#;
        let records = decode_records(200, body.as_bytes()).unwrap();
        assert_eq!(records, vec![FuriganaRecord::new("日", "にち", "", "", "")]);
    }

    #[test]
    fn fails_on_malformed_body() {
        assert!(decode_records(200, b"not json").is_err());
        assert!(decode_records(200, r#"{"word":"日"}"#.as_bytes()).is_err());
    }
}
