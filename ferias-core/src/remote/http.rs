//! HTTP client for the vacation service.
//!
//! - `GET  {api_url}/ferias` lists records
//! - `POST {api_url}/ferias` creates one and echoes it back with its id

use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use super::VacationService;
use crate::config::FeriasConfig;
use crate::constants::VACATIONS_PATH;
use crate::error::{FeriasError, FeriasResult};
use crate::record::{NewVacation, VacationRecord};

pub struct HttpVacationService {
    http: reqwest::Client,
    vacations_url: Url,
}

impl HttpVacationService {
    pub fn new(config: &FeriasConfig) -> FeriasResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(HttpVacationService {
            http,
            vacations_url: vacations_url(&config.api_url)?,
        })
    }

    pub fn vacations_url(&self) -> &Url {
        &self.vacations_url
    }
}

impl VacationService for HttpVacationService {
    async fn list(&self) -> FeriasResult<Vec<VacationRecord>> {
        let resp = self.http.get(self.vacations_url.clone()).send().await?;
        decode(resp).await
    }

    async fn create(&self, vacation: &NewVacation) -> FeriasResult<VacationRecord> {
        let resp = self
            .http
            .post(self.vacations_url.clone())
            .json(vacation)
            .send()
            .await?;
        decode(resp).await
    }
}

/// `{api_url}/ferias`, whether or not `api_url` ends with a slash.
fn vacations_url(api_url: &str) -> FeriasResult<Url> {
    let mut base =
        Url::parse(api_url).map_err(|e| FeriasError::Config(format!("Invalid api_url: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(VACATIONS_PATH)
        .map_err(|e| FeriasError::Config(format!("Invalid api_url: {e}")))
}

/// Check the status and decode the JSON body.
async fn decode<T: DeserializeOwned>(resp: Response) -> FeriasResult<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(FeriasError::Status {
            status: status.as_u16(),
            message: body,
        });
    }

    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> FeriasResult<T> {
    serde_json::from_str(body).map_err(|e| FeriasError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vacations_url_with_and_without_trailing_slash() {
        assert_eq!(
            vacations_url("https://example.com").unwrap().as_str(),
            "https://example.com/ferias"
        );
        assert_eq!(
            vacations_url("https://example.com/api/").unwrap().as_str(),
            "https://example.com/api/ferias"
        );
        assert_eq!(
            vacations_url("https://example.com/api").unwrap().as_str(),
            "https://example.com/api/ferias"
        );
    }

    #[test]
    fn test_vacations_url_rejects_garbage() {
        assert!(matches!(
            vacations_url("::not a url"),
            Err(FeriasError::Config(_))
        ));
    }

    #[test]
    fn test_decode_list_body() {
        let body = r#"[
            {"id":"1","name":"Ana","startDate":"2024-05-01","returnDate":"2024-05-03"},
            {"id":"2","name":"Bruno","startDate":"2024-06-10","returnDate":"2024-06-20"}
        ]"#;
        let records: Vec<VacationRecord> = decode_body(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].employee_name, "Bruno");
    }

    #[test]
    fn test_decode_malformed_body_is_serialization_error() {
        let result: FeriasResult<Vec<VacationRecord>> = decode_body("<html>oops</html>");
        assert!(matches!(result, Err(FeriasError::Serialization(_))));
    }

    #[test]
    fn test_new_uses_config_url() {
        let config = FeriasConfig {
            api_url: "http://localhost:3000".into(),
            ..FeriasConfig::default()
        };
        let service = HttpVacationService::new(&config).unwrap();
        assert_eq!(service.vacations_url().as_str(), "http://localhost:3000/ferias");
    }
}
