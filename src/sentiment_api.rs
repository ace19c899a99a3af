//! Client for the remote sentiment-analysis service.
//!
//! Two endpoints: a write (`POST /comentario`) that classifies one comment
//! and a read (`GET /insights`) that returns aggregate counts plus a
//! free-text summary. Field names on the wire are the service's own.

use serde::{Deserialize, Serialize};

use crate::http_client;

/// Route of the comment-classification endpoint, relative to the base URL.
pub const COMMENT_ROUTE: &str = "/comentario";
/// Route of the aggregate-statistics endpoint, relative to the base URL.
pub const INSIGHTS_ROUTE: &str = "/insights";

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// JSON body for the comment-classification endpoint.
///
/// `genero` carries the service's single-letter code: `"M"` or `"H"`.
#[derive(Clone, Debug, Serialize)]
pub struct CommentPayload {
    pub nombre: String,
    pub genero: String,
    pub comentario: String,
}

/// Where the write endpoint nests its classification label.
///
/// The observed deployment wraps it (`{"data":{"sentimiento":"…"}}`) while
/// the insights endpoint is flat; the wrapping is deployment configuration,
/// so both shapes are supported and selected via config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentEnvelope {
    /// Label at `data.sentimiento`.
    #[default]
    Nested,
    /// Label at top-level `sentimiento`.
    Flat,
}

/// Aggregate statistics snapshot returned by the insights endpoint.
///
/// Wholesale-replaced on every successful fetch; never merged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub male: u64,
    pub female: u64,
    pub insights: String,
}

impl StatsSnapshot {
    /// Sentiment counts in fixed chart order: positive, negative, neutral.
    pub fn sentiment_series(&self) -> [u64; 3] {
        [self.positive, self.negative, self.neutral]
    }

    /// Gender counts in fixed chart order: male, female.
    pub fn gender_series(&self) -> [u64; 2] {
        [self.male, self.female]
    }
}

/// Failures talking to the sentiment service.
///
/// Both endpoints share one error type: the dashboard reacts to every
/// variant the same way (log, generic user-facing message, keep state).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    BadRequest(String),
    #[error("Server error: {0}")]
    ServerError(String),
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Submit one comment for classification and return the sentiment label.
pub fn submit_comment(
    base_url: &str,
    envelope: SentimentEnvelope,
    payload: &CommentPayload,
) -> Result<String, ServiceError> {
    let url = endpoint(base_url, COMMENT_ROUTE);
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json");

    let response = match request.send_json(payload) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body(response).unwrap_or_else(|err| err.to_string());
            return Err(map_status_error(code, body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ServiceError::Transport(err.to_string()));
        }
    };

    let body = read_body(response).map_err(|err| ServiceError::Malformed(err.to_string()))?;
    parse_sentiment(&body, envelope)
}

/// Fetch the aggregate statistics snapshot.
pub fn fetch_insights(base_url: &str) -> Result<StatsSnapshot, ServiceError> {
    let url = endpoint(base_url, INSIGHTS_ROUTE);
    let response = match http_client::agent()
        .get(&url)
        .set("Accept", "application/json")
        .call()
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body(response).unwrap_or_else(|err| err.to_string());
            return Err(map_status_error(code, body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ServiceError::Transport(err.to_string()));
        }
    };

    let body = read_body(response).map_err(|err| ServiceError::Malformed(err.to_string()))?;
    parse_insights(&body)
}

fn endpoint(base_url: &str, route: &str) -> String {
    format!("{}{route}", base_url.trim_end_matches('/'))
}

fn read_body(response: ureq::Response) -> Result<String, std::io::Error> {
    http_client::read_body_limited(response, MAX_RESPONSE_BYTES)
}

fn map_status_error(code: u16, body: String) -> ServiceError {
    match code {
        400..=499 => ServiceError::BadRequest(format!("HTTP {code}: {body}")),
        500..=599 => ServiceError::ServerError(format!("HTTP {code}: {body}")),
        _ => ServiceError::Transport(format!("HTTP {code}: {body}")),
    }
}

#[derive(Debug, Deserialize)]
struct SentimentWire {
    data: Option<SentimentData>,
    sentimiento: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentimentData {
    sentimiento: Option<String>,
}

fn parse_sentiment(body: &str, envelope: SentimentEnvelope) -> Result<String, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Malformed("Empty response body".to_string()));
    }
    let parsed: SentimentWire = serde_json::from_str(trimmed)
        .map_err(|err| ServiceError::Malformed(format!("{err}: {trimmed}")))?;

    let label = match envelope {
        SentimentEnvelope::Nested => parsed.data.and_then(|data| data.sentimiento),
        SentimentEnvelope::Flat => parsed.sentimiento,
    };
    match label.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => Ok(label.to_string()),
        _ => Err(ServiceError::Malformed(format!(
            "Missing sentiment label for {envelope:?} envelope: {trimmed}"
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct InsightsWire {
    positivos: u64,
    negativos: u64,
    neutros: u64,
    hombres: u64,
    mujeres: u64,
    #[serde(default)]
    insights: String,
}

fn parse_insights(body: &str) -> Result<StatsSnapshot, ServiceError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Malformed("Empty response body".to_string()));
    }
    let wire: InsightsWire = serde_json::from_str(trimmed)
        .map_err(|err| ServiceError::Malformed(format!("{err}: {trimmed}")))?;
    Ok(StatsSnapshot {
        positive: wire.positivos,
        negative: wire.negativos,
        neutral: wire.neutros,
        male: wire.hombres,
        female: wire.mujeres,
        insights: wire.insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::tests::serve_once;

    #[test]
    fn endpoint_joins_without_doubling_slashes() {
        assert_eq!(
            endpoint("http://localhost:4000/api/", COMMENT_ROUTE),
            "http://localhost:4000/api/comentario"
        );
        assert_eq!(
            endpoint("http://localhost:4000/api", INSIGHTS_ROUTE),
            "http://localhost:4000/api/insights"
        );
    }

    #[test]
    fn parses_nested_sentiment_label() {
        let body = r#"{ "data": { "sentimiento": "positivo" } }"#;
        let label = parse_sentiment(body, SentimentEnvelope::Nested).unwrap();
        assert_eq!(label, "positivo");
    }

    #[test]
    fn parses_flat_sentiment_label() {
        let body = r#"{ "sentimiento": "negativo" }"#;
        let label = parse_sentiment(body, SentimentEnvelope::Flat).unwrap();
        assert_eq!(label, "negativo");
    }

    #[test]
    fn envelope_mismatch_is_malformed() {
        let body = r#"{ "sentimiento": "neutro" }"#;
        let err = parse_sentiment(body, SentimentEnvelope::Nested).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }

    #[test]
    fn blank_label_is_malformed() {
        let body = r#"{ "data": { "sentimiento": "  " } }"#;
        let err = parse_sentiment(body, SentimentEnvelope::Nested).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }

    #[test]
    fn parses_insights_counts_in_order() {
        let body = r#"{
            "positivos": 5, "negativos": 2, "neutros": 3,
            "hombres": 4, "mujeres": 6,
            "insights": "La mayoría de los comentarios son positivos."
        }"#;
        let snapshot = parse_insights(body).unwrap();
        assert_eq!(snapshot.sentiment_series(), [5, 2, 3]);
        assert_eq!(snapshot.gender_series(), [4, 6]);
        assert!(snapshot.insights.starts_with("La mayoría"));
    }

    #[test]
    fn insights_summary_text_is_optional() {
        let body = r#"{ "positivos": 0, "negativos": 0, "neutros": 0, "hombres": 0, "mujeres": 0 }"#;
        let snapshot = parse_insights(body).unwrap();
        assert_eq!(snapshot, StatsSnapshot::default());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let body = r#"{ "positivos": -1, "negativos": 0, "neutros": 0, "hombres": 0, "mujeres": 0 }"#;
        let err = parse_insights(body).unwrap_err();
        assert!(matches!(err, ServiceError::Malformed(_)));
    }

    #[test]
    fn status_codes_map_onto_error_kinds() {
        assert!(matches!(
            map_status_error(400, String::new()),
            ServiceError::BadRequest(_)
        ));
        assert!(matches!(
            map_status_error(503, String::new()),
            ServiceError::ServerError(_)
        ));
        assert!(matches!(
            map_status_error(301, String::new()),
            ServiceError::Transport(_)
        ));
    }

    #[test]
    fn submit_comment_round_trips_against_local_server() {
        let body = r#"{ "data": { "sentimiento": "positivo" } }"#;
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let payload = CommentPayload {
            nombre: "Ana".to_string(),
            genero: "M".to_string(),
            comentario: "Me encanta la maestría".to_string(),
        };
        let label = submit_comment(&url, SentimentEnvelope::Nested, &payload).unwrap();
        assert_eq!(label, "positivo");
    }

    #[test]
    fn submit_comment_maps_server_failure() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\n\r\noops".to_string(),
        );
        let payload = CommentPayload {
            nombre: String::new(),
            genero: "M".to_string(),
            comentario: "hola".to_string(),
        };
        let err = submit_comment(&url, SentimentEnvelope::Nested, &payload).unwrap_err();
        assert!(matches!(err, ServiceError::ServerError(_)));
    }

    #[test]
    fn fetch_insights_round_trips_against_local_server() {
        let body = r#"{"positivos":5,"negativos":2,"neutros":3,"hombres":4,"mujeres":6,"insights":"ok"}"#;
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let snapshot = fetch_insights(&url).unwrap();
        assert_eq!(snapshot.sentiment_series(), [5, 2, 3]);
        assert_eq!(snapshot.insights, "ok");
    }
}
