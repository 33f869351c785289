//! HTTP response envelope and status message table
//!
//! The shell's HTTP client never fails for an answered request. Every outcome
//! (success, error status, unreadable body, unreachable server) is folded into
//! an [`ApiResponse`] built by the pure constructors in this module.

use serde::Serialize;

/// Sentinel status for "no HTTP response at all" (DNS, refused, timeout).
///
/// Real HTTP statuses start at 100, so 0 can never collide with one.
pub const NETWORK_ERROR: u16 = 0;

/// Error text used when a 2xx body cannot be decoded into the expected type.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse response";

/// HTTP request methods supported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state result of an API call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A 2xx response whose body decoded successfully
    pub fn success(status: u16, data: T) -> Self {
        Self {
            ok: true,
            status,
            data: Some(data),
            error: None,
        }
    }

    /// A 2xx response whose body could not be decoded
    pub fn unparseable(status: u16) -> Self {
        Self {
            ok: true,
            status,
            data: None,
            error: Some(PARSE_ERROR_MESSAGE.to_string()),
        }
    }

    /// A non-2xx response
    pub fn http_error(status: u16) -> Self {
        Self {
            ok: false,
            status,
            data: None,
            error: Some(status_message(status)),
        }
    }

    /// The request never got an answer
    pub fn network_error(cause: &str) -> Self {
        Self {
            ok: false,
            status: NETWORK_ERROR,
            data: None,
            error: Some(format!("Network error: {cause}")),
        }
    }

    /// Consume the response, keeping the payload only when the call succeeded
    pub fn into_data(self) -> Option<T> {
        if self.ok {
            self.data
        } else {
            None
        }
    }

    /// Consume the response into the payload or the reason there is none
    pub fn into_result(self) -> Result<T, String> {
        match (self.ok, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| format!("Empty response (status {})", self.status))),
        }
    }

    pub fn is_network_error(&self) -> bool {
        self.status == NETWORK_ERROR
    }
}

const STATUS_MESSAGES: &[(u16, &str)] = &[
    (400, "Bad request"),
    (401, "Unauthorized, please sign in again"),
    (403, "Access to this resource is forbidden"),
    (404, "The requested resource was not found"),
    (405, "Request method not allowed"),
    (408, "The request timed out"),
    (409, "The request conflicts with the current state of the resource"),
    (422, "The request could not be processed"),
    (429, "Too many requests, please try again later"),
    (500, "Internal server error"),
    (502, "Bad gateway"),
    (503, "Service unavailable"),
    (504, "Gateway timeout"),
];

/// Look up the message for a status code
///
/// Unmapped statuses fall back to a generic templated message.
pub fn status_message(status: u16) -> String {
    STATUS_MESSAGES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("API request failed: {status}"))
}

/// Whether a status code is in the 2xx range
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Join a base URL and an endpoint path
///
/// The endpoint is appended verbatim, matching how endpoints are written
/// throughout the adapters (`/pokemon/25`, `/digimon?page=0&pageSize=20`).
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}
