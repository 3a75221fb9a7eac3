use std::fmt::{self, Display};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpVersion {
    Http10,
    #[default]
    Http11,
}

impl HttpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::Http10 => "HTTP/1.0",
            HttpVersion::Http11 => "HTTP/1.1",
        }
    }
}

/// What the listener in front of us knows about the request a job came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestInfo {
    pub id: u64,
    pub version: HttpVersion,
    pub keep_alive: bool,
}

impl RequestInfo {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            version: HttpVersion::Http11,
            keep_alive: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub code: u16,
    pub message: &'static str,
    pub body: String,
    pub headers: Vec<(String, String)>,
    version: HttpVersion,
}

impl HttpResponse {
    pub fn new(code: u16, message: &'static str, body: String) -> Self {
        Self {
            code,
            message,
            body,
            headers: Vec::new(),
            version: HttpVersion::default(),
        }
    }

    pub fn ok_json(body: String) -> Self {
        Self::new(200, "OK", body).with_header("Content-type", JSON_CONTENT_TYPE)
    }

    pub fn bad_request(body: String) -> Self {
        Self::new(400, "Bad Request", body)
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn version(&self) -> HttpVersion {
        self.version
    }

    /// Answer in the same protocol version as the request and say so when
    /// the connection handling differs from that version's default.
    pub fn apply_info(&mut self, info: &RequestInfo) {
        self.version = info.version;
        match (info.version, info.keep_alive) {
            (HttpVersion::Http10, true) => {
                self.headers.push(("Connection".into(), "Keep-Alive".into()))
            }
            (HttpVersion::Http11, false) => {
                self.headers.push(("Connection".into(), "Close".into()))
            }
            _ => {}
        }
    }
}

impl Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}\r\n", self.version.as_str(), self.code, self.message)?;
        for (name, value) in &self.headers {
            write!(f, "{name}: {value}\r\n")?;
        }
        write!(f, "Content-Length: {}\r\n\r\n{}", self.body.len(), self.body)
    }
}

/// What a worker hands back to the loopback. `intermediate` would mean the
/// messages go on to another stage instead of the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkResult {
    pub intermediate: bool,
    pub messages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_json_response() {
        let mut response = HttpResponse::ok_json("{\"a\":1}".to_owned());
        response.apply_info(&RequestInfo::new(7));

        assert_eq!(
            "HTTP/1.1 200 OK\r\nContent-type: application/json;charset=utf-8\r\nContent-Length: 7\r\n\r\n{\"a\":1}",
            response.to_string()
        );
    }

    #[test]
    fn renders_bad_request() {
        let mut response = HttpResponse::bad_request("nope".to_owned());
        response.apply_info(&RequestInfo {
            id: 1,
            version: HttpVersion::Http11,
            keep_alive: false,
        });

        assert_eq!(
            "HTTP/1.1 400 Bad Request\r\nConnection: Close\r\nContent-Length: 4\r\n\r\nnope",
            response.to_string()
        );
    }

    #[test]
    fn keeps_http_1_0_alive_explicitly() {
        let mut response = HttpResponse::bad_request(String::new());
        response.apply_info(&RequestInfo {
            id: 1,
            version: HttpVersion::Http10,
            keep_alive: true,
        });

        assert_eq!(HttpVersion::Http10, response.version());
        assert_eq!(Some("Keep-Alive"), response.header("connection"));
        assert!(response.to_string().starts_with("HTTP/1.0 400 Bad Request\r\n"));
    }
}
