//! Data sources for the education dataset.
//!
//! The view only knows the [`EducationSource`] trait. Two implementations are
//! provided: a blocking HTTP GET and a local JSON file, selected from the
//! configured endpoint by [`Endpoint::resolve`].

use crate::error::{ConfigError, FetchError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Something that can produce the raw education response body.
///
/// `fetch` is called exactly once per view mount, off the UI thread.
pub trait EducationSource: Send {
    /// Human readable endpoint identifier, used in logs and the status bar.
    fn endpoint(&self) -> &str;

    /// Performs the request and parses the body as JSON.
    fn fetch(&self) -> Result<Value, FetchError>;
}

/// Boxed source, the form handed to the loader thread.
pub type DynEducationSource = Box<dyn EducationSource>;

/// A resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Http(String),
    File(PathBuf),
}

impl Endpoint {
    /// Resolves a configured endpoint string.
    ///
    /// `http://` and `https://` URLs are fetched over the network. A relative
    /// endpoint is joined onto `base_url` when one is configured, otherwise it
    /// is read from disk. `file://` URLs are read from disk.
    pub fn resolve(raw: &str, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let raw = raw.trim();

        if is_http(raw) {
            return Ok(Endpoint::Http(raw.to_string()));
        }
        if let Some(path) = raw.strip_prefix("file://") {
            return Ok(Endpoint::File(PathBuf::from(path)));
        }

        match base_url {
            Some(base) if !base.trim().is_empty() => {
                let base = base.trim();
                let invalid = |reason: String| ConfigError::InvalidBaseUrl {
                    url: base.to_string(),
                    reason,
                };
                let parsed = reqwest::Url::parse(base).map_err(|e| invalid(e.to_string()))?;
                let joined = parsed.join(raw).map_err(|e| invalid(e.to_string()))?;
                match joined.scheme() {
                    "http" | "https" => Ok(Endpoint::Http(joined.to_string())),
                    "file" => joined
                        .to_file_path()
                        .map(Endpoint::File)
                        .map_err(|_| invalid("not a local path".to_string())),
                    other => Err(invalid(format!("unsupported scheme {other}"))),
                }
            }
            _ => Ok(Endpoint::File(PathBuf::from(raw))),
        }
    }

    /// Builds the source that fetches this endpoint.
    pub fn into_source(self) -> DynEducationSource {
        match self {
            Endpoint::Http(url) => Box::new(HttpSource::new(url)),
            Endpoint::File(path) => Box::new(FileSource::new(path)),
        }
    }
}

/// Resolves an icon `src` the way a page served from `endpoint` would.
///
/// Absolute URIs pass through. Relative sources are joined onto an HTTP
/// endpoint, or onto a file endpoint's directory as a `file://` URI.
pub fn icon_uri(endpoint: &str, src: &str) -> String {
    if src.is_empty() || src.contains("://") || src.starts_with("data:") {
        return src.to_string();
    }

    if is_http(endpoint) {
        return match reqwest::Url::parse(endpoint).and_then(|base| base.join(src)) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("cannot resolve icon {:?} against {}: {}", src, endpoint, e);
                src.to_string()
            }
        };
    }

    let base = Path::new(endpoint.strip_prefix("file://").unwrap_or(endpoint));
    let path = match base.parent() {
        Some(dir) => dir.join(src),
        None => PathBuf::from(src),
    };
    let path = std::path::absolute(&path).unwrap_or(path);
    format!("file://{}", path.display())
}

fn is_http(raw: &str) -> bool {
    let lower = raw.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetches the dataset with a single GET request.
///
/// No timeout and no retry: a request that never answers keeps the view
/// loading.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl EducationSource for HttpSource {
    fn endpoint(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Value, FetchError> {
        let http_err = |source| FetchError::Http {
            url: self.url.clone(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(http_err)?;
        let response = client.get(&self.url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} returned {}, parsing body anyway", self.url, status);
        }

        let body = response.bytes().map_err(http_err)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Json {
            endpoint: self.url.clone(),
            source,
        })
    }
}

/// Reads the dataset from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

impl EducationSource for FileSource {
    fn endpoint(&self) -> &str {
        &self.display
    }

    fn fetch(&self) -> Result<Value, FetchError> {
        let bytes = fs::read(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Json {
            endpoint: self.display.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_resolve_http() {
        let endpoint = Endpoint::resolve("https://example.com/profile/education.json", None).unwrap();
        assert_eq!(endpoint, Endpoint::Http("https://example.com/profile/education.json".into()));
    }

    #[test]
    fn test_resolve_relative_without_base_is_file() {
        let endpoint = Endpoint::resolve("profile/education.json", None).unwrap();
        assert_eq!(endpoint, Endpoint::File(PathBuf::from("profile/education.json")));

        let endpoint = Endpoint::resolve("profile/education.json", Some("  ")).unwrap();
        assert_eq!(endpoint, Endpoint::File(PathBuf::from("profile/education.json")));
    }

    #[test]
    fn test_resolve_relative_with_base() {
        let endpoint = Endpoint::resolve("profile/education.json", Some("https://me.dev/site/")).unwrap();
        assert_eq!(endpoint, Endpoint::Http("https://me.dev/site/profile/education.json".into()));
    }

    #[test]
    fn test_resolve_file_url() {
        let endpoint = Endpoint::resolve("file:///tmp/education.json", None).unwrap();
        assert_eq!(endpoint, Endpoint::File(PathBuf::from("/tmp/education.json")));
    }

    #[test]
    fn test_resolve_bad_base() {
        let err = Endpoint::resolve("education.json", Some("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_icon_uri_resolution() {
        assert_eq!(icon_uri("https://me.dev/profile/education.json", "img/uni.png"), "https://me.dev/profile/img/uni.png");
        assert_eq!(icon_uri("https://me.dev/profile/education.json", "/logo.png"), "https://me.dev/logo.png");
        assert_eq!(icon_uri("/srv/profile/education.json", "https://cdn.dev/a.png"), "https://cdn.dev/a.png");
        assert_eq!(icon_uri("/srv/profile/education.json", "uni.png"), "file:///srv/profile/uni.png");
        assert_eq!(icon_uri("/srv/profile/education.json", ""), "");
    }

    #[test]
    fn test_file_source_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"education": [{{"title": "2019"}}]}}"#).unwrap();

        let source = FileSource::new(file.path());
        let body = source.fetch().unwrap();
        assert_eq!(body["education"][0]["title"], "2019");
    }

    #[test]
    fn test_file_source_errors() {
        let missing = FileSource::new("/definitely/not/here/education.json");
        assert!(matches!(missing.fetch(), Err(FetchError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html>not json</html>").unwrap();
        let garbage = FileSource::new(file.path());
        assert!(matches!(garbage.fetch(), Err(FetchError::Json { .. })));
    }
}
