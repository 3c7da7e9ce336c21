use folio::{
    classify, AppConfig, EducationSource, EducationView, Endpoint, FetchError, FetchOutcome,
    FileSource, HttpSource, ResizeBus, TimelineMode, ViewState,
};
use anyhow::Result;
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Source returning a fixed body and counting how often it was asked.
struct Counting {
    body: Result<Value, String>,
    calls: Arc<AtomicUsize>,
}

impl EducationSource for Counting {
    fn endpoint(&self) -> &str {
        "counting"
    }

    fn fetch(&self) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.body.clone().map_err(|msg| FetchError::Io {
            path: "counting".into(),
            source: std::io::Error::other(msg),
        })
    }
}

fn counting(body: Result<Value, String>) -> (Box<Counting>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (Box::new(Counting { body, calls: Arc::clone(&calls) }), calls)
}

/// Polls until the fetch settles, collecting every non-pending outcome.
fn settle(view: &mut EducationView) -> Vec<FetchOutcome> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut outcomes = Vec::new();
    while Instant::now() < deadline {
        match view.poll() {
            FetchOutcome::Pending if outcomes.is_empty() => thread::sleep(Duration::from_millis(5)),
            FetchOutcome::Pending => break,
            outcome => outcomes.push(outcome),
        }
    }
    // A few more polls must not produce another transition.
    for _ in 0..10 {
        let outcome = view.poll();
        if outcome != FetchOutcome::Pending {
            outcomes.push(outcome);
        }
    }
    outcomes
}

#[test]
fn test_layout_table_boundaries() {
    let cases = [
        (575.0, 90, TimelineMode::Vertical),
        (576.0, 90, TimelineMode::VerticalAlternating),
        (767.0, 90, TimelineMode::VerticalAlternating),
        (768.0, 75, TimelineMode::VerticalAlternating),
        (1023.0, 75, TimelineMode::VerticalAlternating),
        (1024.0, 50, TimelineMode::VerticalAlternating),
    ];
    for (width, vw, mode) in cases {
        let layout = classify(width);
        assert_eq!((layout.width_vw, layout.mode), (vw, mode), "width {width}");
        assert_eq!(classify(width), layout, "classify must be deterministic");
    }
}

#[test]
fn test_two_records_load_once_in_order() {
    let bus = ResizeBus::new();
    let (source, calls) = counting(Ok(json!({
        "education": [
            {"title": "2014 - 2018", "cardTitle": "BSc"},
            {"title": "2018 - 2020", "cardTitle": "MSc"},
        ]
    })));

    let mut view = EducationView::mount("Education", source, &bus, None);
    assert!(view.is_loading());

    assert_eq!(settle(&mut view), vec![FetchOutcome::Loaded]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let titles: Vec<_> = view.items().iter().filter_map(|r| r.card_title()).collect();
    assert_eq!(titles, ["BSc", "MSc"]);
}

#[test]
fn test_missing_education_key_renders_empty() {
    let bus = ResizeBus::new();
    let (source, _) = counting(Ok(json!({})));
    let mut view = EducationView::mount("Education", source, &bus, None);

    assert_eq!(settle(&mut view), vec![FetchOutcome::Loaded]);
    assert!(matches!(view.state(), ViewState::Loaded(d) if d.is_empty()));
    assert!(view.items().is_empty());
    assert!(view.icon_elements().is_empty());
}

#[test]
fn test_failed_fetch_stays_loading() {
    let bus = ResizeBus::new();
    let (source, calls) = counting(Err("connection refused".to_string()));
    let mut view = EducationView::mount("Education", source, &bus, None);

    assert_eq!(settle(&mut view), vec![FetchOutcome::Failed]);
    assert!(view.is_loading());
    assert_eq!(view.dataset(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_one_icon_for_one_record_with_icon() {
    let bus = ResizeBus::new();
    let (source, _) = counting(Ok(json!({
        "education": [
            {"title": "A", "icon": {"src": "a.png", "alt": "A"}},
            {"title": "B"},
        ]
    })));
    let mut view = EducationView::mount("Education", source, &bus, None);
    settle(&mut view);

    let icons = view.icon_elements();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].src, "a.png");
    assert_eq!(icons[0].key, "a.png");
    assert_eq!(icons[0].alt, "A");
    assert_eq!(view.items().len(), 2);
}

#[test]
fn test_unmounted_view_gets_no_resizes() {
    let bus = ResizeBus::new();
    bus.publish(1280.0);

    let (source, _) = counting(Ok(json!({"education": []})));
    let view = EducationView::mount("Education", source, &bus, None);
    bus.publish(700.0);
    assert_eq!(view.layout(), classify(700.0));

    drop(view);
    assert_eq!(bus.listener_count(), 0);
    bus.publish(400.0);
    assert_eq!(bus.inner_width(), Some(400.0));
}

#[test]
fn test_file_endpoint_from_config() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("education.json");
    std::fs::write(&data, r#"{"education": [{"title": "2020", "cardTitle": "PhD"}]}"#)?;

    let config = AppConfig::default().apply_env(|key| match key {
        folio::config::ENDPOINT_ENV => Some(data.display().to_string()),
        _ => None,
    });
    let endpoint = config.education_endpoint()?;
    assert_eq!(endpoint, Endpoint::File(data.clone()));

    let bus = ResizeBus::new();
    let mut view = EducationView::mount(config.header.clone(), endpoint.into_source(), &bus, None);
    assert_eq!(settle(&mut view), vec![FetchOutcome::Loaded]);
    assert_eq!(view.items()[0].card_title(), Some("PhD"));
    Ok(())
}

#[test]
fn test_file_source_bad_json_stays_loading() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data = dir.path().join("education.json");
    std::fs::write(&data, "<!doctype html><p>404</p>")?;

    let bus = ResizeBus::new();
    let mut view = EducationView::mount("Education", Box::new(FileSource::new(&data)), &bus, None);
    assert_eq!(settle(&mut view), vec![FetchOutcome::Failed]);
    assert!(view.is_loading());
    Ok(())
}

/// Serves exactly one HTTP response on a random local port.
fn serve_once(status: &str, body: &str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let url = format!("http://{}/profile/education.json", listener.local_addr()?);
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut request = Vec::new();
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
        }
    });

    Ok(url)
}

#[test]
fn test_http_source_fetches_json() -> Result<()> {
    let url = serve_once("200 OK", r#"{"education": [{"title": "2010"}]}"#)?;
    let body = HttpSource::new(url).fetch()?;
    assert_eq!(body["education"][0]["title"], "2010");
    Ok(())
}

#[test]
fn test_http_error_status_still_parses_body() -> Result<()> {
    let url = serve_once("404 Not Found", r#"{"error": "missing"}"#)?;
    let body = HttpSource::new(url).fetch()?;
    assert_eq!(body["error"], "missing");
    Ok(())
}

#[test]
fn test_http_unreachable_is_an_error() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let result = HttpSource::new(format!("http://{addr}/education.json")).fetch();
    assert!(matches!(result, Err(FetchError::Http { .. })));
    Ok(())
}
