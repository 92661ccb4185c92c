use once_cell::sync::Lazy;
use serde_json::Value;
use signup_form::analytics::{Analytics, AnalyticsHook};
use signup_form::controller::{FormView, MessageKind, SignupFormController};
use signup_form::sheets_client::SheetsClient;
use signup_form::telemetry::{get_subscriber, init_subscriber};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Observable page state backing the fake view: field values, feedback
/// region content and the two loading-state flags.
#[derive(Debug, Clone)]
pub struct PageState {
    pub name: String,
    pub email: String,
    pub message: Option<(String, MessageKind)>,
    pub submit_enabled: bool,
    pub loader_visible: bool,
}

impl PageState {
    fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: None,
            submit_enabled: true,
            loader_visible: false,
        }
    }
}

pub struct FakeFormView {
    state: Arc<Mutex<PageState>>,
}

impl FakeFormView {
    pub fn new(state: Arc<Mutex<PageState>>) -> Self {
        Self { state }
    }
}

impl FormView for FakeFormView {
    fn name_value(&self) -> String {
        self.state.lock().unwrap().name.clone()
    }

    fn email_value(&self) -> String {
        self.state.lock().unwrap().email.clone()
    }

    fn clear_fields(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.name = String::new();
        state.email = String::new();
    }

    fn set_feedback(&mut self, text: &str, kind: MessageKind) {
        self.state.lock().unwrap().message = Some((text.to_string(), kind));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.state.lock().unwrap().submit_enabled = enabled;
    }

    fn set_loader_visible(&mut self, visible: bool) {
        self.state.lock().unwrap().loader_visible = visible;
    }
}

/// An analytics event together with a snapshot of the loading-state flags
/// taken at the moment the event was emitted.
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub name: String,
    pub data: Value,
    pub submit_enabled: bool,
    pub loader_visible: bool,
}

pub struct TestForm {
    pub state: Arc<Mutex<PageState>>,
    pub events: Arc<Mutex<Vec<RecordedEvent>>>,
    pub controller: SignupFormController<FakeFormView>,
}

impl TestForm {
    pub fn fill(&self, name: &str, email: &str) {
        let mut state = self.state.lock().unwrap();
        state.name = name.to_string();
        state.email = email.to_string();
    }

    pub fn page(&self) -> PageState {
        self.state.lock().unwrap().clone()
    }

    pub fn recorded_events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_names(&self) -> Vec<String> {
        self.recorded_events()
            .into_iter()
            .map(|event| event.name)
            .collect()
    }
}

/// Wires a controller against the given endpoint, with a fake view and an
/// analytics hook that records every event.
pub fn build_form(endpoint_url: String) -> TestForm {
    Lazy::force(&TRACING);
    let state = Arc::new(Mutex::new(PageState::new()));
    let events: Arc<Mutex<Vec<RecordedEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let hook: AnalyticsHook = {
        let events = events.clone();
        let state = state.clone();
        Box::new(move |name, data| {
            let page = state.lock().unwrap();
            events.lock().unwrap().push(RecordedEvent {
                name: name.to_string(),
                data,
                submit_enabled: page.submit_enabled,
                loader_visible: page.loader_visible,
            });
        })
    };
    let view = FakeFormView::new(state.clone());
    let controller = SignupFormController::new(
        view,
        SheetsClient::new(endpoint_url),
        Analytics::new(Some(hook)),
    );
    TestForm {
        state,
        events,
        controller,
    }
}

pub async fn spawn_form() -> (TestForm, MockServer) {
    let endpoint = MockServer::start().await;
    (build_form(endpoint.uri()), endpoint)
}

/// Pulls a single field value out of a multipart/form-data body.
pub fn multipart_field<'a>(body: &'a str, field: &str) -> Option<&'a str> {
    let marker = format!("name=\"{}\"", field);
    let start = body.find(&marker)? + marker.len();
    let rest = &body[start..];
    let value_start = rest.find("\r\n\r\n")? + 4;
    let rest = &rest[value_start..];
    let value_end = rest.find("\r\n")?;
    Some(&rest[..value_end])
}
