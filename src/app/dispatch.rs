//! Request dispatch for the Convert and Debug buttons

use super::App;
use crate::api::ConverterClient;
use crate::session::Session;
use crate::types::{Action, Language};
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Snapshot of the form taken when a button is clicked
#[derive(Debug, Clone)]
pub(crate) enum Request {
    Convert {
        code: String,
        from: Language,
        to: Language,
    },
    Debug {
        code: String,
        language: Language,
    },
}

impl Request {
    fn action(&self) -> Action {
        match self {
            Request::Convert { .. } => Action::Convert,
            Request::Debug { .. } => Action::Debug,
        }
    }
}

/// Send one request on the runtime and apply its reply to the session.
pub(crate) fn dispatch(
    runtime: &tokio::runtime::Handle,
    client: ConverterClient,
    session: Arc<Mutex<Session>>,
    ctx: egui::Context,
    request: Request,
) -> JoinHandle<()> {
    let action = request.action();
    let ticket = session.lock().unwrap().begin(action);
    info!(action = action.label(), generation = ticket.generation, "Dispatching request");
    ctx.request_repaint();

    runtime.spawn(async move {
        let result = match &request {
            Request::Convert { code, from, to } => client.convert(code, *from, *to).await,
            Request::Debug { code, language } => client.debug(code, *language).await,
        };

        match &result {
            Ok(msg) => info!(action = action.label(), bytes = msg.len(), "Request succeeded"),
            Err(e) => error!(action = action.label(), error = %e, "Request failed"),
        }

        session.lock().unwrap().complete(ticket, result);
        ctx.request_repaint();
    })
}

impl App {
    pub fn convert(&mut self, ctx: &egui::Context) {
        let request = Request::Convert {
            code: self.form.input.clone(),
            from: self.form.from_language,
            to: self.form.to_language,
        };
        self.send(ctx, request);
    }

    pub fn debug(&mut self, ctx: &egui::Context) {
        let request = Request::Debug {
            code: self.form.input.clone(),
            language: self.form.from_language,
        };
        self.send(ctx, request);
    }

    fn send(&self, ctx: &egui::Context, request: Request) {
        // Completion is observed through the session, not the handle
        let _ = dispatch(
            self.runtime.handle(),
            self.client.clone(),
            self.session.clone(),
            ctx.clone(),
            request,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionOutcome;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn run(server_uri: &str, session: &Arc<Mutex<Session>>, request: Request) -> JoinHandle<()> {
        dispatch(
            &tokio::runtime::Handle::current(),
            ConverterClient::new(server_uri),
            session.clone(),
            egui::Context::default(),
            request,
        )
    }

    #[tokio::test]
    async fn convert_scenario_fills_converted_and_clears_debugged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/code/convert"))
            .and(body_json(json!({
                "code": "print('hi')",
                "fromLanguage": "Python",
                "toLanguage": "JavaScript",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "console.log('hi')"})))
            .expect(1)
            .mount(&server)
            .await;

        let session = Arc::new(Mutex::new(Session::default()));
        let request = Request::Convert {
            code: "print('hi')".into(),
            from: Language::Python,
            to: Language::JavaScript,
        };
        run(&server.uri(), &session, request).await.unwrap();

        let s = session.lock().unwrap();
        assert_eq!(s.converted(), "console.log('hi')");
        assert_eq!(s.debugged(), "");
        assert_eq!(s.outcome(Action::Convert), &ActionOutcome::Success);
    }

    #[tokio::test]
    async fn debug_scenario_fills_debugged_and_clears_converted() {
        let fixed = "for(int i=0;i<5;i++) printf(\"%d\", i);";
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/code/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "converted"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/code/debug"))
            .and(body_json(json!({
                "code": "for(int i=0;i<5;i++) printf(i);",
                "language": "C",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "msg": fixed })))
            .expect(1)
            .mount(&server)
            .await;

        let session = Arc::new(Mutex::new(Session::default()));
        let convert = Request::Convert {
            code: "int x;".into(),
            from: Language::C,
            to: Language::C,
        };
        run(&server.uri(), &session, convert).await.unwrap();
        assert_eq!(session.lock().unwrap().converted(), "converted");

        let debug = Request::Debug {
            code: "for(int i=0;i<5;i++) printf(i);".into(),
            language: Language::C,
        };
        run(&server.uri(), &session, debug).await.unwrap();

        let s = session.lock().unwrap();
        assert_eq!(s.debugged(), fixed);
        assert_eq!(s.converted(), "");
    }

    #[tokio::test]
    async fn failed_request_keeps_outputs_and_reports_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/code/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"msg": "first"})))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/code/convert"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let session = Arc::new(Mutex::new(Session::default()));
        let request = Request::Convert {
            code: "x".into(),
            from: Language::Java,
            to: Language::Python,
        };
        run(&server.uri(), &session, request.clone()).await.unwrap();
        run(&server.uri(), &session, request).await.unwrap();

        let s = session.lock().unwrap();
        assert_eq!(s.converted(), "first");
        assert_eq!(s.debugged(), "");
        assert!(matches!(s.outcome(Action::Convert), ActionOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn unreachable_service_reports_failure() {
        let session = Arc::new(Mutex::new(Session::default()));
        let request = Request::Debug {
            code: "x".into(),
            language: Language::Cpp,
        };
        run("http://127.0.0.1:1", &session, request).await.unwrap();

        let s = session.lock().unwrap();
        assert_eq!(s.debugged(), "");
        assert!(matches!(s.outcome(Action::Debug), ActionOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn dispatch_marks_action_pending_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/code/debug"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"msg": "ok"}))
                    .set_delay(std::time::Duration::from_millis(200)),
            )
            .mount(&server)
            .await;

        let session = Arc::new(Mutex::new(Session::default()));
        let request = Request::Debug {
            code: String::new(),
            language: Language::JavaScript,
        };
        let handle = run(&server.uri(), &session, request);
        assert!(session.lock().unwrap().is_pending(Action::Debug));
        handle.await.unwrap();
        assert_eq!(session.lock().unwrap().debugged(), "ok");
    }
}
