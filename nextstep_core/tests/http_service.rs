/// Exercises the HTTP recommendation client against a local stub service

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use nextstep_core::{
    spawn_fetch, Advance, ClientConfig, FetchOutcome, HttpRecommendationService,
    RecommendationRequest, RecommendationService, Step, WizardController,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

type Captured = Arc<Mutex<Option<Value>>>;

/// Starts a stub `/recommend` endpoint that replies with `status` and `body`
/// and records the last request body it saw.
fn spawn_stub(status: u16, body: String) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let captured_for_server = captured.clone();
    let (tx, rx) = mpsc::channel::<SocketAddr>();

    thread::spawn(move || {
        let system = actix_web::rt::System::new();
        system.block_on(async move {
            let server = HttpServer::new(move || {
                let captured = captured_for_server.clone();
                let body = body.clone();
                App::new().route(
                    "/recommend",
                    web::post().to(move |payload: web::Json<Value>| {
                        let captured = captured.clone();
                        let body = body.clone();
                        async move {
                            *captured.lock().unwrap() = Some(payload.into_inner());
                            HttpResponse::build(StatusCode::from_u16(status).unwrap())
                                .content_type("application/json")
                                .body(body)
                        }
                    }),
                )
            })
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .unwrap();

            tx.send(server.addrs()[0]).unwrap();
            server.run().await.unwrap();
        });
    });

    let addr = rx.recv().unwrap();
    (format!("http://{}", addr), captured)
}

fn service_for(origin: &str) -> HttpRecommendationService {
    let _ = env_logger::builder().is_test(true).try_init();
    HttpRecommendationService::new(&ClientConfig::new(origin).unwrap()).unwrap()
}

fn request() -> RecommendationRequest {
    RecommendationRequest {
        name: " Alice ".to_string(),
        interests: vec!["technology".to_string(), "coding".to_string()],
        strengths: vec!["logic".to_string()],
    }
}

#[test]
fn test_success_returns_recommendations_in_order() {
    let body = json!({
        "recommendations": [{
            "career": "Engineer",
            "description": "...",
            "roadmap": ["Learn math", "Build projects"]
        }]
    });
    let (origin, _) = spawn_stub(200, body.to_string());

    let recs = service_for(&origin).recommend(&request()).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].career, "Engineer");
    assert_eq!(recs[0].roadmap, vec!["Learn math", "Build projects"]);
}

#[test]
fn test_request_body_shape() {
    let (origin, captured) = spawn_stub(200, json!({ "recommendations": [] }).to_string());

    service_for(&origin).recommend(&request()).unwrap();

    let seen = captured.lock().unwrap().clone().unwrap();
    assert_eq!(
        seen,
        json!({
            "name": " Alice ",
            "interests": ["technology", "coding"],
            "strengths": ["logic"],
        })
    );
}

#[test]
fn test_missing_field_means_no_recommendations() {
    let (origin, _) = spawn_stub(200, "{}".to_string());
    let recs = service_for(&origin).recommend(&request()).unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_non_success_status_fails() {
    let (origin, _) = spawn_stub(500, json!({ "error": "boom" }).to_string());
    let err = service_for(&origin).recommend(&request()).unwrap_err();
    assert!(err.detail().contains("500"));
}

#[test]
fn test_malformed_body_fails() {
    let (origin, _) = spawn_stub(200, "not json at all".to_string());
    let err = service_for(&origin).recommend(&request()).unwrap_err();
    assert!(err.detail().contains("malformed"));
}

#[test]
fn test_connection_refused_fails() {
    // Bind then drop to get a port nobody listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = service_for(&format!("http://127.0.0.1:{}", port))
        .recommend(&request())
        .unwrap_err();
    assert!(err.detail().contains("transport error"));
}

#[test]
fn test_wizard_round_trip_through_worker() {
    let body = json!({
        "recommendations": [
            { "career": "Software Engineer", "description": "Design software.", "roadmap": ["Learn Rust"] },
            { "career": "Graphic Designer", "description": "Create visuals.", "roadmap": ["Build a portfolio"] }
        ]
    });
    let (origin, _) = spawn_stub(200, body.to_string());
    let service: Arc<dyn RecommendationService> = Arc::new(service_for(&origin));

    let mut wizard = WizardController::new();
    wizard.set_name("Alice");
    wizard.advance();
    wizard.toggle_interest("coding");
    wizard.toggle_interest("design");
    wizard.advance();
    wizard.toggle_strength("logic");

    let Advance::FetchRequested(req) = wizard.advance() else {
        panic!("expected fetch request");
    };
    let outcome = wizard.complete_fetch(spawn_fetch(service, req).wait());

    assert_eq!(outcome, FetchOutcome::Succeeded { count: 2 });
    assert_eq!(wizard.step(), Step::Results);
    assert_eq!(wizard.state().recommendations[1].career, "Graphic Designer");
}
