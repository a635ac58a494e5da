use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use yuletide::{
    geolocation::Coordinates,
    report::{HttpReporter, LocationReport, ReportError, Reporter},
};

type Received = Arc<Mutex<Vec<LocationReport>>>;

const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);

async fn collect(
    State((status, received)): State<(StatusCode, Received)>,
    Json(report): Json<LocationReport>,
) -> StatusCode {
    received.lock().unwrap().push(report);
    status
}

/// Spin up a collection endpoint that answers every POST with `status`.
async fn endpoint(status: StatusCode) -> (String, Received) {
    let received = Received::default();
    let app = Router::new()
        .route("/posts", post(collect))
        .with_state((status, received.clone()));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    (format!("http://{addr}/posts"), received)
}

#[tokio::test]
async fn accepted_report_arrives_once_as_json() {
    let (url, received) = endpoint(StatusCode::CREATED).await;
    let reporter = HttpReporter::new(url.clone());
    assert_eq!(reporter.endpoint(), url);

    let report = LocationReport::new(LONDON, "Christmas surprise delivery");
    reporter.submit(&report).await.unwrap();

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].coordinates(), LONDON);
    assert_eq!(received[0].purpose, "Christmas surprise delivery");
    assert_eq!(received[0], report);
}

#[tokio::test]
async fn error_status_is_a_failed_delivery() {
    let (url, received) = endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
    let reporter = HttpReporter::new(url);

    let err = reporter
        .submit(&LocationReport::new(LONDON, "testing"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ReportError::Status(status) if status == StatusCode::INTERNAL_SERVER_ERROR),
        "{err}"
    );
    // the endpoint saw it, the reporter just did not accept the answer
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_failed_delivery() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let reporter = HttpReporter::new(format!("http://{addr}/posts"));
    let err = reporter
        .submit(&LocationReport::new(LONDON, "testing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Transport(_)), "{err}");
}
