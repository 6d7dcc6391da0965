// order_service/tests/notifier_tests.rs

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use order_service::errors::NotifyError;
use order_service::models::Notification;
use order_service::services::{HttpNotifier, Notifier};

type Received = Arc<Mutex<Vec<Value>>>;

/// Starts a throwaway user service on an ephemeral port that answers every
/// `POST /notify` with `status` and records the JSON it was sent.
fn spawn_user_service(status: u16) -> (String, Received, actix_web::dev::ServerHandle) {
  let received: Received = Arc::default();
  let sink = received.clone();

  let server = HttpServer::new(move || {
    let sink = sink.clone();
    App::new().route(
      "/notify",
      web::post().to(move |body: web::Json<Value>| {
        let sink = sink.clone();
        async move {
          sink.lock().unwrap().push(body.into_inner());
          HttpResponse::build(actix_web::http::StatusCode::from_u16(status).unwrap()).finish()
        }
      }),
    )
  })
  .workers(1)
  .bind(("127.0.0.1", 0))
  .unwrap();

  let addr = server.addrs()[0];
  let server = server.run();
  let handle = server.handle();
  actix_web::rt::spawn(server);
  (format!("http://{addr}/notify"), received, handle)
}

#[actix_web::test]
async fn delivers_notification_payload_as_json() {
  let (url, received, handle) = spawn_user_service(200);
  let notifier = HttpNotifier::new(url, Duration::from_secs(5)).unwrap();

  notifier.notify(&Notification::order_placed(7, 42)).await.unwrap();

  let received = received.lock().unwrap().clone();
  assert_eq!(
    received,
    vec![serde_json::json!({ "user_id": 7, "message": "Your order #42 has been placed." })]
  );
  handle.stop(true).await;
}

#[actix_web::test]
async fn non_success_status_is_reported() {
  let (url, received, handle) = spawn_user_service(503);
  let notifier = HttpNotifier::new(url, Duration::from_secs(5)).unwrap();

  let result = notifier.notify(&Notification::order_placed(1, 1)).await;

  assert!(matches!(result, Err(NotifyError::Status(503))), "{result:?}");
  assert_eq!(received.lock().unwrap().len(), 1);
  handle.stop(true).await;
}
