use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Json, Router,
};
use chrono::{DateTime, TimeDelta, Utc};
use interview_reminder_core::{FieldMapping, RecordId, RecordSource, ReminderTemplate};
use interview_reminder_dispatcher::{Dispatcher, NotionSource};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Notion stand-in serving one database and answering page updates with
/// `update_status`.
#[derive(Clone)]
struct FakeNotion {
    rows: Value,
    update_status: StatusCode,
    updates: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn handle(
    State(notion): State<FakeNotion>,
    method: Method,
    uri: Uri,
    body: String,
) -> (StatusCode, Json<Value>) {
    if method == Method::POST && uri.path() == "/v1/databases/interviews/query" {
        return (StatusCode::OK, Json(json!({ "results": notion.rows, "has_more": false })));
    }
    if method == Method::PATCH {
        let body = serde_json::from_str(&body).unwrap_or_default();
        notion.updates.lock().unwrap().push((uri.path().to_string(), body));
        return (notion.update_status, Json(json!({ "object": "page" })));
    }
    (StatusCode::NOT_FOUND, Json(json!({ "object": "error", "code": "object_not_found" })))
}

async fn notion_source(notion: &FakeNotion) -> NotionSource {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let router: Router = Router::new().fallback(handle).with_state(notion.clone());
    let _server = tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    let client = notion::Client::new(notion::Config {
        api_token: "secret_test".to_string(),
        database_id: "interviews".to_string(),
        api_base_url: format!("http://{address}/v1"),
        notion_version: notion::DEFAULT_NOTION_VERSION.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    NotionSource::new(client, FieldMapping::default(), chrono_tz::Asia::Kolkata)
}

fn fake_notion(update_status: StatusCode) -> FakeNotion {
    let row = |id: &str, interview_date: &str| {
        json!({
            "object": "page",
            "id": id,
            "properties": {
                "Candidate Name": { "type": "title", "title": [{ "plain_text": "Asha Rao" }] },
                "Email": { "type": "email", "email": format!("{id}@example.com") },
                "Company Name": { "type": "rich_text", "rich_text": [{ "plain_text": "Acme" }] },
                "Interview Date": { "type": "date", "date": { "start": interview_date } },
                "Reminder Sent At": { "type": "date", "date": null }
            }
        })
    };
    FakeNotion {
        rows: json!([
            row("due", "2024-01-10T09:30:00.000+05:30"),
            row("later", "2024-01-10T13:00:00.000+05:30"),
        ]),
        update_status,
        updates: Arc::default(),
    }
}

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-10T09:00:00+05:30").unwrap().with_timezone(&Utc)
}

#[tokio::test]
async fn test_fetch_and_mark_records() {
    let notion = fake_notion(StatusCode::OK);
    let source = notion_source(&notion).await;

    let records = source.fetch_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, RecordId::new("due"));
    assert_eq!(records[0].contact.as_deref(), Some("due@example.com"));
    assert!(!records[0].already_notified);

    source.mark_notified(&RecordId::new("due"), now()).await.unwrap();
    assert_eq!(
        notion.updates.lock().unwrap().clone(),
        vec![(
            "/v1/pages/due".to_string(),
            json!({
                "properties": {
                    "Reminder Sent At": { "date": { "start": "2024-01-10T09:00:00.000+05:30" } }
                }
            })
        )]
    );
}

#[tokio::test]
async fn test_rejected_update_counts_as_mark_failure() {
    let notion = fake_notion(StatusCode::BAD_GATEWAY);
    let source = notion_source(&notion).await;

    assert!(source.mark_notified(&RecordId::new("due"), now()).await.is_err());

    let dispatcher = Dispatcher::new(
        source,
        notification::log::Client,
        TimeDelta::minutes(60),
        ReminderTemplate::default(),
    );
    let summary = dispatcher.run(now()).await.unwrap();

    assert_eq!(summary.fetched, 2);
    assert_eq!(summary.sent, 1);
    assert_eq!(summary.mark_failures, 1);
    assert_eq!(summary.skipped_out_of_window, 1);
    assert_eq!(notion.updates.lock().unwrap().len(), 2);
}
