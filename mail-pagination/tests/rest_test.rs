//! REST client tests against a local mock of the mail list API.

use mail_pagination::{
    MailHttpClient, MailboxPager, OrderDirection, PageFilter, PageItemType, PageKey,
    PaginationError, PagingConfig, ReadStatus,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, token: Option<&str>) -> MailHttpClient {
    let config = PagingConfig {
        base_url: server.uri(),
        access_token: token.map(str::to_string),
        ..Default::default()
    };
    MailHttpClient::new(&config).unwrap()
}

fn message(id: &str, time: i64) -> serde_json::Value {
    json!({
        "ID": id,
        "ConversationID": format!("conv-{id}"),
        "Time": time,
        "Order": time,
        "Size": 100,
        "Unread": 1,
        "LabelIDs": ["0"],
        "Subject": format!("message {id}"),
    })
}

#[tokio::test]
async fn test_get_messages_sends_key_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/messages"))
        .and(header("authorization", "Bearer secret"))
        .and(query_param("Page", "0"))
        .and(query_param("PageSize", "5"))
        .and(query_param("Limit", "5"))
        .and(query_param("LabelID", "0"))
        .and(query_param("Sort", "Time"))
        .and(query_param("Desc", "1"))
        .and(query_param("End", "5000"))
        .and(query_param("EndID", "m5"))
        .and(query_param("Unread", "1"))
        .and(query_param_is_missing("Begin"))
        .and(query_param_is_missing("Keyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Code": 1000,
            "Total": 2,
            "Messages": [message("m4", 4000), message("m3", 3000)],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = PageKey {
        size: 5,
        filter: PageFilter {
            max_time: 5000,
            max_order: 4999,
            max_id: Some("m5".into()),
            read: ReadStatus::Unread,
            ..Default::default()
        },
        ..Default::default()
    };

    let items = client(&server, Some("secret"))
        .get_messages(&key)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "m4");
    assert_eq!(items[0].conversation_id.as_deref(), Some("conv-m4"));
    assert!(!items[0].read);
}

#[tokio::test]
async fn test_get_conversations_hits_conversation_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/conversations"))
        .and(query_param("Desc", "0"))
        .and(query_param("Keyword", "invoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Code": 1000,
            "Total": 1,
            "Conversations": [{
                "ID": "c1",
                "Order": 101,
                "ContextTime": 100,
                "NumUnread": 0,
                "Labels": [{ "ID": "0" }],
                "Subject": "invoice",
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = PageKey {
        order_direction: OrderDirection::Ascending,
        filter: PageFilter {
            keyword: "  invoice ".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    let items = client(&server, None)
        .get_items(PageItemType::Conversation, &key)
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, PageItemType::Conversation);
    assert_eq!(items[0].time, 100);
    assert!(items[0].read);
}

#[tokio::test]
async fn test_http_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid access token"))
        .mount(&server)
        .await;

    let err = client(&server, Some("expired"))
        .get_messages(&PageKey::default())
        .await
        .unwrap_err();

    match err {
        PaginationError::Http { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid access token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_oversized_page_is_rejected_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, None)
        .get_messages(&PageKey::default().with_size(151))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaginationError::PageSizeExceeded { size: 151, max: 150 }
    ));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client(&server, None).get_messages(&PageKey::default()).await;

    assert!(matches!(result, Err(PaginationError::Request(_))));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let config = PagingConfig {
        base_url: "not a url".into(),
        ..Default::default()
    };
    assert!(matches!(
        MailHttpClient::new(&config),
        Err(PaginationError::Url(_))
    ));
}

#[tokio::test]
async fn test_pager_walks_remote_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/messages"))
        .and(query_param_is_missing("EndID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Code": 1000,
            "Total": 3,
            "Messages": [message("m3", 3000), message("m2", 2000)],
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mail/v4/messages"))
        .and(query_param("EndID", "m2"))
        .and(query_param("End", "2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Code": 1000,
            "Total": 3,
            "Messages": [message("m1", 1000)],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut pager = MailboxPager::new(client(&server, None), PageItemType::Message, 2);
    let pages = pager
        .walk(&PageKey::default().with_size(2), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert!(pages[1].end_reached);
    let ids: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.items.iter().map(|it| it.id.as_str()))
        .collect();
    assert_eq!(ids, vec!["m3", "m2", "m1"]);
}
