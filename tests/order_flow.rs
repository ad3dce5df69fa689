use orderbot::tests::util::{
    ai_config_for, completion_body, sample_shop, sent_message_body, test_bot, text_message,
};
use orderbot::{handle_order_text, SessionId};
use wiremock::matchers::{body_string_contains, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const SEND_MESSAGE: &str = r"(?i)^/botTEST/sendmessage$";
const CHAT_PATH: &str = "/openai/v1/chat/completions";

async fn completion_server(content: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(completion_body(content), "application/json"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn order_is_billed_and_recorded() {
    let llm = completion_server(
        r#"[{"item":"Burger","quantity":2},{"item":"unicorn","quantity":1}]"#,
    )
    .await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .and(body_string_contains("Burger x2 = 10 BDT"))
        .and(body_string_contains("Total: 10 BDT"))
        .and(body_string_contains("Unicorn"))
        .and(body_string_contains("You often order: Burger, unicorn"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(10), "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    let bot = test_bot(&telegram.uri());
    handle_order_text(
        bot,
        text_message(10, "2 burgers and a unicorn"),
        shop.clone(),
        Some(ai_config_for(&llm.uri())),
    )
    .await
    .unwrap();

    telegram.verify().await;
    let history = shop.history(SessionId(10)).await;
    assert_eq!(history.entries(), &[vec!["Burger", "unicorn"]]);
}

#[tokio::test]
async fn unparseable_reply_shows_raw_output_and_keeps_history() {
    let llm = completion_server("Sorry, I only speak prose.").await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .and(body_string_contains("JSON parsing failed"))
        .and(body_string_contains("Sorry, I only speak prose."))
        .and(body_string_contains("Could not extract order"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(11), "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    handle_order_text(
        test_bot(&telegram.uri()),
        text_message(11, "one burger"),
        shop.clone(),
        Some(ai_config_for(&llm.uri())),
    )
    .await
    .unwrap();

    telegram.verify().await;
    assert!(shop.history(SessionId(11)).await.is_empty());
}

/// Telegram's limit on the text of a single message.
const TELEGRAM_TEXT_LIMIT: usize = 4096;

fn fits_one_message(req: &Request) -> bool {
    serde_json::from_slice::<serde_json::Value>(&req.body)
        .ok()
        .and_then(|body| body["text"].as_str().map(|t| t.encode_utf16().count()))
        .is_some_and(|len| len <= TELEGRAM_TEXT_LIMIT)
}

#[tokio::test]
async fn long_model_reply_still_reaches_the_chat() {
    let llm = completion_server(&"x".repeat(5000)).await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .and(fits_one_message)
        .and(body_string_contains("Raw model output: xxx"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(14), "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: message is too long"}"#,
            "application/json",
        ))
        .with_priority(10)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    handle_order_text(
        test_bot(&telegram.uri()),
        text_message(14, "one burger"),
        shop.clone(),
        Some(ai_config_for(&llm.uri())),
    )
    .await
    .unwrap();

    telegram.verify().await;
    assert!(shop.history(SessionId(14)).await.is_empty());
}

#[tokio::test]
async fn service_error_is_reported_and_history_unchanged() {
    let llm = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&llm)
        .await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .and(body_string_contains("The ordering service failed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(12), "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    handle_order_text(
        test_bot(&telegram.uri()),
        text_message(12, "a coke"),
        shop.clone(),
        Some(ai_config_for(&llm.uri())),
    )
    .await
    .unwrap();

    telegram.verify().await;
    llm.verify().await;
    assert!(shop.history(SessionId(12)).await.is_empty());
}

#[tokio::test]
async fn missing_api_key_disables_ordering() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .and(body_string_contains("Order parsing is disabled"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(13), "application/json"),
        )
        .expect(1)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    handle_order_text(
        test_bot(&telegram.uri()),
        text_message(13, "a coke"),
        shop.clone(),
        None,
    )
    .await
    .unwrap();

    telegram.verify().await;
    assert!(shop.history(SessionId(13)).await.is_empty());
}

#[tokio::test]
async fn chats_keep_separate_histories() {
    let llm = completion_server(r#"[{"item":"coke"}]"#).await;
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(SEND_MESSAGE))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(sent_message_body(20), "application/json"),
        )
        .expect(3)
        .mount(&telegram)
        .await;

    let shop = sample_shop();
    let ai = Some(ai_config_for(&llm.uri()));
    for chat in [20, 20, 21] {
        handle_order_text(
            test_bot(&telegram.uri()),
            text_message(chat, "a coke"),
            shop.clone(),
            ai.clone(),
        )
        .await
        .unwrap();
    }

    telegram.verify().await;
    assert_eq!(shop.history(SessionId(20)).await.len(), 2);
    assert_eq!(shop.history(SessionId(21)).await.len(), 1);
    assert_eq!(shop.suggest(SessionId(21)).await, Some(vec!["coke".to_string()]));
}
