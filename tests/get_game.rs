use devcade_client::{DevcadeClient, DevcadeError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_game_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/a1c6cef6-d987-4225-8bc4-def387e8b5bf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a1c6cef6-d987-4225-8bc4-def387e8b5bf",
            "author": "ella",
            "upload_date": "2023-03-20",
            "name": "BrickBreaker",
            "hash": "d27ac26c3bbcc3a1eac4b300f7b07dbfb472a091",
            "description": "Break bricks, get points"
        })))
        .mount(&server)
        .await;

    let client = DevcadeClient::with_base_url(&server.uri()).unwrap();
    let game = client
        .get_game("a1c6cef6-d987-4225-8bc4-def387e8b5bf")
        .await
        .unwrap();

    assert_eq!(game.id, "a1c6cef6-d987-4225-8bc4-def387e8b5bf");
    assert_eq!(game.name, "BrickBreaker");
    assert_eq!(game.description, "Break bricks, get points");
}

#[tokio::test]
async fn test_get_game_unknown_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/nope"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Game ID Does Not Exist"))
        .mount(&server)
        .await;

    let client = DevcadeClient::with_base_url(&server.uri()).unwrap();
    let err = client.get_game("nope").await.unwrap_err();

    match err {
        DevcadeError::ApiError { message } => assert_eq!(message, "Game ID Does Not Exist"),
        other => panic!("unexpected error: {:?}", other),
    }
}
