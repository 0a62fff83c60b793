mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{body_to_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_then_list_shows_the_workspace_with_zero_counts() -> Result<()> {
    let app = TestApp::new();

    let created = app
        .post_json(
            "/workspaces",
            &json!({"name": "Research", "description": "Handwriting analysis"}),
        )
        .await?;
    assert_eq!(created.status(), StatusCode::CREATED);

    let created_body = body_to_json(created.into_body()).await?;
    assert_eq!(created_body["success"], true);
    let workspace = &created_body["workspace"];
    assert_eq!(workspace["name"], "Research");
    assert_eq!(workspace["description"], "Handwriting analysis");
    assert_eq!(workspace["pdfCount"], 0);
    assert_eq!(workspace["imageCount"], 0);
    assert_eq!(workspace["audioCount"], 0);
    assert_eq!(workspace["userId"], "1");
    assert!(!workspace["id"].as_str().unwrap().is_empty());

    let listed = app.get("/workspaces").await?;
    assert_eq!(listed.status(), StatusCode::OK);
    let listed_body = body_to_json(listed.into_body()).await?;
    let workspaces = listed_body["workspaces"].as_array().unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0]["id"], workspace["id"]);

    Ok(())
}

#[tokio::test]
async fn list_is_partitioned_by_user_id() -> Result<()> {
    let app = TestApp::new();

    app.post_json("/workspaces", &json!({"name": "Mine"}))
        .await?;
    app.post_json("/workspaces", &json!({"name": "Theirs", "userId": "2"}))
        .await?;

    let default_list = body_to_json(app.get("/workspaces").await?.into_body()).await?;
    let default_names: Vec<&str> = default_list["workspaces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(default_names, vec!["Mine"]);

    let other_list = body_to_json(app.get("/workspaces?userId=2").await?.into_body()).await?;
    let other_names: Vec<&str> = other_list["workspaces"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(other_names, vec!["Theirs"]);

    Ok(())
}

#[tokio::test]
async fn create_without_name_is_rejected() -> Result<()> {
    let app = TestApp::new();

    let response = app
        .post_json("/workspaces", &json!({"description": "no name"}))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Workspace name is required");

    Ok(())
}

#[tokio::test]
async fn delete_removes_the_workspace_and_absent_ids_still_succeed() -> Result<()> {
    let app = TestApp::new();

    let id = app.create_workspace("Scratch").await?;

    let deleted = app.delete(&format!("/workspaces?id={id}")).await?;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted_body = body_to_json(deleted.into_body()).await?;
    assert_eq!(deleted_body["message"], "Workspace deleted successfully");

    let listed = body_to_json(app.get("/workspaces").await?.into_body()).await?;
    assert!(listed["workspaces"].as_array().unwrap().is_empty());

    let again = app.delete(&format!("/workspaces?id={id}")).await?;
    assert_eq!(again.status(), StatusCode::OK);

    let never_existed = app.delete("/workspaces?id=no-such-id").await?;
    assert_eq!(never_existed.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn delete_without_id_is_rejected() -> Result<()> {
    let app = TestApp::new();

    let response = app.delete("/workspaces").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await?;
    assert_eq!(body["error"], "Workspace ID is required");

    Ok(())
}
