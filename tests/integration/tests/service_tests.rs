//! Service Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test service_tests

use board_common::AppError;
use board_core::value_objects::{ListOptions, PostId};
use board_core::DomainError;
use board_service::dto::LoginRequest;
use board_service::ServiceError;
use integration_tests::{check_test_env, fixtures::*, TestBoard};

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let request = unique_user();

    let user = board.users().create_user(request.clone()).await.unwrap();
    assert_eq!(user.username, request.username);
    assert!(user.id.into_inner() > 0);

    let fetched = board.users().get_user(user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_create_user_stores_argon2_hash() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let user = board.users().create_user(unique_user()).await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
        .bind(user.id.into_inner())
        .fetch_one(&board.pool)
        .await
        .unwrap();
    assert_ne!(stored, TEST_PASSWORD);
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_create_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let request = unique_user();

    board.users().create_user(request.clone()).await.unwrap();
    let err = board.users().create_user(request).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::UsernameAlreadyExists)
    ));
    assert_eq!(err.to_string(), "A user with this username already exists");
}

#[tokio::test]
async fn test_check_login() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let request = unique_user();
    let user = board.users().create_user(request.clone()).await.unwrap();

    let logged_in = board
        .users()
        .check_login(LoginRequest {
            username: request.username.clone(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);

    let err = board
        .users()
        .check_login(LoginRequest {
            username: request.username,
            password: "WrongPass123!".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::App(AppError::InvalidCredentials)));

    let err = board
        .users()
        .check_login(LoginRequest {
            username: format!("nobody{}", unique_suffix()),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::App(AppError::InvalidCredentials)));
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_and_fetch_listing() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let author = board.users().create_user(unique_user()).await.unwrap();
    let subreddit = board
        .subreddits()
        .create_subreddit(unique_subreddit())
        .await
        .unwrap();

    let request = post_for(author.id, Some(subreddit.id));
    let post = board.posts().create_post(request.clone()).await.unwrap();
    assert_eq!(post.title, request.title);
    assert_eq!(post.url, request.url);

    let listing = board.posts().get_single_post(post.id).await.unwrap();
    assert_eq!(listing.user_id, listing.user.id);
    assert_eq!(listing.subreddit_id, listing.subreddit.as_ref().map(|s| s.id));
    assert_eq!(listing.user, author);
    assert_eq!(listing.subreddit, Some(subreddit));

    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["user"]["username"], author.username.as_str());
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn test_get_missing_post() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let err = board
        .posts()
        .get_single_post(PostId::new(i64::MAX))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_posts_for_user() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let author = board.users().create_user(unique_user()).await.unwrap();
    let other = board.users().create_user(unique_user()).await.unwrap();

    let older = board.posts().create_post(post_for(author.id, None)).await.unwrap();
    board.posts().create_post(post_for(other.id, None)).await.unwrap();
    let newer = board.posts().create_post(post_for(author.id, None)).await.unwrap();

    let posts = board
        .posts()
        .get_all_posts_for_user(author.id, ListOptions::default())
        .await
        .unwrap();
    let ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(posts.iter().all(|p| p.user.id == author.id && p.subreddit.is_none()));
}

#[tokio::test]
async fn test_get_all_posts_newest_first() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let author = board.users().create_user(unique_user()).await.unwrap();
    let post = board.posts().create_post(post_for(author.id, None)).await.unwrap();

    let posts = board.posts().get_all_posts(ListOptions::default()).await.unwrap();
    assert!(!posts.is_empty());
    assert!(posts.len() <= 25);
    assert!(posts.iter().any(|p| p.id == post.id));
    assert!(posts
        .windows(2)
        .all(|w| (w[0].created_at, w[0].id) >= (w[1].created_at, w[1].id)));
}

// ============================================================================
// Subreddit Tests
// ============================================================================

#[tokio::test]
async fn test_create_subreddit_duplicate_name() {
    if !check_test_env() {
        return;
    }

    let board = TestBoard::start().await.expect("Failed to start board");
    let request = unique_subreddit();

    let created = board
        .subreddits()
        .create_subreddit(request.clone())
        .await
        .unwrap();
    let fetched = board.subreddits().get_subreddit(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let err = board
        .subreddits()
        .create_subreddit(request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::DatabaseError(_))));
}
