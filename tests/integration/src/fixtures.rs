//! Test fixtures and data generators
//!
//! Provides reusable request data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use board_core::value_objects::{SubredditId, UserId};
use board_service::dto::{CreatePostRequest, CreateSubredditRequest, CreateUserRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixes in the clock so reruns against the same database do not collide.
pub fn unique_suffix() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    format!(
        "{}_{}",
        millis % 1_000_000_000,
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Password used by every fixture user
pub const TEST_PASSWORD: &str = "TestPass123!";

pub fn unique_user() -> CreateUserRequest {
    CreateUserRequest {
        username: format!("testuser{}", unique_suffix()),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn unique_subreddit() -> CreateSubredditRequest {
    CreateSubredditRequest {
        name: format!("sub{}", unique_suffix()),
        description: Some("Integration test community".to_string()),
    }
}

pub fn post_for(user_id: UserId, subreddit_id: Option<SubredditId>) -> CreatePostRequest {
    let suffix = unique_suffix();
    CreatePostRequest {
        user_id,
        title: format!("Test post {suffix}"),
        url: format!("https://example.com/posts/{suffix}"),
        subreddit_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_suffix_keeps_parts_apart() {
        let first = unique_suffix();
        let second = unique_suffix();

        assert_ne!(first, second);
        let (millis, counter) = first.split_once('_').unwrap();
        assert!(millis.parse::<u64>().is_ok());
        assert!(counter.parse::<u64>().is_ok());
    }
}
