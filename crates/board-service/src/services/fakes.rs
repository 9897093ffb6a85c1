//! In-memory repositories for service tests

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use board_core::entities::{NewPost, NewSubreddit, Post, PostListing, Subreddit, User};
use board_core::error::DomainError;
use board_core::traits::{PostRepository, RepoResult, SubredditRepository, UserRepository};
use board_core::value_objects::{PageRequest, PostId, SubredditId, UserId};
use chrono::Utc;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<(User, String)>,
    posts: Vec<Post>,
    subreddits: Vec<Subreddit>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().map(|(u, _)| u).find(|u| u.id == id)
    }

    fn subreddit(&self, id: SubredditId) -> Option<&Subreddit> {
        self.subreddits.iter().find(|s| s.id == id)
    }

    fn listing(&self, post: &Post) -> Option<PostListing> {
        Some(PostListing {
            post: post.clone(),
            user: self.user(post.user_id)?.clone(),
            subreddit: post.subreddit_id.and_then(|id| self.subreddit(id).cloned()),
        })
    }

    fn listings<F>(&self, page: PageRequest, filter: F) -> Vec<PostListing>
    where
        F: Fn(&Post) -> bool,
    {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| filter(*p)).collect();
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .filter_map(|p| self.listing(p))
            .collect()
    }
}

/// Shared in-memory store implementing every repository trait
#[derive(Clone, Default)]
pub struct FakeStore {
    state: Arc<Mutex<State>>,
}

impl FakeStore {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// The stored hash for a user
    pub fn password_hash(&self, id: UserId) -> Option<String> {
        self.lock()
            .users
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, hash)| hash.clone())
    }
}

/// A context whose repositories all share one fresh [`FakeStore`]
pub fn fake_context() -> (ServiceContext, FakeStore) {
    let store = FakeStore::default();
    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(store.clone()))
        .post_repo(Arc::new(store.clone()))
        .subreddit_repo(Arc::new(store.clone()))
        .build()
        .unwrap();
    (ctx, store)
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.lock().user(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .map(|(u, _)| u)
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        let mut state = self.lock();
        if state.users.iter().any(|(u, _)| u.username == username) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        let user = User::new(UserId::new(state.next_id()), username.to_string());
        state.users.push((user.clone(), password_hash.to_string()));
        Ok(user)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.password_hash(id))
    }
}

#[async_trait]
impl PostRepository for FakeStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let mut state = self.lock();
        if state.user(post.user_id).is_none() {
            return Err(DomainError::DatabaseError(
                "violates foreign key constraint \"posts_user_id_fkey\"".to_string(),
            ));
        }
        if let Some(id) = post.subreddit_id {
            if state.subreddit(id).is_none() {
                return Err(DomainError::DatabaseError(
                    "violates foreign key constraint \"posts_subreddit_id_fkey\"".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let created = Post {
            id: PostId::new(state.next_id()),
            title: post.title.clone(),
            url: post.url.clone(),
            user_id: post.user_id,
            subreddit_id: post.subreddit_id,
            created_at: now,
            updated_at: now,
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn list(&self, page: PageRequest) -> RepoResult<Vec<PostListing>> {
        Ok(self.lock().listings(page, |_| true))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> RepoResult<Vec<PostListing>> {
        Ok(self.lock().listings(page, |p| p.user_id == user_id))
    }

    async fn find_listing(&self, id: PostId) -> RepoResult<Option<PostListing>> {
        let state = self.lock();
        Ok(state
            .posts
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| state.listing(p)))
    }
}

#[async_trait]
impl SubredditRepository for FakeStore {
    async fn find_by_id(&self, id: SubredditId) -> RepoResult<Option<Subreddit>> {
        Ok(self.lock().subreddit(id).cloned())
    }

    async fn create(&self, subreddit: &NewSubreddit) -> RepoResult<Subreddit> {
        let mut state = self.lock();
        if state.subreddits.iter().any(|s| s.name == subreddit.name) {
            return Err(DomainError::DatabaseError(
                "duplicate key value violates unique constraint \"subreddits_name_key\""
                    .to_string(),
            ));
        }
        let created = Subreddit::new(
            SubredditId::new(state.next_id()),
            subreddit.name.clone(),
            subreddit.description.clone(),
        );
        state.subreddits.push(created.clone());
        Ok(created)
    }

    async fn list(&self, page: PageRequest) -> RepoResult<Vec<Subreddit>> {
        let state = self.lock();
        let mut subreddits: Vec<&Subreddit> = state.subreddits.iter().collect();
        subreddits.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(subreddits
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }
}
