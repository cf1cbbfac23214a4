//! Post storage.

use parking_lot::RwLock;

use crate::database::models::{NewPost, Post};

pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    fn list(&self) -> Vec<Post>;

    fn get(&self, id: u64) -> Option<Post>;

    /// Store a post under the next id (`count + 1`) and return it.
    fn add(&self, post: NewPost) -> Post;

    fn count(&self) -> usize;
}

#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository holding the welcome post every fresh server starts with.
    pub fn seeded() -> Self {
        let repo = Self::new();
        repo.add(NewPost {
            title: "Securing FastAPI application with JWT".to_string(),
            content: "In this tutorial, you'll learn how to secure your application with JWT."
                .to_string(),
        });
        repo
    }
}

impl PostRepository for InMemoryPostRepository {
    fn list(&self) -> Vec<Post> {
        self.posts.read().clone()
    }

    fn get(&self, id: u64) -> Option<Post> {
        self.posts.read().iter().find(|p| p.id == id).cloned()
    }

    fn add(&self, post: NewPost) -> Post {
        // Id assignment and append share one write lock so concurrent inserts get distinct ids.
        let mut posts = self.posts.write();
        let post = Post {
            id: posts.len() as u64 + 1,
            title: post.title,
            content: post.content,
        };
        posts.push(post.clone());
        post
    }

    fn count(&self) -> usize {
        self.posts.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: format!("{title} body"),
        }
    }

    #[test]
    fn test_seeded_repository_has_welcome_post() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.list();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "Securing FastAPI application with JWT");
    }

    #[test]
    fn test_ids_follow_count() {
        let repo = InMemoryPostRepository::seeded();
        let second = repo.add(new_post("second"));
        let third = repo.add(new_post("third"));

        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
        assert_eq!(repo.count(), 3);
        assert_eq!(repo.get(2), Some(second));
        assert_eq!(repo.get(3), Some(third));
    }

    #[test]
    fn test_get_missing_is_none() {
        let repo = InMemoryPostRepository::seeded();
        assert!(repo.get(0).is_none());
        assert!(repo.get(2).is_none());
    }

    #[test]
    fn test_list_is_stable_without_writes() {
        let repo = InMemoryPostRepository::seeded();
        repo.add(new_post("second"));

        assert_eq!(repo.list(), repo.list());
    }

    #[test]
    fn test_concurrent_inserts_get_unique_ids() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        repo.add(new_post(&format!("{t}-{i}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<u64> = repo.list().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 400);
        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
    }
}
