use crate::post::{Post, PostFaker};
use pagelist_sqlx::{Dialect, SqlxSource};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;

const SCHEMA: &str = "CREATE TABLE posts (
    id INTEGER PRIMARY KEY,
    author_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    upvotes INTEGER NOT NULL,
    downvotes INTEGER NOT NULL
)";

/// A private in-memory SQLite database with a `posts` table.
///
/// The pool holds exactly one connection that never expires, since an
/// in-memory database lives and dies with its connection.
///
/// # Example
///
/// ```ignore
/// let (db, posts) = TestDb::with_posts(30).await;
/// let page = PagedList::create(&db.posts_source(), 1, 15).await.unwrap();
/// assert_eq!(page.items()[0], posts[0]);
/// ```
pub struct TestDb {
    pool: SqlitePool,
}

impl TestDb {
    /// Open a fresh, empty database.
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory SQLite database");
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .expect("failed to create posts table");
        Self { pool }
    }

    /// Open a database seeded with `count` generated posts, returned in id order.
    pub async fn with_posts(count: usize) -> (Self, Vec<Post>) {
        let db = Self::new().await;
        let posts = PostFaker::new().generate(count);
        db.insert_posts(&posts).await;
        (db, posts)
    }

    pub async fn insert_posts(&self, posts: &[Post]) {
        let mut tx = self.pool.begin().await.expect("failed to begin transaction");
        for post in posts {
            sqlx::query(
                "INSERT INTO posts (id, author_id, title, content, upvotes, downvotes) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(post.id)
            .bind(post.author_id)
            .bind(post.title.as_str())
            .bind(post.content.as_str())
            .bind(post.upvotes)
            .bind(post.downvotes)
            .execute(&mut *tx)
            .await
            .expect("failed to insert post");
        }
        tx.commit().await.expect("failed to commit posts");
        tracing::debug!(count = posts.len(), "seeded posts");
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every post, ordered by id.
    pub fn posts_source(&self) -> SqlxSource<Post, Sqlite> {
        SqlxSource::for_entity(self.pool.clone(), Dialect::Sqlite)
            .expect("post identifiers are valid")
    }
}
