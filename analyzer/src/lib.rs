use digest_core::persist::load_json;
use digest_core::words::body_word_count;
use digest_core::{Dataset, Post, Result, Summary};
use std::collections::HashSet;
use std::path::Path;

pub mod report;

pub use report::{read_report, write_report};

/// Load the dataset at `path` and compute its summary.
pub fn analyze_file(path: &Path) -> Result<Summary> {
    let json = load_json(path)?;
    let dataset = Dataset::from_value(json, path)?;
    dataset.require_fields()?;
    let summary = summarize(&dataset.posts);
    tracing::info!(
        total_posts = summary.total_posts,
        unique_users = summary.unique_users,
        average_words = summary.average_words_per_post,
        "data analysis complete"
    );
    Ok(summary)
}

/// Like [`analyze_file`], but any failure is logged and reported as the zero
/// summary.
pub fn analyze_or_zero(path: &Path) -> Summary {
    analyze_file(path).unwrap_or_else(|err| {
        tracing::error!(error = %err, "error analyzing data");
        Summary::default()
    })
}

/// Single pass over the posts. Records without a `userId` do not count as a
/// user; records without a string body count as zero words but still weigh in
/// the average.
pub fn summarize(posts: &[Post]) -> Summary {
    if posts.is_empty() {
        return Summary::default();
    }
    let mut users: HashSet<String> = HashSet::new();
    let mut words = 0usize;
    for post in posts {
        if let Some(key) = post.user_key() {
            users.insert(key);
        }
        words += body_word_count(post.body.as_ref());
    }
    Summary {
        total_posts: posts.len(),
        unique_users: users.len(),
        average_words_per_post: words as f64 / posts.len() as f64,
    }
}
