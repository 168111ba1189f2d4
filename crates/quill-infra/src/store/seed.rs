//! Sample content loaded into a fresh store at start-up.

use chrono::{Duration, Utc};

use quill_core::domain::{Post, PostDraft};

/// The two demonstration posts, created three and two days ago.
pub fn sample_posts() -> Vec<Post> {
    let now = Utc::now();

    let welcome = PostDraft {
        title: "Welcome to Our Professional Blog".to_string(),
        content: "This is a sample blog post to get things started. Our new CMS provides a \
                  clean, modern interface for both readers and content creators. With \
                  features like categories, tags, and a responsive design, we're ready to \
                  deliver great content to our audience."
            .to_string(),
        author: "Admin".to_string(),
        excerpt: "A warm welcome to our new blog platform with enhanced features".to_string(),
        published: true,
        tags: vec!["welcome".into(), "blog".into(), "update".into()],
        image_url: "/static/images/sample-blog.jpg".to_string(),
    };

    let webdev = PostDraft {
        title: "The Future of Web Development".to_string(),
        content: "Web development continues to evolve at a rapid pace. With new frameworks, \
                  tools, and methodologies emerging regularly, developers must stay current \
                  to remain competitive. In this post, we explore the latest trends and what \
                  they mean for the future of web development."
            .to_string(),
        author: "Jane Developer".to_string(),
        excerpt: "Exploring the latest trends in web development and what's coming next"
            .to_string(),
        published: true,
        tags: vec!["webdev".into(), "technology".into(), "programming".into()],
        image_url: "/static/images/webdev.jpg".to_string(),
    };

    vec![
        Post::from_draft(1, welcome, now - Duration::hours(72)),
        Post::from_draft(2, webdev, now - Duration::hours(48)),
    ]
}
