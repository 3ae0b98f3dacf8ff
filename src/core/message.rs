use super::models::ArticleInfo;

const ANNOUNCEMENT_HEADER: &str = "新しいブログ記事を投稿しました🐣";

/// Builds the tweet text for a newly published post.
///
/// The post URL is `blog_url` followed directly by the slug; no separator is
/// inserted.
#[must_use]
pub fn compose_announcement(article: &ArticleInfo, blog_url: &str) -> String {
    format!(
        "{ANNOUNCEMENT_HEADER}\n\n「{}」\n{blog_url}{}",
        article.title, article.slug
    )
}
