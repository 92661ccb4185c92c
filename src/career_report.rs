//! Career-insight report built from r/AskEngineers discussions. This is the
//! content side of the signup funnel: the report is the source material for
//! the guide that subscribers are emailed.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::reddit_client::{Post, RedditClient, RedditError, TopComment};

pub const SUBREDDIT: &str = "askengineers";
pub const SEARCH_TERM: &str = "Career";

// Top posts kept for readability; community comments only for the first few.
const REPORT_POST_LIMIT: usize = 30;
const TOP_COMMENT_LIMIT: usize = 10;
const SELFTEXT_PREVIEW_LINES: usize = 5;

pub struct CareerInsight {
    pub post: Post,
    pub top_comment: Option<TopComment>,
}

pub struct CareerReport {
    pub generated_at: DateTime<Utc>,
    pub insights: Vec<CareerInsight>,
}

/// Assembles a report out of search results, enriching the leading posts
/// with their top community comment. Rate limiting aborts the build; any
/// other comment-fetch failure just leaves that insight without a comment.
#[tracing::instrument(name = "Building career report", skip_all, fields(posts = posts.len()))]
pub async fn build_career_report(
    client: &RedditClient,
    posts: Vec<Post>,
) -> Result<CareerReport, RedditError> {
    let mut insights = Vec::new();
    for (index, post) in posts.into_iter().take(REPORT_POST_LIMIT).enumerate() {
        let top_comment = if index < TOP_COMMENT_LIMIT {
            match client.top_comment(SUBREDDIT, &post.id).await {
                Ok(comment) => comment,
                Err(RedditError::RateLimited) => return Err(RedditError::RateLimited),
                Err(error) => {
                    tracing::error!(
                        error.cause_chain = ?error,
                        error.message = %error,
                        "Failed to fetch the top comment. Skipping.",
                    );
                    None
                }
            }
        } else {
            None
        };
        insights.push(CareerInsight { post, top_comment });
    }
    Ok(CareerReport {
        generated_at: Utc::now(),
        insights,
    })
}

impl CareerReport {
    /// Student-facing plain-text rendition of the report.
    pub fn to_text(&self) -> String {
        let rule = "=".repeat(100);
        let divider = "-".repeat(100);
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", rule));
        out.push_str("ENGINEERING CAREER INSIGHTS - From r/AskEngineers Community\n");
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("Total Posts Analyzed: {}\n", self.insights.len()));
        out.push_str(&format!(
            "Generated: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str("\nGOAL: Provide career guidance for engineering students\n");
        out.push_str(&format!("{}\n\n", rule));

        for (i, insight) in self.insights.iter().enumerate() {
            let post = &insight.post;
            let created = Utc
                .timestamp_opt(post.created_utc as i64, 0)
                .single()
                .map(|instant| instant.format("%b %d, %Y").to_string())
                .unwrap_or_else(|| "N/A".to_string());

            out.push_str(&format!("\n{}\n", divider));
            out.push_str(&format!("INSIGHT #{}: {}\n", i + 1, post.title));
            out.push_str(&format!("{}\n\n", divider));
            out.push_str(&format!("Posted by: u/{}\n", post.author));
            out.push_str(&format!(
                "Engagement: {} upvotes | {} comments\n",
                post.score, post.num_comments
            ));
            out.push_str(&format!("Date: {}\n", created));
            out.push_str(&format!("Link: https://reddit.com{}\n\n", post.permalink));

            if !post.selftext.is_empty() {
                let preview: Vec<&str> = post
                    .selftext
                    .lines()
                    .take(SELFTEXT_PREVIEW_LINES)
                    .collect();
                out.push_str("DISCUSSION:\n");
                out.push_str(&preview.join("\n"));
                out.push('\n');
                if post.selftext.chars().count() > 300 {
                    out.push_str("\n[...more content available at link above...]\n");
                }
            }

            if let Some(comment) = &insight.top_comment {
                out.push_str("\nTOP INSIGHT FROM COMMUNITY:\n");
                out.push_str(&format!(
                    "   By u/{} ({} upvotes)\n",
                    comment.author, comment.score
                ));
                out.push_str(&format!("   \"{}\"\n", comment.body));
            }
            out.push('\n');
        }

        out.push_str(&format!("\n{}\n", rule));
        out.push_str("STUDENT TAKEAWAYS\n");
        out.push_str(&format!("{}\n\n", rule));
        out.push_str(
            "1. CAREER GROWTH: Browse discussions about career transitions, skill development, and industry insights.\n\
             2. SALARY EXPECTATIONS: Find real-world salary ranges and compensation discussions from practicing engineers.\n\
             3. WORK-LIFE BALANCE: Read experiences about job satisfaction, workplace culture, and career satisfaction.\n\
             4. FIELD-SPECIFIC ADVICE: Learn from engineers in various specializations (ME, EE, Civil, etc).\n\
             5. DECISION-MAKING: Get insights to help decide your career path and specialization.\n\n",
        );
        out.push_str(
            "ACTION ITEMS FOR STUDENTS:\n\
             - Visit the full discussion threads (links above) for more detailed conversations\n\
             - Ask follow-up questions in the community threads\n\
             - Connect with engineers in your field of interest\n\
             - Use these insights to plan your internships and specializations\n\n",
        );
        out.push_str(&format!("{}\n", rule));
        out
    }

    /// The analyzed posts as JSON, for downstream processing.
    pub fn to_json(&self) -> Value {
        let posts: Vec<&Post> = self.insights.iter().map(|insight| &insight.post).collect();
        serde_json::to_value(posts).unwrap_or(Value::Null)
    }
}
