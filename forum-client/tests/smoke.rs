use std::time::{SystemTime, UNIX_EPOCH};

use forum_client::ForumClient;

fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock must be after unix epoch")
        .as_nanos();
    format!("{nanos}")
}

#[tokio::test]
#[ignore = "requires running HTTP server and database"]
async fn http_smoke_flow() {
    let base_url =
        std::env::var("FORUM_HTTP_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let mut client = ForumClient::new(base_url);

    let suffix = unique_suffix();
    let email = format!("smoke_{suffix}@example.com");
    let password = "password123";

    let register = client
        .register("Smoke", "Tester", &email, password)
        .await
        .expect("register must succeed");
    assert!(!register.access_token.is_empty());
    assert_eq!(register.user.email, email);
    assert!(client.get_token().is_some());

    let login = client
        .login(&email, password)
        .await
        .expect("login must succeed");
    assert_eq!(login.user.email, email);
    let author_id = login.user.id;

    let title = format!("smoke topic {suffix}");
    let created = client
        .create_topic(
            author_id,
            &title,
            "smoke content",
            &["smoke".to_string()],
        )
        .await
        .expect("create_topic must succeed");
    assert_eq!(created.title, title);
    assert_eq!(created.author_id, author_id);

    // the author's post list now carries exactly this topic id
    let profile = client.me().await.expect("me must succeed");
    assert_eq!(profile.posts, vec![created.id]);

    let found = client
        .find_topic(&title)
        .await
        .expect("find_topic must succeed")
        .expect("topic must be found");
    assert_eq!(found.id, created.id);

    let listed = client.list_topics().await.expect("list_topics must succeed");
    assert!(listed.iter().any(|topic| topic.id == created.id));

    let new_title = format!("smoke topic renamed {suffix}");
    let renamed = client
        .rename_topic(&title, &new_title)
        .await
        .expect("rename_topic must succeed")
        .expect("renamed topic must be returned");
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.title, new_title);

    // renaming a title that no longer exists yields null, not an error
    let missing = client
        .rename_topic(&title, "whatever")
        .await
        .expect("rename of missing title must not error");
    assert!(missing.is_none());

    let confirmation = client
        .delete_topic(&new_title)
        .await
        .expect("delete_topic must succeed");
    assert_eq!(confirmation, "Topic successfully deleted");

    // deleting again still answers with the fixed confirmation
    let confirmation = client
        .delete_topic(&new_title)
        .await
        .expect("repeat delete must succeed");
    assert_eq!(confirmation, "Topic successfully deleted");

    let gone = client
        .find_topic(&new_title)
        .await
        .expect("find_topic must succeed");
    assert!(gone.is_none());
}
