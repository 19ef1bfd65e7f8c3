use blog_client::{BlogClientError, BlogClientHttp, BlogClientTrait};
use blog_server::infrastructure::config::AppConfig;
use blog_server::server::{build_post_service, start_rest_server};

#[actix_web::test]
async fn serves_posts_until_stopped() {
    let config = AppConfig {
        port: 0,
        ..AppConfig::default()
    };
    let (server, addrs) = start_rest_server(&config, build_post_service(&config)).unwrap();
    let handle = server.handle();
    let running = actix_web::rt::spawn(server);

    let client = BlogClientHttp::connect(&format!("http://{}", addrs[0])).unwrap();

    let seeded = client.list_posts().await.unwrap();
    assert!(!seeded.is_empty());

    let created = client
        .create_post("xyz".into(), "uhaielfbw,fwe,dikalenfa".into(), "abc".into())
        .await
        .unwrap();
    assert_eq!(created.title, "xyz");
    assert_eq!(client.list_posts().await.unwrap().len(), seeded.len() + 1);

    client
        .update_post(created.id, "new".into(), "body".into(), "someone".into())
        .await
        .unwrap();
    let fetched = client.get_post(created.id).await.unwrap();
    assert_eq!(fetched.title, "new");
    assert_eq!(fetched.publish_date, created.publish_date);

    let err = client
        .create_post("t".into(), "c".into(), String::new())
        .await
        .unwrap_err();
    assert!(matches!(err, BlogClientError::InvalidRequest(msg) if msg.contains("author")));

    client.delete_post(created.id).await.unwrap();
    assert!(matches!(
        client.get_post(created.id).await,
        Err(BlogClientError::NotFound)
    ));

    handle.stop(true).await;
    running.await.unwrap().unwrap();
}
