use sitemapgen::{
    GenerateOptions, SiteMapError, SiteMapFormat, SiteMapOptions, TemporaryFileManager, generate,
};
use spectral::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use url::Url;

#[tokio::test]
async fn duplicate_names_are_rejected() {
    let mut files = TemporaryFileManager::new();
    files.new_temp_file("sitemap-0.xml").expect("file is created");

    let result = files.new_temp_file("sitemap-0.xml");

    assert_that(&matches!(
        result,
        Err(SiteMapError::DuplicateResourceName(_))
    ))
    .is_true();
}

#[tokio::test]
async fn unknown_names_are_not_found() {
    let files = TemporaryFileManager::new();

    let result = files.create_read_stream_for_name("missing.xml").await;

    assert_that(&matches!(result, Err(SiteMapError::ResourceNotFound(_)))).is_true();
}

#[tokio::test]
async fn written_content_can_be_read_back() {
    let mut files = TemporaryFileManager::new();
    files.new_temp_file("notes.txt").expect("file is created");

    let mut writer = files
        .create_write_stream_for_name("notes.txt")
        .await
        .expect("write stream opens");
    writer.write_all(b"hello").await.expect("content is written");
    writer.shutdown().await.expect("stream closes");

    let mut contents = String::new();
    files
        .create_read_stream_for_name("notes.txt")
        .await
        .expect("read stream opens")
        .read_to_string(&mut contents)
        .await
        .expect("content is read");

    assert_that(&contents).is_equal_to("hello".to_owned());
}

#[tokio::test]
async fn delete_removes_file_from_disk() {
    let mut files = TemporaryFileManager::new();
    let path = files
        .new_temp_file("gone.xml")
        .expect("file is created")
        .path()
        .to_path_buf();

    files.delete("gone.xml").expect("file is deleted");

    assert_that(&path.exists()).is_false();
    assert_that(&files.files().len()).is_equal_to(0_usize);
}

#[tokio::test]
async fn persist_moves_file_into_place() {
    let directory = tempfile::tempdir().expect("temp dir is created");
    let mut files = TemporaryFileManager::new_in(directory.path());
    files.new_temp_file("kept.xml").expect("file is created");
    let destination = directory.path().join("kept.xml");

    let persisted = files
        .persist("kept.xml", &destination)
        .expect("file is persisted");

    assert_that(&persisted).is_equal_to(destination.clone());
    assert_that(&destination.exists()).is_true();
    assert_that(&files.file("kept.xml").is_err()).is_true();
}

#[tokio::test]
async fn cleanup_removes_every_file() {
    let mut files = TemporaryFileManager::new();
    let first = files
        .new_temp_file("a.xml")
        .expect("file is created")
        .path()
        .to_path_buf();
    let second = files
        .new_temp_file("b.xml")
        .expect("file is created")
        .path()
        .to_path_buf();

    files.cleanup();

    assert_that(&first.exists()).is_false();
    assert_that(&second.exists()).is_false();
    assert_that(&files.files().len()).is_equal_to(0_usize);
}

#[tokio::test]
async fn generate_writes_index_and_partitions() {
    let directory = tempfile::tempdir().expect("temp dir is created");
    let input = directory.path().join("urls.txt");
    let output = directory.path().join("out");
    tokio::fs::write(
        &input,
        concat!(
            "# pages\n",
            "http://www.example.com/a.html\n",
            "\n",
            "http://www.example.com/b.html\n",
            r#"{"loc": "http://www.example.com/c.html", "changefreq": "daily", "priority": 0.8}"#,
            "\n",
            "http://www.example.com/d.html\n",
            "http://www.example.com/e.html\n",
        ),
    )
    .await
    .expect("input is written");

    let options = GenerateOptions {
        entries_limit: 2,
        public_url: Some(Url::parse("https://cdn.example.com/maps").expect("valid url")),
        ..GenerateOptions::default()
    };
    let summary = generate(&input, &output, options)
        .await
        .expect("sitemaps are generated");

    assert_that(&summary.entries).is_equal_to(5_usize);
    assert_that(&summary.site_maps).is_equal_to(vec![
        output.join("sitemap-0.xml"),
        output.join("sitemap-1.xml"),
        output.join("sitemap-2.xml"),
    ]);
    assert_that(&summary.index).is_equal_to(output.join("sitemap.xml"));

    let index = tokio::fs::read_to_string(&summary.index)
        .await
        .expect("index is readable");
    assert_that(&index.matches("<sitemap>").count()).is_equal_to(3_usize);
    assert_that(&index.as_str()).contains("<loc>https://cdn.example.com/maps/sitemap-2.xml</loc>");

    let second = tokio::fs::read_to_string(output.join("sitemap-1.xml"))
        .await
        .expect("sitemap is readable");
    assert_that(&second.as_str()).contains(
        "<url><loc>http://www.example.com/c.html</loc><changefreq>daily</changefreq><priority>0.8</priority></url>",
    );

    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(&output).await.expect("output is listable");
    while let Some(entry) = entries.next_entry().await.expect("entry is readable") {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    assert_that(&names).is_equal_to(vec![
        "sitemap-0.xml".to_owned(),
        "sitemap-1.xml".to_owned(),
        "sitemap-2.xml".to_owned(),
        "sitemap.xml".to_owned(),
    ]);
}

#[tokio::test]
async fn generate_writes_text_partitions() {
    let directory = tempfile::tempdir().expect("temp dir is created");
    let input = directory.path().join("urls.txt");
    tokio::fs::write(&input, "http://www.example.com/a.html\nhttp://www.example.com/b.html\n")
        .await
        .expect("input is written");

    let options = GenerateOptions {
        site_map: SiteMapOptions::default().with_format(SiteMapFormat::Text),
        ..GenerateOptions::default()
    };
    let summary = generate(&input, directory.path(), options)
        .await
        .expect("sitemaps are generated");

    let text = tokio::fs::read_to_string(directory.path().join("sitemap-0.txt"))
        .await
        .expect("sitemap is readable");
    assert_that(&text).is_equal_to(
        "http://www.example.com/a.html\r\nhttp://www.example.com/b.html\r\n".to_owned(),
    );
    assert_that(&summary.site_maps).has_length(1);
}

#[tokio::test]
async fn generate_reports_the_failing_line() {
    let directory = tempfile::tempdir().expect("temp dir is created");
    let input = directory.path().join("urls.txt");
    let output = directory.path().join("out");
    tokio::fs::write(
        &input,
        "http://www.example.com/a.html\n{\"loc\": \"http://www.example.com/b.html\", \"priority\": 2}\n",
    )
    .await
    .expect("input is written");

    let result = generate(&input, &output, GenerateOptions::default()).await;

    let message = if let Err(SiteMapError::InvalidEntry(message)) = result {
        message
    } else {
        String::new()
    };
    assert_that(&message.as_str()).starts_with("line 2:");
    assert_that(&output.join("sitemap.xml").exists()).is_false();
}

#[tokio::test]
async fn generate_reports_the_line_outside_base_url() {
    let directory = tempfile::tempdir().expect("temp dir is created");
    let input = directory.path().join("urls.txt");
    tokio::fs::write(
        &input,
        "http://www.example.com/a.html\nhttp://other.example.org/b.html\n",
    )
    .await
    .expect("input is written");

    let result = generate(&input, &directory.path().join("out"), GenerateOptions::default()).await;

    let message = if let Err(SiteMapError::InvalidEntry(message)) = result {
        message
    } else {
        String::new()
    };
    assert_that(&message.as_str()).starts_with("line 2:");
    assert_that(&message.as_str()).contains("is not under http://www.example.com/");
}
