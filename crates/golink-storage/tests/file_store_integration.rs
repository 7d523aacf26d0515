use golink_core::{codec, AliasStore, Mapping, StoreError};
use golink_storage::{default_mapping, FileFormat, FileStore, SeededStore};
use tempfile::TempDir;

fn sample() -> Mapping {
    Mapping::try_from_pairs([
        ("youtube", "https://youtube.com"),
        ("docs", "https://docs.rs/tokio/latest/tokio/?search=fs:read"),
        ("google", "https://google.com"),
    ])
    .unwrap()
}

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("links.txt"));

    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn text_file_round_trips_order() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("links.txt"));

    store.save(&sample()).await.unwrap();

    assert_eq!(store.load().await.unwrap(), sample());
    let on_disk = tokio::fs::read_to_string(store.path()).await.unwrap();
    assert_eq!(on_disk.trim_end(), codec::format(&sample()));
}

#[tokio::test]
async fn json_file_round_trips_order() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("links.json"));
    assert_eq!(store.format(), FileFormat::Json);

    store.save(&sample()).await.unwrap();

    assert_eq!(store.load().await.unwrap(), sample());
    let on_disk = tokio::fs::read_to_string(store.path()).await.unwrap();
    let youtube = on_disk.find("youtube").unwrap();
    let google = on_disk.find("\"google\"").unwrap();
    assert!(youtube < google);
}

#[tokio::test]
async fn save_creates_parent_directories_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("golink").join("links.txt");
    let store = FileStore::new(&path);

    store.save(&sample()).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["links.txt"]);
}

#[tokio::test]
async fn concurrent_saves_all_succeed_and_leave_a_complete_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.txt");

    for _ in 0..20 {
        let saves = (0..8).map(|i| {
            let store = FileStore::new(&path);
            let mapping = Mapping::try_from_pairs([(
                format!("link{i}"),
                format!("https://{i}.example.com"),
            )])
            .unwrap();
            tokio::spawn(async move { store.save(&mapping).await })
        });
        for save in saves.collect::<Vec<_>>() {
            save.await.unwrap().unwrap();
        }
    }

    assert_eq!(FileStore::new(&path).load().await.unwrap().len(), 1);
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[tokio::test]
async fn hand_edited_file_with_bad_line_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.txt");
    tokio::fs::write(&path, "google:https://google.com\nbroken line\n")
        .await
        .unwrap();

    let err = FileStore::new(&path).load().await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(msg) if msg.contains("line 2")));
}

#[tokio::test]
async fn text_export_can_migrate_into_json() {
    let dir = TempDir::new().unwrap();
    let text = FileStore::new(dir.path().join("links.txt"));
    let json = FileStore::new(dir.path().join("links.json"));

    text.save(&sample()).await.unwrap();
    json.save(&text.load().await.unwrap()).await.unwrap();

    assert_eq!(json.load().await.unwrap(), sample());
}

#[tokio::test]
async fn seeded_file_store_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("links.txt");
    let store = SeededStore::new(FileStore::new(&path));

    assert_eq!(store.load().await.unwrap(), default_mapping());
    let on_disk = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(
        on_disk,
        "google:https://google.com\nyoutube:https://youtube.com\n"
    );

    store.save(&sample()).await.unwrap();
    assert_eq!(store.load().await.unwrap(), sample());
}
