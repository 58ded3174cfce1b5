use catalog::db;
use catalog::models::{Author, Book, author, book};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

// Helper to persist an author and read back the stored row
async fn save_author(db: &DatabaseConnection, author: Author) -> Author {
    let model = author::ActiveModel::from(author)
        .insert(db)
        .await
        .expect("Failed to insert author");
    Author::from(model)
}

async fn save_book(db: &DatabaseConnection, book: Book) -> Book {
    let model = book::ActiveModel::from(book)
        .insert(db)
        .await
        .expect("Failed to insert book");
    Book::from(model)
}

fn jane() -> Author {
    Author::builder()
        .first_name("Jane")
        .last_name("Doe")
        .language("en")
        .build()
}

#[tokio::test]
async fn test_storage_assigns_author_ids() {
    let db = setup_test_db().await;

    let first = save_author(&db, jane()).await;
    let second = save_author(&db, Author::default()).await;

    let first_id = first.author_id().expect("id assigned on insert");
    let second_id = second.author_id().expect("id assigned on insert");
    assert_ne!(first_id, second_id);

    assert_eq!(first.first_name(), Some("Jane"));
    assert_eq!(first.last_name(), Some("Doe"));
    assert_eq!(first.language(), Some("en"));
    assert_eq!(second.first_name(), None);
}

#[tokio::test]
async fn test_author_hydrates_book_through_relation() {
    let db = setup_test_db().await;

    let author = save_author(&db, jane()).await;
    let author_id = author.author_id().unwrap();
    let saved = save_book(&db, Book::new(None, Some("T".to_string()), Some(author))).await;

    let row = author::Entity::find_by_id(author_id)
        .find_also_related(book::Entity)
        .one(&db)
        .await
        .expect("query failed")
        .expect("author row missing");
    let loaded = Author::from(row);

    assert_eq!(loaded.author_id(), Some(author_id));
    let linked = loaded.book().expect("book back-reference");
    assert_eq!(linked.book_id(), saved.book_id());
    assert_eq!(linked.title(), Some("T"));
    assert_eq!(
        linked.author().and_then(|a| a.author_id()),
        Some(author_id)
    );

    // The author payload still leaves the book out
    let json = serde_json::to_value(&loaded).unwrap();
    assert!(json.get("book").is_none());
    assert_eq!(json["authorId"], author_id);
}

#[tokio::test]
async fn test_book_hydrates_owning_author() {
    let db = setup_test_db().await;

    let author = save_author(&db, jane()).await;
    let saved = save_book(&db, Book::new(None, Some("T".to_string()), Some(author))).await;
    let book_id = saved.book_id().unwrap();

    let row = book::Entity::find_by_id(book_id)
        .find_also_related(author::Entity)
        .one(&db)
        .await
        .expect("query failed")
        .expect("book row missing");
    let loaded = Book::from(row);

    assert_eq!(loaded.author().and_then(|a| a.first_name()), Some("Jane"));
    let back = loaded
        .author()
        .and_then(|a| a.book())
        .expect("author should point back at its book");
    assert_eq!(back.book_id(), Some(book_id));

    let json = serde_json::to_string(&loaded).unwrap();
    assert_eq!(json.matches("\"bookId\"").count(), 1);
    assert_eq!(json.matches("\"firstName\"").count(), 1);
}

#[tokio::test]
async fn test_author_without_book() {
    let db = setup_test_db().await;

    let author = save_author(&db, jane()).await;
    let row = author::Entity::find_by_id(author.author_id().unwrap())
        .find_also_related(book::Entity)
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    assert!(Author::from(row).book().is_none());
}

#[tokio::test]
async fn test_author_side_does_not_persist_book() {
    let db = setup_test_db().await;

    let author = Author::builder()
        .first_name("Jane")
        .book(Book::new(None, Some("Never stored".to_string()), None))
        .build();
    save_author(&db, author).await;

    let books = book::Entity::find().all(&db).await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_author_is_linked_to_at_most_one_book() {
    let db = setup_test_db().await;

    let author = save_author(&db, jane()).await;
    save_book(&db, Book::new(None, Some("First".to_string()), Some(author.clone()))).await;

    let second = book::ActiveModel::from(Book::new(None, Some("Second".to_string()), Some(author)))
        .insert(&db)
        .await;
    assert!(second.is_err());

    let books = book::Entity::find().all(&db).await.unwrap();
    assert_eq!(books.len(), 1);
}
