use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    tracing::debug!("Connected to {:?} database", db.get_database_backend());

    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Keys are assigned by the database on insert
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            author_id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT,
            language TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    // books owns the one-to-one link; UNIQUE keeps it one-to-one
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS books (
            book_id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            author_id INTEGER UNIQUE
                REFERENCES authors(author_id) ON UPDATE CASCADE ON DELETE SET NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    tracing::info!("Database schema ready");
    Ok(())
}
