use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::Nullable;
use super::book::{self, Book};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub author_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub language: Option<String>,
}

/// Authors sit on the inverse side of the one-to-one link: the foreign key
/// lives on `books.author_id`.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::book::Entity")]
    Book,
}

impl Related<super::book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Author record as seen by the rest of the application.
///
/// `book` is a navigational back-reference. It is never serialized and never
/// written to storage; the owning [`Book`] carries the link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    author_id: Option<i32>,
    first_name: Option<String>,
    last_name: Option<String>,
    language: Option<String>,
    #[serde(skip)]
    book: Option<Box<Book>>,
}

impl Author {
    pub fn new(
        author_id: Option<i32>,
        first_name: Option<String>,
        last_name: Option<String>,
        language: Option<String>,
        book: Option<Book>,
    ) -> Self {
        Self {
            author_id,
            first_name,
            last_name,
            language,
            book: book.map(Box::new),
        }
    }

    pub fn builder() -> AuthorBuilder {
        AuthorBuilder::default()
    }

    /// Storage-assigned key, `None` until the row has been inserted.
    pub fn author_id(&self) -> Option<i32> {
        self.author_id
    }

    pub fn set_author_id(&mut self, author_id: Option<i32>) {
        self.author_id = author_id;
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, first_name: Option<String>) {
        self.first_name = first_name;
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, last_name: Option<String>) {
        self.last_name = last_name;
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn book(&self) -> Option<&Book> {
        self.book.as_deref()
    }

    pub fn set_book(&mut self, book: Option<Book>) {
        self.book = book.map(Box::new);
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Author [authorId={}, firstName={}, lastName={}, language={}, book={}]",
            Nullable(self.author_id.as_ref()),
            Nullable(self.first_name.as_deref()),
            Nullable(self.last_name.as_deref()),
            Nullable(self.language.as_deref()),
            Nullable(self.book.as_deref()),
        )
    }
}

/// Collects author fields one at a time before producing the record.
#[derive(Debug, Default)]
pub struct AuthorBuilder {
    author: Author,
}

impl AuthorBuilder {
    pub fn author_id(mut self, author_id: i32) -> Self {
        self.author.author_id = Some(author_id);
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.author.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.author.last_name = Some(last_name.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.author.language = Some(language.into());
        self
    }

    pub fn book(mut self, book: Book) -> Self {
        self.author.book = Some(Box::new(book));
        self
    }

    pub fn build(self) -> Author {
        self.author
    }
}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            author_id: Some(model.author_id),
            first_name: model.first_name,
            last_name: model.last_name,
            language: model.language,
            book: None,
        }
    }
}

// Shape returned by `Entity::find().find_also_related(book::Entity)`.
impl From<(Model, Option<book::Model>)> for Author {
    fn from((model, book): (Model, Option<book::Model>)) -> Self {
        let mut author = Author::from(model);
        if let Some(book) = book {
            // The book's owning reference gets a copy of this author with no
            // book, so the values stay acyclic.
            let mut book = Book::from(book);
            book.set_author(Some(author.clone()));
            author.book = Some(Box::new(book));
        }
        author
    }
}

impl From<Author> for ActiveModel {
    fn from(author: Author) -> Self {
        Self {
            author_id: author.author_id.map_or(NotSet, Set),
            first_name: Set(author.first_name),
            last_name: Set(author.last_name),
            language: Set(author.language),
        }
    }
}
