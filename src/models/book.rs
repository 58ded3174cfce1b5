use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::Nullable;
use super::author::{self, Author};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub book_id: i32,
    pub title: Option<String>,
    /// Owning side of the author link. UNIQUE, so an author is referenced
    /// by at most one book.
    #[sea_orm(unique)]
    pub author_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::AuthorId",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for the owning side; emits the nested author when serialized
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BookPayload")]
pub struct Book {
    book_id: Option<i32>,
    title: Option<String>,
    author: Option<Box<Author>>,
}

// Wire shape of an incoming book, before the author's back-reference is set
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BookPayload {
    book_id: Option<i32>,
    title: Option<String>,
    author: Option<Author>,
}

impl From<BookPayload> for Book {
    fn from(payload: BookPayload) -> Self {
        Book::new(payload.book_id, payload.title, payload.author).with_back_reference()
    }
}

impl Book {
    pub fn new(book_id: Option<i32>, title: Option<String>, author: Option<Author>) -> Self {
        Self {
            book_id,
            title,
            author: author.map(Box::new),
        }
    }

    pub fn book_id(&self) -> Option<i32> {
        self.book_id
    }

    pub fn set_book_id(&mut self, book_id: Option<i32>) {
        self.book_id = book_id;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: Option<Author>) {
        self.author = author.map(Box::new);
    }

    /// Points the owned author back at a copy of this book. The copy has no
    /// author of its own, so the values stay acyclic.
    fn with_back_reference(mut self) -> Self {
        if let Some(author) = self.author.as_mut() {
            let parent = Book::new(self.book_id, self.title.clone(), None);
            author.set_book(Some(parent));
        }
        self
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The author is named by key only; printing it in full would print
        // this book again through the author's back-reference.
        let author_id = self.author.as_ref().and_then(|a| a.author_id());
        write!(
            f,
            "Book [bookId={}, title={}, author={}]",
            Nullable(self.book_id.as_ref()),
            Nullable(self.title.as_deref()),
            Nullable(author_id.as_ref()),
        )
    }
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            book_id: Some(model.book_id),
            title: model.title,
            author: None,
        }
    }
}

// Shape returned by `Entity::find().find_also_related(author::Entity)`.
impl From<(Model, Option<author::Model>)> for Book {
    fn from((model, author): (Model, Option<author::Model>)) -> Self {
        let mut book = Book::from(model);
        book.author = author.map(|a| Box::new(Author::from(a)));
        book.with_back_reference()
    }
}

impl From<Book> for ActiveModel {
    fn from(book: Book) -> Self {
        Self {
            book_id: book.book_id.map_or(NotSet, Set),
            title: Set(book.title),
            author_id: Set(book.author.and_then(|a| a.author_id())),
        }
    }
}
