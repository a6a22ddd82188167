use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned record identifier.
pub type RecordId = i64;

/// Schema descriptor for one resource kind.
///
/// Implementors are plain records: an optional identifier plus a fixed set of
/// scalar fields. `apply` is the only per-kind logic the service needs.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Collection name, also the HTTP root (`/authors`).
    const COLLECTION: &'static str;
    /// Singular name used in messages.
    const KIND: &'static str;

    fn id(&self) -> Option<RecordId>;

    fn set_id(&mut self, id: Option<RecordId>);

    /// Overwrite every scalar field with the value carried by `payload`,
    /// zero values included. The identifier of `self` is kept.
    fn apply(&mut self, payload: Self);
}

/// JSON `null` decodes like an absent field: the type's zero value.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nationality: String,
}

impl Author {
    pub fn new(name: impl Into<String>, nationality: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), nationality: nationality.into() }
    }
}

impl Resource for Author {
    const COLLECTION: &'static str = "authors";
    const KIND: &'static str = "author";

    fn id(&self) -> Option<RecordId> { self.id }

    fn set_id(&mut self, id: Option<RecordId>) { self.id = id; }

    fn apply(&mut self, payload: Self) {
        let Author { id: _, name, nationality } = payload;
        self.name = name;
        self.nationality = nationality;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Free text; not linked to any `Author` record.
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_year: i32,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self { id: None, title: title.into(), author: author.into(), publication_year }
    }
}

impl Resource for Book {
    const COLLECTION: &'static str = "books";
    const KIND: &'static str = "book";

    fn id(&self) -> Option<RecordId> { self.id }

    fn set_id(&mut self, id: Option<RecordId>) { self.id = id; }

    fn apply(&mut self, payload: Self) {
        let Book { id: _, title, author, publication_year } = payload;
        self.title = title;
        self.author = author;
        self.publication_year = publication_year;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<RecordId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into() }
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const KIND: &'static str = "user";

    fn id(&self) -> Option<RecordId> { self.id }

    fn set_id(&mut self, id: Option<RecordId>) { self.id = id; }

    fn apply(&mut self, payload: Self) {
        let User { id: _, name, email } = payload;
        self.name = name;
        self.email = email;
    }
}
