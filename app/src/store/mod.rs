#[cfg(feature = "ssr")]
pub mod errors;
mod project;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use project::Project;
#[cfg(feature = "ssr")]
pub use project::Document;

/// Read-only client for the document store that owns the project records.
///
/// The store exposes collections of documents over HTTP; this client only
/// ever consumes the ordered-read and read-by-id capabilities. Writes,
/// auth, and transactions are owned by the admin dashboard, not this site.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(base_url: String, collection: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: String::from(base_url.trim_end_matches('/')),
            collection,
        }
    }

    /// Every project in the collection, most recently created first.
    ///
    /// The ordering is done by the store; the result is returned in
    /// response order and never re-sorted locally.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = format!(
            "{}/collections/{}/documents?order_by=createdAt&direction=desc",
            self.base_url, self.collection,
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::Http {
                error,
                url: url.clone(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status, url });
        }
        let listing: DocumentListing =
            response.json().await.map_err(|error| Error::Http {
                error,
                url: url.clone(),
            })?;

        log::debug!("{} document(s) in `{}'", listing.documents.len(), self.collection);

        listing
            .documents
            .into_iter()
            .map(Project::decode)
            .collect()
    }

    pub async fn get_project(&self, id: &str) -> Result<Project> {
        let url = format!(
            "{}/collections/{}/documents/{}",
            self.base_url, self.collection, id,
        );
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| Error::Http {
                error,
                url: url.clone(),
            })?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                id: String::from(id),
            });
        }
        if !status.is_success() {
            return Err(Error::Status { status, url });
        }
        let document: Document = response.json().await.map_err(|error| Error::Http {
            error,
            url: url.clone(),
        })?;
        Project::decode(document)
    }
}

#[cfg(feature = "ssr")]
#[derive(serde::Deserialize, Debug)]
struct DocumentListing {
    #[serde(default)]
    documents: Vec<Document>,
}
