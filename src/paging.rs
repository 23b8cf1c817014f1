//! Server-side pagination.
//!
//! ARM list operations return one [`Page`] per request: an array under
//! `value` plus an opaque `nextLink` URL when more results exist. [`Pager`]
//! walks those pages lazily - nothing is fetched until the caller asks for
//! the first item, and each page costs exactly one HTTP call.

use futures::stream::Stream;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::azure::client::AzureClient;
use crate::error::Result;

/// One page of a paged collection as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Page<T> {
    /// Items of the current page.
    #[serde(default)]
    pub value: Vec<T>,
    /// Continuation link; absent when the collection is exhausted.
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

/// Lazy, forward-only iterator over all pages of a list operation.
///
/// Not restartable: once drained (or failed) it stays finished. Failure on
/// any page fetch is returned to the caller and halts iteration; items from
/// prior pages are unaffected.
pub struct Pager<T> {
    client: AzureClient,
    /// URL of the next page to fetch; `None` once the collection is drained.
    next_url: Option<String>,
    buffer: std::vec::IntoIter<T>,
}

impl<T: DeserializeOwned> Pager<T> {
    pub(crate) fn new(client: AzureClient, first_url: String) -> Self {
        Self {
            client,
            next_url: Some(first_url),
            buffer: Vec::new().into_iter(),
        }
    }

    /// Yield the next item, fetching the next page when the current one is
    /// drained. `Ok(None)` means the collection is exhausted.
    pub async fn try_next(&mut self) -> Result<Option<T>> {
        loop {
            if let Some(item) = self.buffer.next() {
                return Ok(Some(item));
            }

            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };

            let page = self.fetch_page(&url).await?;
            if let Some(link) = &page.next_link {
                tracing::debug!("page of {} items, more at {}", page.value.len(), link);
            }
            self.buffer = page.value.into_iter();
            self.next_url = page.next_link;
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<Page<T>> {
        let response = self.client.get(url).await?;
        serde_json::from_value(response).map_err(Into::into)
    }

    /// Drain the remaining items into a vector.
    pub async fn all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.try_next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Adapt the pager into a `futures` stream of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>>
    where
        T: 'static,
    {
        futures::stream::try_unfold(self, |mut pager| async move {
            Ok(pager.try_next().await?.map(|item| (item, pager)))
        })
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("next_url", &self.next_url)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
