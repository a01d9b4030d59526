//! File Import
//!
//! Decodes external files concurrently. Each decode owns its own result
//! slot; results are merged only after every decode has finished.

use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::{DomainResult, SourceFile};
use super::Workspace;

/// A file handed in from outside the virtual file system (file picker,
/// drag-in from the desktop, ...)
#[async_trait(?Send)]
pub trait RawFileSource {
    fn name(&self) -> String;

    /// Decode the file as text
    async fn read_text(&self) -> DomainResult<String>;
}

/// Decode every source into a new top-level file
///
/// Output order follows input order regardless of which decode finishes
/// first. Sources that fail to decode are skipped.
pub async fn decode_files<R: RawFileSource>(sources: &[R]) -> Vec<SourceFile> {
    let decodes = sources.iter().map(|source| async move {
        let name = source.name();
        match source.read_text().await {
            Ok(content) => Some(SourceFile::new(&name, content, None)),
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "skipping file that could not be read");
                None
            }
        }
    });
    join_all(decodes).await.into_iter().flatten().collect()
}

impl Workspace {
    /// Append decoded files; returns the id of the first one
    pub fn add_imported(&mut self, files: Vec<SourceFile>) -> Option<String> {
        let first = files.first().map(|f| f.id.clone());
        tracing::info!(count = files.len(), "files imported");
        for file in files {
            self.push_file(file);
        }
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::cell::RefCell;
    use std::rc::Rc;
    use futures::channel::oneshot;

    /// Source whose content arrives when the test releases it
    struct GatedSource {
        name: &'static str,
        gate: RefCell<Option<oneshot::Receiver<String>>>,
    }

    #[async_trait(?Send)]
    impl RawFileSource for GatedSource {
        fn name(&self) -> String {
            self.name.to_string()
        }

        async fn read_text(&self) -> DomainResult<String> {
            let rx = self.gate.borrow_mut().take().expect("read once");
            rx.await.map_err(|e| DomainError::Internal(e.to_string()))
        }
    }

    struct FailingSource;

    #[async_trait(?Send)]
    impl RawFileSource for FailingSource {
        fn name(&self) -> String {
            "broken.bin".to_string()
        }

        async fn read_text(&self) -> DomainResult<String> {
            Err(DomainError::InvalidInput("not utf-8".into()))
        }
    }

    #[tokio::test]
    async fn test_decode_order_follows_input_not_completion() {
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let sources = vec![
            GatedSource { name: "First.java", gate: RefCell::new(Some(rx_a)) },
            GatedSource { name: "Second.java", gate: RefCell::new(Some(rx_b)) },
        ];
        let order = Rc::new(RefCell::new(Vec::new()));

        // Release the second file before the first
        let release = {
            let order = order.clone();
            async move {
                order.borrow_mut().push("second");
                tx_b.send("class Second {}".to_string()).unwrap();
                order.borrow_mut().push("first");
                tx_a.send("class First {}".to_string()).unwrap();
            }
        };
        let (files, ()) = futures::join!(decode_files(&sources), release);

        assert_eq!(*order.borrow(), vec!["second", "first"]);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "First.java");
        assert_eq!(files[0].content, "class First {}");
        assert_eq!(files[1].name, "Second.java");
        assert!(files.iter().all(|f| f.folder_id.is_none()));
    }

    #[tokio::test]
    async fn test_failed_decode_is_skipped() {
        let files = decode_files(&[FailingSource]).await;
        assert!(files.is_empty());
    }

    #[test]
    fn test_add_imported_returns_first_id() {
        let mut ws = Workspace::new();
        let a = SourceFile::new("a.txt", "a".into(), None);
        let b = SourceFile::new("b.txt", "b".into(), None);
        let first = a.id.clone();

        assert_eq!(ws.add_imported(vec![a, b]), Some(first));
        assert_eq!(ws.files().len(), 2);
        assert_eq!(ws.add_imported(Vec::new()), None);
    }
}
