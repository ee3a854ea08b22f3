//! In-memory remote sources.
//!
//! Every artifact handed out is tied to an [`ArtifactProbe`] shared by name,
//! so tests can assert how often an artifact was streamed and released across
//! any number of sync runs.

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use modsync_core::{BoxedArtifact, Error, RemoteArtifact, RemoteSource, Result};

/// Counts calls made against one artifact name.
#[derive(Debug, Default)]
pub struct ArtifactProbe {
    writes: AtomicUsize,
    closes: AtomicUsize,
}

impl ArtifactProbe {
    /// Number of `write_to` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of `close` calls.
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
struct Template {
    name: String,
    content: Vec<u8>,
    fail_write: bool,
    fail_close: bool,
}

/// An artifact backed by a byte vector.
#[derive(Debug)]
pub struct MemoryArtifact {
    template: Template,
    probe: Arc<ArtifactProbe>,
}

impl RemoteArtifact for MemoryArtifact {
    fn name(&self) -> &str {
        &self.template.name
    }

    fn size(&self) -> u64 {
        self.template.content.len() as u64
    }

    fn write_to(&mut self, sink: &mut dyn Write) -> io::Result<u64> {
        self.probe.writes.fetch_add(1, Ordering::SeqCst);
        if self.template.fail_write {
            return Err(io::Error::other("injected write failure"));
        }
        sink.write_all(&self.template.content)?;
        Ok(self.template.content.len() as u64)
    }

    fn close(&mut self) -> io::Result<()> {
        self.probe.closes.fetch_add(1, Ordering::SeqCst);
        if self.template.fail_close {
            return Err(io::Error::other("injected close failure"));
        }
        Ok(())
    }
}

/// A remote source serving a fixed set of in-memory artifacts.
///
/// # Example
///
/// ```rust,no_run
/// use modsync_test_utils::MemorySource;
///
/// let source = MemorySource::new()
///     .with_sized("a.jar", 100)
///     .with_failing_write("broken.jar", 10);
/// ```
#[derive(Debug, Default)]
pub struct MemorySource {
    templates: Vec<Template>,
    probes: HashMap<String, Arc<ArtifactProbe>>,
    listing_error: Option<String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, template: Template) -> Self {
        self.probes
            .entry(template.name.clone())
            .or_insert_with(|| Arc::new(ArtifactProbe::default()));
        self.templates.push(template);
        self
    }

    /// Serve `name` with the given content.
    pub fn with_artifact(self, name: &str, content: &[u8]) -> Self {
        self.push(Template {
            name: name.to_string(),
            content: content.to_vec(),
            fail_write: false,
            fail_close: false,
        })
    }

    /// Serve `name` as `size` bytes of filler distinct from [`crate::TestModsDir`]'s.
    pub fn with_sized(self, name: &str, size: usize) -> Self {
        self.with_artifact(name, &vec![b'r'; size])
    }

    /// Serve `name`, failing every attempt to stream it.
    pub fn with_failing_write(self, name: &str, size: usize) -> Self {
        self.push(Template {
            name: name.to_string(),
            content: vec![b'r'; size],
            fail_write: true,
            fail_close: false,
        })
    }

    /// Serve `name`, failing every attempt to release it.
    pub fn with_failing_close(self, name: &str, size: usize) -> Self {
        self.push(Template {
            name: name.to_string(),
            content: vec![b'r'; size],
            fail_write: false,
            fail_close: true,
        })
    }

    /// Fail `list_artifacts` with `message`.
    pub fn failing_listing(mut self, message: &str) -> Self {
        self.listing_error = Some(message.to_string());
        self
    }

    /// Probe for `name`.
    ///
    /// # Panics
    /// Panics if the source does not serve `name`.
    pub fn probe(&self, name: &str) -> Arc<ArtifactProbe> {
        self.probes
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("MemorySource: no artifact named {name}"))
    }

    pub fn writes(&self, name: &str) -> usize {
        self.probe(name).writes()
    }

    pub fn closes(&self, name: &str) -> usize {
        self.probe(name).closes()
    }
}

#[async_trait]
impl RemoteSource for MemorySource {
    async fn list_artifacts(&self) -> Result<Vec<BoxedArtifact>> {
        if let Some(message) = &self.listing_error {
            return Err(Error::Remote {
                message: message.clone(),
            });
        }

        Ok(self
            .templates
            .iter()
            .map(|template| {
                Box::new(MemoryArtifact {
                    template: template.clone(),
                    probe: self.probe(&template.name),
                }) as BoxedArtifact
            })
            .collect())
    }
}
