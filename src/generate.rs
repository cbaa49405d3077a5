//! The generate module writes a sitemap index and its sitemaps to a directory
//! from a file of entries.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use log::{info, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use url::Url;

use crate::constants::{DEFAULT_ENTRIES_LIMIT, DEFAULT_INDEX_NAME, DEFAULT_SIZE_LIMIT};
use crate::error::{Result, SiteMapError};
use crate::index::{GeneratedSiteMap, SiteMapFactory, SiteMapIndexOptions};
use crate::parse::parse_entry_line;
use crate::sitemap::{SiteMap, SiteMapOptions};
use crate::storage::TemporaryFileManager;

/// Options of a [`generate`] run.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub site_map: SiteMapOptions,
    pub entries_limit: usize,
    pub size_limit: usize,
    /// File name of the sitemap index inside the output directory.
    pub index_name: String,
    /// Prefix for sitemap locations in the index; bare file names when absent.
    pub public_url: Option<Url>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            site_map: SiteMapOptions::default(),
            entries_limit: DEFAULT_ENTRIES_LIMIT,
            size_limit: DEFAULT_SIZE_LIMIT,
            index_name: DEFAULT_INDEX_NAME.to_owned(),
            public_url: None,
        }
    }
}

/// Outcome of a [`generate`] run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub entries: usize,
    pub site_maps: Vec<PathBuf>,
    pub index: PathBuf,
}

/// Name of the sitemap at position `index` inside the output directory.
pub fn site_map_file_name(index: usize, options: &SiteMapOptions) -> String {
    format!("sitemap-{index}.{}", options.format.extension())
}

/// Writes sitemaps to temporary files next to their final location.
struct FileSiteMapFactory {
    files: TemporaryFileManager,
    options: SiteMapOptions,
    public_url: Option<Url>,
    completed: Vec<String>,
}

impl FileSiteMapFactory {
    fn location(&self, file_name: &str) -> Result<String> {
        match &self.public_url {
            Some(base) => base
                .join(file_name)
                .map(String::from)
                .map_err(|e| SiteMapError::Configuration(format!("Invalid public url: {e}"))),
            None => Ok(file_name.to_owned()),
        }
    }
}

#[async_trait]
impl SiteMapFactory for FileSiteMapFactory {
    type Sink = BufWriter<File>;

    async fn generate(&mut self, index: usize) -> Result<GeneratedSiteMap<Self::Sink>> {
        let file_name = site_map_file_name(index, &self.options);
        self.files.new_temp_file(&file_name)?;
        let sink = BufWriter::new(self.files.create_write_stream_for_name(&file_name).await?);

        let mut site_map = SiteMap::new(sink, self.options.clone());
        site_map.initialize().await?;

        let location = self.location(&file_name)?;
        Ok(GeneratedSiteMap::new(index, site_map, location)
            .with_last_modified(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)))
    }

    async fn done(&mut self, generated: GeneratedSiteMap<Self::Sink>) -> Result<()> {
        let mut sink = generated.site_map.into_inner();
        sink.shutdown().await?;
        self.completed
            .push(site_map_file_name(generated.index, &self.options));
        Ok(())
    }
}

/// Ensures `url` ends with `/` so sitemap names are joined below it.
fn directory_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Reads entries from `input` and writes the sitemap index and every sitemap into
/// `output_dir`.
///
/// Files are written to temporary files inside `output_dir` and only moved into place
/// once the whole index is complete, so a failed run leaves no partial output.
///
/// # Arguments
///
/// * `input` - File with one entry per line, see [`parse_entry_line`]
/// * `output_dir` - Directory receiving the index and sitemaps, created if missing
/// * `options` - Sitemap format, base URL, limits and naming
///
/// # Errors
///
/// Returns an error if:
/// * An input line cannot be parsed or is rejected by the sitemap, reported as
///   [`SiteMapError::InvalidEntry`] with its line number
/// * File operations fail
pub async fn generate(
    input: &Path,
    output_dir: &Path,
    options: GenerateOptions,
) -> Result<GenerateSummary> {
    tokio::fs::create_dir_all(output_dir).await?;

    let mut files = TemporaryFileManager::new_in(output_dir);
    files.new_temp_file(&options.index_name)?;
    let index_sink = BufWriter::new(files.create_write_stream_for_name(&options.index_name).await?);

    let factory = FileSiteMapFactory {
        files,
        options: options.site_map.clone(),
        public_url: options.public_url.map(directory_url),
        completed: Vec::new(),
    };
    let mut index = SiteMapIndexOptions::new(factory)
        .with_entries_limit(options.entries_limit)
        .with_size_limit(options.size_limit)
        .build(index_sink)?;
    index.initialize().await?;

    info!("Generating sitemaps from {} into {}", input.display(), output_dir.display());

    let mut lines = BufReader::new(File::open(input).await?).lines();
    let mut line_number = 0;
    let mut entries = 0;
    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let entry = match parse_entry_line(&line) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(error) => {
                return Err(SiteMapError::InvalidEntry(format!(
                    "line {line_number}: {error}"
                )));
            }
        };
        index.add(&entry, &[]).await.map_err(|error| match error {
            SiteMapError::Io(_) => error,
            rejected => SiteMapError::InvalidEntry(format!("line {line_number}: {rejected}")),
        })?;
        entries += 1;
    }

    if entries == 0 {
        warn!("No entries found in {}, writing an empty index", input.display());
    }
    index.done().await?;

    let (mut index_sink, mut factory) = index.into_parts();
    index_sink.shutdown().await?;

    let mut site_maps = Vec::with_capacity(factory.completed.len());
    for name in &factory.completed {
        site_maps.push(factory.files.persist(name, &output_dir.join(name))?);
    }
    let index_path = factory
        .files
        .persist(&options.index_name, &output_dir.join(&options.index_name))?;

    info!("Generated {} sitemaps with {entries} entries", site_maps.len());
    Ok(GenerateSummary {
        entries,
        site_maps,
        index: index_path,
    })
}
