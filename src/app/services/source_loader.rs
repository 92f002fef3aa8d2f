//! Input resolution and reading of the category tables
//!
//! The command line names either one directory holding the conventionally
//! named tables or the four table files explicitly. The four files are read
//! concurrently; parsing happens afterwards on the in-memory text.

use crate::app::models::Category;
use crate::app::services::catalog_assembler::CatalogSources;
use crate::config::CatalogConfig;
use crate::constants::STDIN_SOURCE_NAME;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Where the four tables come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// A directory containing the conventionally named files
    Directory(PathBuf),
    /// Explicit paths in catalog order
    Files(CategoryPaths),
}

/// One path per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPaths {
    pub pipe_materials: PathBuf,
    pub valves: PathBuf,
    pub fixtures: PathBuf,
    pub mixing_valves: PathBuf,
}

impl CategoryPaths {
    /// Path for one category
    pub fn path(&self, category: Category) -> &Path {
        match category {
            Category::Pipes => &self.pipe_materials,
            Category::Valves => &self.valves,
            Category::Fixtures => &self.fixtures,
            Category::MixingValves => &self.mixing_valves,
        }
    }
}

impl InputSpec {
    /// Interpret positional arguments: one directory or four files
    pub fn from_paths(paths: &[PathBuf]) -> Result<Self> {
        match paths {
            [directory] => Ok(InputSpec::Directory(directory.clone())),
            [pipe_materials, valves, fixtures, mixing_valves] => {
                Ok(InputSpec::Files(CategoryPaths {
                    pipe_materials: pipe_materials.clone(),
                    valves: valves.clone(),
                    fixtures: fixtures.clone(),
                    mixing_valves: mixing_valves.clone(),
                }))
            }
            _ => Err(Error::usage(format!(
                "expected 1 directory or 4 files, got {} path(s)",
                paths.len()
            ))),
        }
    }

    /// Resolve to one path per category using the configured file names
    pub fn resolve(&self, config: &CatalogConfig) -> Result<CategoryPaths> {
        match self {
            InputSpec::Directory(directory) => {
                if !directory.is_dir() {
                    return Err(Error::configuration(format!(
                        "Input path is not a directory: {}",
                        directory.display()
                    )));
                }

                Ok(CategoryPaths {
                    pipe_materials: directory.join(&config.pipe_materials_file),
                    valves: directory.join(&config.valves_file),
                    fixtures: directory.join(&config.fixtures_file),
                    mixing_valves: directory.join(&config.mixing_valves_file),
                })
            }
            InputSpec::Files(paths) => Ok(paths.clone()),
        }
    }
}

/// Read all four tables concurrently
pub async fn load_sources(paths: &CategoryPaths) -> Result<CatalogSources> {
    info!("Reading catalog tables");

    let (pipe_materials, valves, fixtures, mixing_valves) = tokio::try_join!(
        read_table(&paths.pipe_materials),
        read_table(&paths.valves),
        read_table(&paths.fixtures),
        read_table(&paths.mixing_valves),
    )?;

    Ok(CatalogSources {
        pipe_materials,
        valves,
        fixtures,
        mixing_valves,
    })
}

/// Read one table from a file
pub async fn read_table(path: &Path) -> Result<String> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Read one table from a file, or from standard input when no path is given
pub async fn read_table_or_stdin(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_table(path).await,
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| Error::io(format!("Failed to read {}", STDIN_SOURCE_NAME), e))?;

            debug!("Read {} bytes from {}", text.len(), STDIN_SOURCE_NAME);
            Ok(text)
        }
    }
}
