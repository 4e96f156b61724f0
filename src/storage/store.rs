use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use log::{debug, info, warn};

use super::{
    error::{DecodeError, FileAction, PersistError, StoreError},
    product::{Price, Product},
};

/// Backing file used when none is configured
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

type Result<T> = std::result::Result<T, StoreError>;

/// Fields to overwrite on an existing product; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub quantity: Option<i64>,
    pub price: Option<Price>,
}

/// A backing file line that was dropped while loading
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the backing file
    pub number: usize,
    pub content: String,
    pub reason: DecodeError,
}

/// Outcome of reading the backing file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    /// The backing file did not exist and was created empty
    pub created: bool,
    /// Distinct products held after the load
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Snapshot of the inventory for display
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    Empty,
    Products(Vec<&'a Product>),
}

/// Product collection persisted to a flat text file.
///
/// Every mutation rewrites the whole backing file. The in-memory collection is
/// authoritative: a failed rewrite is reported but never rolled back.
pub struct Inventory {
    path: PathBuf,
    products: IndexMap<i64, Product>,
}

impl Inventory {
    /// Creates an empty inventory bound to `path` without touching the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            products: IndexMap::new(),
        }
    }

    /// Creates an inventory bound to `path` and loads it.
    ///
    /// A load failure is returned alongside the inventory, which keeps
    /// whatever was read before the failure.
    pub fn open(
        path: impl Into<PathBuf>,
    ) -> (Self, std::result::Result<LoadSummary, PersistError>) {
        let mut inventory = Self::new(path);
        let status = inventory.load();

        (inventory, status)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Reads the backing file into the collection.
    ///
    /// A missing file is created empty. Blank lines are ignored, lines that
    /// fail to decode are skipped and a later duplicate identifier replaces an
    /// earlier one. Products already in memory are discarded first.
    pub fn load(&mut self) -> std::result::Result<LoadSummary, PersistError> {
        let mut summary = LoadSummary::default();
        self.products.clear();

        if !self.path.exists() {
            File::create(&self.path).map_err(|e| self.persist_error(FileAction::Create, e))?;
            info!("created empty inventory file {}", self.path.display());
            summary.created = true;
            return Ok(summary);
        }

        let file = File::open(&self.path).map_err(|e| self.persist_error(FileAction::Read, e))?;
        let reader = BufReader::new(file);

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| self.persist_error(FileAction::Read, e))?;
            if line.trim().is_empty() {
                continue;
            }

            match Product::try_from(line.as_str()) {
                Ok(product) => {
                    debug!("loaded product {}", product.id);
                    self.products.insert(product.id, product);
                }
                Err(reason) => {
                    warn!("skipping corrupt line {}: {reason}", idx + 1);
                    summary.skipped.push(SkippedLine {
                        number: idx + 1,
                        content: line.trim().to_string(),
                        reason,
                    });
                }
            }
        }

        summary.loaded = self.products.len();
        info!(
            "loaded {} products from {}",
            summary.loaded,
            self.path.display()
        );
        Ok(summary)
    }

    /// Truncates the backing file and writes one line per product.
    pub fn save(&self) -> std::result::Result<(), PersistError> {
        let write = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&self.path)?);
            for product in self.products.values() {
                writeln!(writer, "{}", product.to_line())?;
            }
            writer.flush()
        };

        write().map_err(|e| {
            let err = self.persist_error(FileAction::Write, e);
            warn!("{err}");
            err
        })?;

        debug!(
            "wrote {} products to {}",
            self.products.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(&product.id) {
            return Err(StoreError::Duplicate(product.id));
        }

        self.products.insert(product.id, product);
        self.save()?;
        Ok(())
    }

    /// Applies `update` to product `id`. The file is rewritten even when the
    /// update carries no fields.
    pub fn update(&mut self, id: i64, update: ProductUpdate) -> Result<()> {
        let product = self.products.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = update.price {
            product.price = price;
        }

        self.save()?;
        Ok(())
    }

    pub fn remove(&mut self, id: i64) -> Result<()> {
        self.products
            .shift_remove(&id)
            .ok_or(StoreError::NotFound(id))?;

        self.save()?;
        Ok(())
    }

    /// Products in insertion order, or [Listing::Empty].
    pub fn list(&self) -> Listing<'_> {
        if self.products.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(self.products.values().collect())
        }
    }

    fn persist_error(&self, action: FileAction, err: std::io::Error) -> PersistError {
        PersistError::from_io(&self.path, action, err)
    }
}
