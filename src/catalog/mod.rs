//! Static region-to-name catalog.
//!
//! A [`RegionCatalog`] maps each region of the quiz to its acceptable
//! indigenous names. It is built once at session start, validated at
//! construction, and immutable for the session's lifetime.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub mod error;

pub use error::CatalogError;

/// A geographic unit with one or more acceptable correct names.
///
/// # Example
///
/// ```rust
/// use rohe::catalog::Region;
///
/// let region = Region::new("Southland", ["Murihiku"]);
/// assert_eq!(region.id, "Southland");
/// assert_eq!(region.names, vec!["Murihiku".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier, e.g. `"Northland"`.
    pub id: String,
    /// Acceptable correct names. Invariant: non-empty, distinct, non-blank.
    pub names: Vec<String>,
}

impl Region {
    /// Create a region from an id and its acceptable names.
    pub fn new<I, S>(id: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Region {
            id: id.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable mapping from region id to acceptable names.
///
/// Regions keep their insertion order, so [`all_regions`](Self::all_regions)
/// is deterministic and tests can rely on a stable sequence.
///
/// # Example
///
/// ```rust
/// use rohe::catalog::{Region, RegionCatalog};
///
/// let catalog = RegionCatalog::new(vec![
///     Region::new("Otago", ["Ōtākou"]),
///     Region::new("Canterbury", ["Waitaha"]),
/// ])?;
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.acceptable_names("Otago")?, &["Ōtākou".to_string()]);
/// # Ok::<(), rohe::catalog::CatalogError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RegionCatalog {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl RegionCatalog {
    /// Build a catalog, validating every region.
    ///
    /// Rejects duplicate region ids, regions with no names, blank names,
    /// and names repeated within one region. Two *different* regions may
    /// legitimately share a name.
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(regions.len());

        for (position, region) in regions.iter().enumerate() {
            if index.insert(region.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateRegion(region.id.clone()));
            }
            if region.names.is_empty() {
                return Err(CatalogError::NoNames(region.id.clone()));
            }

            let mut seen = HashSet::new();
            for name in &region.names {
                if name.trim().is_empty() {
                    return Err(CatalogError::BlankName(region.id.clone()));
                }
                if !seen.insert(name.as_str()) {
                    return Err(CatalogError::DuplicateName {
                        region: region.id.clone(),
                        name: name.clone(),
                    });
                }
            }
        }

        Ok(RegionCatalog { regions, index })
    }

    /// The canonical fourteen-region table the quiz ships with.
    ///
    /// Region ids are the English names; the acceptable answers are the
    /// Māori names.
    pub fn aotearoa() -> Self {
        Self::new(vec![
            Region::new("Northland", ["Te Tai Tokerau"]),
            Region::new("Auckland", ["Tāmaki Makaurau"]),
            Region::new("Waikato", ["Waikato"]),
            Region::new("Bay of Plenty", ["Te Moana-a-Toitehuatahi"]),
            Region::new("Gisborne", ["Tūranganui-a-Kiwa"]),
            Region::new("Hawke's Bay", ["Te Matau-a-Māui"]),
            Region::new("Taranaki", ["Taranaki"]),
            Region::new("Manawatu", ["Manawatū-Whanganui"]),
            Region::new("Wellington", ["Te Whanganui-a-Tara"]),
            Region::new("Marlborough", ["Te Tauihu-o-te-waka"]),
            Region::new("West Coast", ["Te Tai Poutini"]),
            Region::new("Canterbury", ["Waitaha"]),
            Region::new("Otago", ["Ōtākou"]),
            Region::new("Southland", ["Murihiku"]),
        ])
        .expect("built-in region table is valid")
    }

    /// All regions in insertion order.
    pub fn all_regions(&self) -> &[Region] {
        &self.regions
    }

    /// Acceptable names for a region.
    ///
    /// Fails with [`CatalogError::UnknownRegion`] if the id is absent.
    pub fn acceptable_names(&self, region_id: &str) -> Result<&[String], CatalogError> {
        self.index
            .get(region_id)
            .map(|&position| self.regions[position].names.as_slice())
            .ok_or_else(|| CatalogError::UnknownRegion(region_id.to_string()))
    }

    /// Every acceptable name across all regions, in catalog order.
    ///
    /// Used as the distractor pool. Duplicates appear only when two
    /// regions legitimately share a name.
    pub fn all_names_flattened(&self) -> Vec<&str> {
        self.regions
            .iter()
            .flat_map(|region| region.names.iter().map(String::as_str))
            .collect()
    }

    /// Whether the catalog contains a region with this id.
    pub fn contains(&self, region_id: &str) -> bool {
        self.index.contains_key(region_id)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the catalog holds no regions at all.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
