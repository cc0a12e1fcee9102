//! MediaWiki API response types.
//!
//! Cargo returns every field as a string regardless of its declared table
//! type, so the row structs keep String fields and leave numeric parsing to
//! the catalog builder.

use serde::Deserialize;

/// One page of cargo query results
#[derive(Debug, Clone, Deserialize)]
pub struct CargoQueryResponse<T> {
    pub cargoquery: Vec<CargoItem<T>>,
}

/// Wrapper the cargo extension puts around every row
#[derive(Debug, Clone, Deserialize)]
pub struct CargoItem<T> {
    pub title: T,
}

/// Row from the Adventurers table
#[derive(Debug, Clone, Deserialize)]
pub struct AdventurerRow {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "VariationId")]
    pub variation_id: String,
    #[serde(rename = "FullName")]
    pub full_name: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
}

/// Row from the Dragons table
#[derive(Debug, Clone, Deserialize)]
pub struct DragonRow {
    #[serde(rename = "BaseId")]
    pub base_id: String,
    #[serde(rename = "VariationId")]
    pub variation_id: String,
    #[serde(rename = "FullName")]
    pub full_name: String,
}

/// Row from the Wyrmprints table
#[derive(Debug, Clone, Deserialize)]
pub struct WyrmprintRow {
    #[serde(rename = "BaseId")]
    pub base_id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Row from the Weapons table
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponRow {
    #[serde(rename = "BaseId")]
    pub base_id: String,
    #[serde(rename = "FormId")]
    pub form_id: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "ElementalType")]
    pub elemental_type: String,
    #[serde(rename = "Type")]
    pub weapon_type: String,
}

/// One page of the allimages media listing
#[derive(Debug, Clone, Deserialize)]
pub struct AllImagesResponse {
    pub query: AllImagesQuery,
    #[serde(rename = "continue")]
    pub cont: Option<ContinueToken>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllImagesQuery {
    pub allimages: Vec<ImageInfo>,
}

/// Uploaded file entry from the media listing
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub name: String,
    pub url: String,
}

/// Server-supplied pagination token
#[derive(Debug, Clone, Deserialize)]
pub struct ContinueToken {
    pub aicontinue: Option<String>,
}
