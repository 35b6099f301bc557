//! PokéAPI client.
//!
//! Three requests cover everything dexcli does: one Pokémon by name or id,
//! the species record the Pokémon links to (genus and flavor text live
//! there), and the bulk name listing that feeds the suggestion matcher.
//! A 404 on the Pokémon endpoint is a lookup miss, not an error.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Page size for the bulk name listing. The catalog holds ~1300 entries,
/// so a single oversized page fetches all of them, matching how the
/// listing endpoint is meant to be paged through.
pub const NAME_LIST_LIMIT: u32 = 100_000;

/// Outcome of a Pokémon lookup.
#[derive(Debug)]
pub enum Lookup {
    Found(Pokemon),
    NotFound,
}

/// HTTP client bound to one catalog base URL.
pub struct PokeApi {
    base: Url,
    http: reqwest::Client,
}

impl PokeApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("dexcli/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { base, http })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), path)
    }

    /// Look up one Pokémon by name or numeric id.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> Result<Lookup> {
        let url = self.endpoint(&format!("pokemon/{}", name_or_id));
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {} failed: {}\n{}", url, status, body);
        }

        let pokemon: Pokemon = resp
            .json()
            .await
            .with_context(|| format!("parse response from {}", url))?;
        Ok(Lookup::Found(pokemon))
    }

    /// Fetch the species record via the absolute URL the Pokémon record
    /// carries. The species holds genus and flavor text.
    pub async fn fetch_species(&self, species_url: &str) -> Result<Species> {
        let resp = self
            .http
            .get(species_url)
            .send()
            .await
            .with_context(|| format!("GET {}", species_url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {} failed: {}\n{}", species_url, status, body);
        }

        resp.json()
            .await
            .with_context(|| format!("parse response from {}", species_url))
    }

    /// Fetch every known Pokémon name, in catalog order.
    pub async fn fetch_names(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&format!("pokemon?limit={}", NAME_LIST_LIMIT));
        let listing = self.fetch_listing(&url).await?;
        Ok(listing.results.into_iter().map(|r| r.name).collect())
    }

    /// Cheap reachability check; returns the catalog's total entry count.
    pub async fn probe(&self) -> Result<u64> {
        let url = self.endpoint("pokemon?limit=1");
        let listing = self.fetch_listing(&url).await?;
        Ok(listing.count)
    }

    async fn fetch_listing(&self, url: &str) -> Result<NamedList> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("GET {} failed: {}\n{}", url, status, body);
        }

        resp.json()
            .await
            .with_context(|| format!("parse response from {}", url))
    }
}

// =============================================================================
// Wire types (only the fields dexcli displays)
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres, as the catalog stores it
    pub height: u32,
    /// Hectograms, as the catalog stores it
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub species: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub struct Species {
    pub name: String,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct FlavorEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct NamedList {
    count: u64,
    results: Vec<NamedResource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = PokeApi::new("https://pokeapi.co/api/v2", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint("pokemon/pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );

        let api = PokeApi::new("https://pokeapi.co/api/v2/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.endpoint("pokemon?limit=1"),
            "https://pokeapi.co/api/v2/pokemon?limit=1"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        assert!(PokeApi::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn pokemon_deserializes_from_catalog_shape() {
        let raw = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ],
            "abilities": [
                {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true, "slot": 3}
            ],
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#;
        let p: Pokemon = serde_json::from_str(raw).unwrap();
        assert_eq!(p.id, 25);
        assert_eq!(p.name, "pikachu");
        assert_eq!(p.base_experience, Some(112));
        assert_eq!(p.types[0].kind.name, "electric");
        assert_eq!(p.stats[1].base_stat, 90);
        assert!(p.abilities[1].is_hidden);
        assert!(p.species.url.contains("pokemon-species/25"));
    }

    #[test]
    fn null_base_experience_is_accepted() {
        // Newer catalog entries carry null base_experience.
        let raw = r#"{
            "id": 10001,
            "name": "deoxys-attack",
            "height": 17,
            "weight": 608,
            "base_experience": null,
            "types": [],
            "stats": [],
            "abilities": [],
            "species": {"name": "deoxys", "url": "https://pokeapi.co/api/v2/pokemon-species/386/"}
        }"#;
        let p: Pokemon = serde_json::from_str(raw).unwrap();
        assert_eq!(p.base_experience, None);
    }

    #[test]
    fn species_deserializes_and_defaults_missing_lists() {
        let raw = r#"{
            "name": "pikachu",
            "genera": [
                {"genus": "ねずみポケモン", "language": {"name": "ja-Hrkt", "url": "https://pokeapi.co/api/v2/language/1/"}},
                {"genus": "Mouse Pokémon", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
            ],
            "flavor_text_entries": [
                {"flavor_text": "When several of\nthese POKéMON\fgather...", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
            ]
        }"#;
        let s: Species = serde_json::from_str(raw).unwrap();
        assert_eq!(s.genera.len(), 2);
        assert_eq!(s.flavor_text_entries.len(), 1);

        let bare: Species = serde_json::from_str(r#"{"name": "missingno"}"#).unwrap();
        assert!(bare.genera.is_empty());
        assert!(bare.flavor_text_entries.is_empty());
    }

    #[test]
    fn listing_deserializes_names_in_order() {
        let raw = r#"{
            "count": 1302,
            "next": null,
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let l: NamedList = serde_json::from_str(raw).unwrap();
        assert_eq!(l.count, 1302);
        assert_eq!(l.results[0].name, "bulbasaur");
        assert_eq!(l.results[1].name, "ivysaur");
    }
}
