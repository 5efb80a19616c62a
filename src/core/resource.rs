//! Listable resources and their record types

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// The entity kinds served by the listing API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    People,
    Planets,
}

impl Resource {
    /// Path segment under the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::People => "people",
            Resource::Planets => "planets",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A record type that can be listed from one [`Resource`] endpoint
pub trait ListResource: for<'de> Deserialize<'de> + Clone + Send + Sync + 'static {
    /// The endpoint serving records of this type
    fn resource() -> Resource;

    /// Display name, also the field that search matches against
    fn name(&self) -> &str;
}

/// A person from the Star Wars universe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub skin_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// URL of the homeworld planet
    #[serde(default)]
    pub homeworld: Option<String>,
    /// Homeworld name, resolved server-side
    #[serde(default)]
    pub homeworld_name: Option<String>,
    #[serde(default)]
    pub films: Vec<String>,
    #[serde(default)]
    pub species: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

const DEFAULT_AVATAR: &str = "/avatars/default.jpg";

impl Person {
    /// Numeric id parsed from the canonical `/people/<id>` url
    pub fn id(&self) -> Option<u32> {
        static PERSON_ID_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PERSON_ID_REGEX.get_or_init(|| {
            Regex::new(r"/people/(\d+)(/|$)").expect("person id pattern is valid")
        });

        let url = self.url.as_deref()?;
        regex
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Static avatar image path for this person
    pub fn avatar_path(&self) -> String {
        match self.id() {
            Some(id) => format!("/avatars/{}.jpeg", id),
            None => DEFAULT_AVATAR.to_string(),
        }
    }
}

impl ListResource for Person {
    fn resource() -> Resource {
        Resource::People
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A planet from the Star Wars universe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(default)]
    pub rotation_period: Option<String>,
    #[serde(default)]
    pub orbital_period: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub gravity: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub surface_water: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ListResource for Planet {
    fn resource() -> Resource {
        Resource::Planets
    }

    fn name(&self) -> &str {
        &self.name
    }
}
