use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A learning resource in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    /// Unique title, also the key used for completions
    pub title: String,
    pub description: String,
    pub link: String,
    /// Labels compared against requested topics
    pub tags: Vec<String>,
}

impl Resource {
    pub fn new(title: &str, description: &str, link: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Tags lowercased for comparison with normalized topics
    pub fn normalized_tags(&self) -> HashSet<String> {
        self.tags.iter().map(|t| t.to_lowercase()).collect()
    }
}

/// A resource as returned to the client, with its relevance score in place of tags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoredResource {
    pub title: String,
    pub description: String,
    pub link: String,
    pub score: u32,
}

impl ScoredResource {
    pub fn from_resource(resource: &Resource, score: u32) -> Self {
        Self {
            title: resource.title.clone(),
            description: resource.description.clone(),
            link: resource.link.clone(),
            score,
        }
    }
}

/// The fixed set of resources recommendations are drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate titles
    pub fn new(resources: Vec<Resource>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for resource in &resources {
            if !seen.insert(resource.title.as_str()) {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate resource title in catalog: {}",
                    resource.title
                )));
            }
        }
        Ok(Self { resources })
    }

    /// The built-in starter catalog
    pub fn builtin() -> Self {
        Self {
            resources: vec![
                Resource::new(
                    "Flask Basics",
                    "Learn web development with Flask",
                    "https://flask.palletsprojects.com/",
                    &["python", "web", "flask"],
                ),
                Resource::new(
                    "Django Overview",
                    "Batteries-included web framework",
                    "https://www.djangoproject.com/",
                    &["python", "web", "django"],
                ),
                Resource::new(
                    "Pandas Intro",
                    "Data analysis library",
                    "https://pandas.pydata.org/",
                    &["python", "data", "pandas"],
                ),
                Resource::new(
                    "React Docs",
                    "Build UIs with React",
                    "https://react.dev/",
                    &["javascript", "react", "frontend"],
                ),
                Resource::new(
                    "Node.js Guides",
                    "Server-side JS runtime",
                    "https://nodejs.org/en/learn",
                    &["javascript", "node", "backend"],
                ),
            ],
        }
    }

    /// Loads a catalog from a JSON array of resources
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let resources: Vec<Resource> = serde_json::from_str(&raw)?;
        Self::new(resources)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
