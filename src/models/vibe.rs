use serde::{Deserialize, Serialize};

/// A travel-style preference tag a user can pick in the trip builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vibe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

impl Vibe {
    pub fn new(id: &str, name: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}
