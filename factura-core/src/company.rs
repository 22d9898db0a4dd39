//! Issuer identity printed on the letterhead.
//!
//! The defaults are compiled in; a deployment can override them with a
//! small TOML file instead of recompiling:
//!
//! ```toml
//! name = "Agrícola León Lara S.C."
//! tax_id = "J91305503"
//! address_lines = [
//!     "C/ Alcade José de la Bandera 15, 1ºC",
//!     "41003 Sevilla",
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub tax_id: String,
    pub address_lines: Vec<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: "Agrícola León Lara S.C.".to_string(),
            tax_id: "J91305503".to_string(),
            address_lines: vec![
                "C/ Alcade José de la Bandera 15, 1ºC".to_string(),
                "41003 Sevilla".to_string(),
                "Sevilla".to_string(),
                "Tel: 954 000 000".to_string(),
                "Email: administracion@agricolaleonlara.es".to_string(),
            ],
        }
    }
}

impl CompanyProfile {
    /// Load a profile override from a TOML file. Missing keys fall
    /// back to the compiled-in defaults.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ProfileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Lines printed under the company name, tax id first.
    pub fn letterhead_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.address_lines.len() + 1);
        lines.push(format!("CIF: {}", self.tax_id));
        lines.extend(self.address_lines.iter().cloned());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_complete() {
        let profile = CompanyProfile::default();
        assert_eq!(profile.name, "Agrícola León Lara S.C.");
        assert_eq!(profile.tax_id, "J91305503");
        assert!(!profile.address_lines.is_empty());
    }

    #[test]
    fn letterhead_starts_with_tax_id() {
        let lines = CompanyProfile::default().letterhead_lines();
        assert_eq!(lines[0], "CIF: J91305503");
    }

    #[test]
    fn toml_overrides_with_defaults_for_missing_keys() {
        let parsed: CompanyProfile = toml::from_str("name = \"Otra Empresa S.L.\"").unwrap();
        assert_eq!(parsed.name, "Otra Empresa S.L.");
        // Missing keys keep the compiled-in values.
        assert_eq!(parsed.tax_id, "J91305503");
    }

    #[test]
    fn toml_round_trip() {
        let profile = CompanyProfile::default();
        let text = toml::to_string(&profile).unwrap();
        let back: CompanyProfile = toml::from_str(&text).unwrap();
        assert_eq!(back.name, profile.name);
        assert_eq!(back.address_lines, profile.address_lines);
    }
}
