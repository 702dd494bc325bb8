use serde::Deserialize;
use std::path::PathBuf;

/// A bookmark category on the listing site; each one is scraped as a separate pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    pub bpcat_id: u64,
    /// Last page to fetch (pages are 1-based and contiguous)
    pub pages: u32,
    pub output: PathBuf,
}

impl Category {
    pub fn new(name: &str, bpcat_id: u64, pages: u32, output: &str) -> Self {
        Self {
            name: name.to_string(),
            bpcat_id,
            pages,
            output: PathBuf::from(output),
        }
    }

    pub fn yellow() -> Self {
        Self::new("yellow", 880470, 130, "openrice_yellow.csv")
    }

    pub fn blue() -> Self {
        Self::new("blue", 879105, 151, "openrice_blue.csv")
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::yellow(), Self::blue()]
    }
}
