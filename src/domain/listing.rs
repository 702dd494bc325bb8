/// One restaurant row scraped from a bookmark listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    // Where the row came from: 1-based listing page, 0-based DOM order within it
    pub page: u32,
    pub position: usize,

    pub name: String,
    pub address: String,
    pub district: String,
    pub rating: String,
    pub price: String,
}

impl ListingRecord {
    /// Output columns, in file order (the row index column is written separately).
    pub const COLUMNS: [&'static str; 5] =
        ["restaurant_name", "address", "district", "rating", "price"];

    pub fn fields(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.district.as_str(),
            self.rating.as_str(),
            self.price.as_str(),
        ]
    }
}

/// The five per-field lists pulled out of one page, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldLists {
    pub names: Vec<String>,
    pub addresses: Vec<String>,
    pub districts: Vec<String>,
    pub ratings: Vec<String>,
    pub prices: Vec<String>,
}

impl FieldLists {
    pub fn counts(&self) -> [usize; 5] {
        [
            self.names.len(),
            self.addresses.len(),
            self.districts.len(),
            self.ratings.len(),
            self.prices.len(),
        ]
    }

    pub fn is_aligned(&self) -> bool {
        let counts = self.counts();
        counts.iter().all(|&c| c == counts[0])
    }
}
