use crate::config::OutputFormat;
use crate::domain::ListingRecord;
use crate::spreadsheets::{write_listings, write_listings_to};
use crate::tests::utils::temp_path;

fn record(position: usize, name: &str, price: &str) -> ListingRecord {
    ListingRecord {
        page: 1,
        position,
        name: name.to_string(),
        address: "2 Ice House Street".to_string(),
        district: "Central".to_string(),
        rating: "4.5".to_string(),
        price: price.to_string(),
    }
}

#[test]
fn csv_has_index_column_and_header() {
    let records = vec![record(0, "Mak's Noodle", "$51-100"), record(1, "Luk Yu", "$201-400")];

    let mut out = Vec::new();
    write_listings_to(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text,
        ",restaurant_name,address,district,rating,price\n\
         0,Mak's Noodle,2 Ice House Street,Central,4.5,$51-100\n\
         1,Luk Yu,2 Ice House Street,Central,4.5,$201-400\n"
    );
}

#[test]
fn csv_quotes_fields_that_need_it() {
    let records = vec![record(0, "Tsui Wah, Central", "\"cheap\"")];

    let mut out = Vec::new();
    write_listings_to(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text.lines().nth(1).unwrap(),
        r#"0,"Tsui Wah, Central",2 Ice House Street,Central,4.5,"""cheap""""#
    );
}

#[test]
fn empty_run_still_writes_header() {
    let mut out = Vec::new();
    write_listings_to(&mut out, &[]).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        ",restaurant_name,address,district,rating,price\n"
    );
}

#[test]
fn write_overwrites_existing_file_and_creates_dirs() {
    let dir = temp_path("export");
    let path = dir.join("nested").join("openrice_yellow.csv");

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "stale contents\nfrom an earlier run\n").unwrap();

    write_listings(&path, &[record(0, "Lin Heung", "$51-100")], OutputFormat::Csv).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.lines().count(), 2);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let dir = temp_path("xlsx");
    let path = dir.join("openrice_blue.xlsx");

    write_listings(
        &path,
        &[record(0, "Lin Heung", "$51-100"), record(1, "Kau Kee", "$51-100")],
        OutputFormat::Xlsx,
    )
    .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // xlsx is a zip archive
    assert_eq!(&bytes[..2], b"PK");

    std::fs::remove_dir_all(dir).ok();
}
