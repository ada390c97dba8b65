use std::io::Write;

use crate::catalog::Catalog;
use crate::errors::CatalogError;
use crate::recommend::Recommender;

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
pub fn test_load_csv() {
    let file = csv_file(
        "name,description\n\
         Alien,\"A crew in deep space meets a deadly creature.\"\n\
         Aliens, Marines return to the planet to fight the creature.\n\
         Heat,A detective hunts a crew of bank robbers.\n",
    );

    let catalog = Catalog::load_csv(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.resolve("aliens"), Some(1));
    assert_eq!(
        catalog.get(1).unwrap().description,
        "Marines return to the planet to fight the creature."
    );

    let recommender = Recommender::new(catalog).unwrap();
    let recs = recommender.recommend("ALIEN", 2).unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|rec| rec.name != "Alien"));
}

#[test]
pub fn test_load_csv_empty() {
    let file = csv_file("name,description\n");
    assert!(matches!(
        Catalog::load_csv(file.path()),
        Err(CatalogError::Empty)
    ));
}

#[test]
pub fn test_load_csv_duplicates() {
    let file = csv_file("name,description\nHeat,one\nheat,two\n");
    assert!(matches!(
        Catalog::load_csv(file.path()),
        Err(CatalogError::DuplicateName(_))
    ));
}

#[test]
pub fn test_load_csv_missing_column() {
    let file = csv_file("title,plot\nHeat,robbers\n");
    assert!(matches!(
        Catalog::load_csv(file.path()),
        Err(CatalogError::Csv(_))
    ));
}

#[test]
pub fn test_load_csv_missing_file() {
    assert!(Catalog::load_csv("/definitely/not/here/movies.csv").is_err());
}
