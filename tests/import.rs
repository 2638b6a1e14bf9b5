use wall_catalog::forms::import::parse_designs_csv;
use wall_catalog::repository::filter::DesignFilter;
use wall_catalog::repository::{DesignListQuery, DesignReader, TaxonomyReader};
use wall_catalog::services::import::import_designs;

mod common;

const CSV: &str = "\
title,short_description,sku,status,category,area_type,price,style,level,is_featured,tags
Oak Panel,Warm <b>wood</b>,OAK-1,published,Living,Indoor,120,rustic,standard,yes,wood
Marble Slab,Cold stone,MAR-1,published,Bathroom,Indoor,300,modern,premium,no,marble;stone
Mixed Wall,,MIX-1,draft,Living,,80,,,,wood;marble
";

#[test]
fn test_csv_import_populates_catalog() {
    let test_db = common::TestDb::new("test_csv_import_populates_catalog.db");
    let repo = test_db.repo();

    let rows = parse_designs_csv(CSV.as_bytes()).unwrap();
    assert_eq!(import_designs(&repo, rows).unwrap(), 3);

    let categories = repo.list_categories().unwrap();
    assert_eq!(
        categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Bathroom", "Living"]
    );
    assert_eq!(repo.list_area_types().unwrap().len(), 1);
    assert_eq!(repo.list_tags().unwrap().len(), 3);

    let (total, items) = repo
        .list_designs(DesignListQuery::new().filter(DesignFilter::FeaturedOnly))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].sku, "OAK-1");
    assert_eq!(items[0].style.as_deref(), Some("rustic"));

    let (_, items) = repo
        .list_designs(DesignListQuery::new().filter(DesignFilter::Search("MIX".into())))
        .unwrap();
    assert_eq!(items[0].tag_ids.len(), 2);
    assert!(items[0].area_type_id.is_none());
}
