use super::*;

fn product_in(category: Option<&str>) -> Product {
    Product {
        category: category.map(|c| c.to_string()),
        ..Default::default()
    }
}

fn values(categories: &[CategoryFilter]) -> Vec<&str> {
    categories.iter().map(|c| c.value()).collect()
}

#[test]
fn test_empty_catalog_yields_only_all() {
    assert_eq!(unique_categories(&[]), vec![CategoryFilter::All]);
}

#[test]
fn test_categories_are_sorted_after_all() {
    let products = vec![
        product_in(Some("Office")),
        product_in(Some("Kitchen")),
        product_in(Some("Garden")),
    ];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "Garden", "Kitchen", "Office"]);
}

#[test]
fn test_duplicates_collapse() {
    let products = vec![
        product_in(Some("Kitchen")),
        product_in(Some("Kitchen")),
        product_in(Some("Office")),
    ];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "Kitchen", "Office"]);
}

#[test]
fn test_missing_and_empty_categories_are_skipped() {
    let products = vec![product_in(None), product_in(Some("")), product_in(Some("Toys"))];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "Toys"]);
}

#[test]
fn test_case_variants_are_distinct() {
    let products = vec![product_in(Some("kitchen")), product_in(Some("Kitchen"))];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "kitchen", "Kitchen"]);
}

#[test]
fn test_ordering_ignores_case_first() {
    let products = vec![product_in(Some("banana")), product_in(Some("Apple"))];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "Apple", "banana"]);
}

#[test]
fn test_literal_all_category_is_not_duplicated() {
    let products = vec![product_in(Some("all")), product_in(Some("Books"))];
    let result = unique_categories(&products);
    assert_eq!(values(&result), vec!["all", "Books"]);
}

#[test]
fn test_from_str_maps_sentinel() {
    assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from("Office"),
        CategoryFilter::Named("Office".to_string())
    );
}

#[test]
fn test_labels() {
    assert_eq!(CategoryFilter::All.label(), "All categories");
    assert_eq!(CategoryFilter::Named("Office".to_string()).label(), "Office");
}

#[test]
fn test_accepts_is_case_sensitive() {
    let filter = CategoryFilter::Named("Kitchen".to_string());
    assert!(filter.accepts(&product_in(Some("Kitchen"))));
    assert!(!filter.accepts(&product_in(Some("kitchen"))));
    assert!(!filter.accepts(&product_in(None)));
}

#[test]
fn test_accented_categories_sort_by_base_letter() {
    let products = vec![
        product_in(Some("Zubehör")),
        product_in(Some("Électronique")),
        product_in(Some("Jardin")),
    ];
    let result = unique_categories(&products);
    assert_eq!(
        values(&result),
        vec!["all", "Électronique", "Jardin", "Zubehör"]
    );
}

#[test]
fn test_unaccented_variant_sorts_before_accented() {
    assert_eq!(locale_compare("Cafe", "Café"), Ordering::Less);
    assert_eq!(locale_compare("café", "Cafe"), Ordering::Greater);
    assert_eq!(locale_compare("éclair", "Eclair"), Ordering::Greater);
}
