use super::category::locale_compare;
use super::filter::filter_products;
use super::matcher::product_matches;
use super::shuffle::shuffle;
use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;

/// 省略可能なテキストフィールド
fn field_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 ]{0,12}")
}

/// 少数のカテゴリから選ぶ（重複を発生させるため）
fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec![
        "Kitchen".to_string(),
        "kitchen".to_string(),
        "Office".to_string(),
        "Garden".to_string(),
        String::new(),
    ]))
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        field_strategy(),
        field_strategy(),
        field_strategy(),
        category_strategy(),
    )
        .prop_map(|(id, title, description, category)| Product {
            id,
            title,
            description,
            category,
            ..Default::default()
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..20)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{0,4}"
}

proptest! {
    /// 空の検索語では、カテゴリ一致のときだけ一致する
    #[test]
    fn prop_empty_query_matches_iff_same_category(
        product in product_strategy(),
        category in "[A-Za-z]{1,8}"
    ) {
        prop_assume!(category != "all");
        let expected = product.category.as_deref() == Some(category.as_str());
        prop_assert_eq!(
            product_matches(&product, "", &CategoryFilter::Named(category)),
            expected
        );
    }

    /// 空の検索語 + All は常に一致する
    #[test]
    fn prop_empty_query_with_all_always_matches(product in product_strategy()) {
        prop_assert!(product_matches(&product, "", &CategoryFilter::All));
    }

    /// 大文字小文字を区別しない
    #[test]
    fn prop_matching_is_case_insensitive(
        product in product_strategy(),
        query in query_strategy()
    ) {
        let lower = product_matches(&product, &query, &CategoryFilter::All);
        let upper = product_matches(&product, &query.to_uppercase(), &CategoryFilter::All);
        prop_assert_eq!(lower, upper);
    }

    /// 結果は元の順序を保った部分列で、件数は長さと一致する
    #[test]
    fn prop_filter_is_ordered_subsequence(
        catalog in catalog_strategy(),
        query in query_strategy()
    ) {
        let result = filter_products(&catalog, &query, &CategoryFilter::All);
        prop_assert_eq!(result.count(), result.indices.len());
        prop_assert!(result.indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.indices.iter().all(|&i| i < catalog.len()));
        for &i in &result.indices {
            prop_assert!(product_matches(&catalog[i], &query, &CategoryFilter::All));
        }
    }

    /// シャッフルは並べ替えのみで、入力を変更しない
    #[test]
    fn prop_shuffle_is_permutation(
        items in prop::collection::vec(0u32..50, 0..30),
        seed in any::<u64>()
    ) {
        let snapshot = items.clone();
        let mut shuffled = shuffle(&items, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(&items, &snapshot);

        let mut sorted = snapshot.clone();
        sorted.sort();
        shuffled.sort();
        prop_assert_eq!(shuffled, sorted);
    }

    /// カテゴリ一覧は All で始まり、重複がなく、昇順
    #[test]
    fn prop_categories_start_with_all_sorted_unique(catalog in catalog_strategy()) {
        let categories = unique_categories(&catalog);
        prop_assert_eq!(&categories[0], &CategoryFilter::All);

        let names: Vec<&str> = categories[1..].iter().map(|c| c.value()).collect();
        for pair in names.windows(2) {
            prop_assert_eq!(
                locale_compare(pair[0], pair[1]),
                Ordering::Less
            );
        }
        prop_assert!(names.iter().all(|n| !n.is_empty()));
    }
}
