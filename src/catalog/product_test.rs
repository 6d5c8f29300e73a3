use super::*;

#[test]
fn test_deserialize_full_record() {
    let json = r#"{
        "id": "mug-1",
        "title": "Red Mug",
        "description": "Ceramic",
        "category": "Kitchen",
        "image": "img/mug.png",
        "affiliateUrl": "https://example.com/mug"
    }"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.id(), "mug-1");
    assert_eq!(product.title(), "Red Mug");
    assert_eq!(product.category(), "Kitchen");
    assert_eq!(product.affiliate_url(), "https://example.com/mug");
}

#[test]
fn test_deserialize_missing_fields_as_empty() {
    let product: Product = serde_json::from_str("{}").unwrap();
    assert_eq!(product.id(), "");
    assert_eq!(product.title(), "");
    assert_eq!(product.description(), "");
    assert_eq!(product.category(), "");
    assert!(product.non_empty_category().is_none());
}

#[test]
fn test_deserialize_numeric_id() {
    let product: Product = serde_json::from_str(r#"{"id": 42}"#).unwrap();
    assert_eq!(product.id(), "42");
}

#[test]
fn test_deserialize_null_id() {
    let product: Product = serde_json::from_str(r#"{"id": null}"#).unwrap();
    assert!(product.id.is_none());
}

#[test]
fn test_empty_category_is_not_listed() {
    let product: Product = serde_json::from_str(r#"{"category": ""}"#).unwrap();
    assert!(product.non_empty_category().is_none());
}

#[test]
fn test_serialize_uses_affiliate_url_key() {
    let product = Product {
        affiliate_url: Some("https://example.com".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&product).unwrap();
    assert_eq!(json, r#"{"affiliateUrl":"https://example.com"}"#);
}

#[test]
fn test_deserialize_non_string_text_fields() {
    let json = r#"{"title": 7, "description": true, "category": 3}"#;
    let product: Product = serde_json::from_str(json).unwrap();
    assert_eq!(product.title(), "7");
    assert_eq!(product.description(), "true");
    assert_eq!(product.category(), "3");
}
