//! Fixed lookup tables: provider type tags to category labels, store-type
//! codes to search phrases and recommended platforms.

/// Provider type tag → human-readable category label. Scanned in the order
/// the provider returns tags; first match wins.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("restaurant", "Restaurant"),
    ("cafe", "Cafe"),
    ("bar", "Bar"),
    ("bakery", "Bakery"),
    ("clothing_store", "Clothing Store"),
    ("jewelry_store", "Jewelry Store"),
    ("home_goods_store", "Home Goods"),
    ("furniture_store", "Furniture Store"),
    ("beauty_salon", "Beauty Salon"),
    ("hair_care", "Hair Salon"),
    ("spa", "Spa"),
    ("gym", "Gym"),
    ("store", "Retail Store"),
];

/// Store-type code → richer text-search phrase.
const STORE_TYPE_PHRASES: &[(&str, &str)] = &[
    ("boutique", "clothing boutique"),
    ("gifts", "gift shop"),
    ("specialty", "specialty food store"),
    ("crafts", "craft store arts crafts"),
    ("jewelry", "jewelry store"),
    ("home", "home goods furniture store"),
];

/// Store-type code → recommended e-commerce platform.
const PLATFORMS: &[(&str, &str)] = &[
    ("boutique", "Shopify"),
    ("gifts", "Squarespace"),
    ("specialty", "WooCommerce"),
    ("crafts", "Etsy + Shopify"),
    ("jewelry", "Shopify"),
    ("home", "BigCommerce"),
];

/// Resolve the primary category label for a place's type tags.
///
/// Tags are scanned in their given order; the first one present in the label
/// table wins. Unmatched tag lists fall back to `"Business"`.
#[must_use]
pub fn primary_category(types: &[String]) -> &'static str {
    for tag in types {
        for &(known, label) in CATEGORY_LABELS {
            if tag == known {
                return label;
            }
        }
    }
    "Business"
}

/// Expand a store-type code into the phrase used for text search.
///
/// Unknown codes pass through unchanged so callers can search for arbitrary
/// store descriptions.
#[must_use]
pub fn search_phrase(store_type: &str) -> &str {
    STORE_TYPE_PHRASES
        .iter()
        .find(|&&(code, _)| code == store_type)
        .map_or(store_type, |&(_, phrase)| phrase)
}

/// Suggest an e-commerce platform for a store type. Unknown codes default
/// to Shopify.
#[must_use]
pub fn suggest_platform(store_type: &str) -> &'static str {
    PLATFORMS
        .iter()
        .find(|&&(code, _)| code == store_type)
        .map_or("Shopify", |&(_, platform)| platform)
}
