mod common;

use serde_json::Value;

#[tokio::test]
async fn test_list_categories() {
    let server = common::test_server();

    let response = server.get("/api/categories").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["default"], "lab-water-purification-system");

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["slug"], "lab-water-purification-system");
    assert_eq!(categories[3]["slug"], "electrolyzers");
    assert_eq!(categories[3]["title"], "Electrolyzers");
    assert_eq!(categories[3]["product_count"], 3);
}

#[tokio::test]
async fn test_resolve_known_category() {
    let server = common::test_server();

    let json = server
        .get("/api/categories/resolve")
        .add_query_param("product", "raman-spectroscopy")
        .await
        .json::<Value>();

    assert_eq!(json["slug"], "raman-spectroscopy");
    assert_eq!(json["title"], "Raman Spectroscopy");
    assert_eq!(json["fallback"], false);
}

#[tokio::test]
async fn test_resolve_unknown_and_absent_fall_back() {
    let server = common::test_server();

    let json = server
        .get("/api/categories/resolve")
        .add_query_param("product", "nonexistent-category")
        .await
        .json::<Value>();
    assert_eq!(json["requested"], "nonexistent-category");
    assert_eq!(json["slug"], "lab-water-purification-system");
    assert_eq!(json["fallback"], true);

    let json = server.get("/api/categories/resolve").await.json::<Value>();
    assert!(json["requested"].is_null());
    assert_eq!(json["slug"], "lab-water-purification-system");
    assert_eq!(json["fallback"], true);
}

#[tokio::test]
async fn test_category_products_in_order() {
    let server = common::test_server();

    let response = server.get("/api/categories/electrolyzers").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["fallback"], false);

    let names: Vec<&str> = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Water Electrolyzers", "Hydrogen Generators", "Multi Cell Testing Hardware"]
    );

    let others = json["other_categories"].as_array().unwrap();
    assert_eq!(others.len(), 3);
    assert!(others.iter().all(|c| c["slug"] != "electrolyzers"));
}

#[tokio::test]
async fn test_unknown_category_shows_default() {
    let server = common::test_server();

    let json = server
        .get("/api/categories/fume-hoods")
        .await
        .json::<Value>();

    assert_eq!(json["slug"], "lab-water-purification-system");
    assert_eq!(json["title"], "Lab Water Purification System");
    assert_eq!(json["fallback"], true);
    assert_eq!(
        json["products"][0]["name"],
        "Online TOC Analyzer BerryPURE TOC"
    );
}

#[tokio::test]
async fn test_products_start_on_first_variant() {
    let server = common::test_server();

    let json = server
        .get("/api/categories/electrolyzer-test-stations")
        .await
        .json::<Value>();

    let station = &json["products"][0];
    assert_eq!(station["name"], "Fuel Cell Stations");

    let variants = station["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 4);
    assert_eq!(variants[0]["id"], "pts-1");
    assert_eq!(variants[0]["active"], true);
    assert!(variants[1..].iter().all(|v| v["active"] == false));
    assert!(
        station["display"]["description"]
            .as_str()
            .unwrap()
            .starts_with("The PTS-1 is a precision test station")
    );
}

#[tokio::test]
async fn test_select_variant() {
    let server = common::test_server();

    let response = server
        .get("/api/categories/electrolyzer-test-stations/products/0/variants/pts-10")
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["product"], "Fuel Cell Stations");
    assert_eq!(json["variant"]["id"], "pts-10");
    assert_eq!(json["variant"]["index"], 1);
    assert!(
        json["display"]["description"]
            .as_str()
            .unwrap()
            .starts_with("Designed for short-stack evaluation")
    );
    assert!(json["display"]["image_ref"].as_str().unwrap().ends_with("7.png"));
    assert_eq!(
        json["display"]["external_link_ref"],
        "https://lean-cat.com/fuel-cell-test-station-pts-10/"
    );
}

#[tokio::test]
async fn test_select_unknown_variant_not_found() {
    let server = common::test_server();

    let response = server
        .get("/api/categories/electrolyzer-test-stations/products/0/variants/pts-9000")
        .await;
    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Variant not found");
}

#[tokio::test]
async fn test_select_variant_on_missing_product() {
    let server = common::test_server();

    let response = server
        .get("/api/categories/electrolyzers/products/7/variants/pts-10")
        .await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Product not found"
    );
}

#[tokio::test]
async fn test_select_variant_on_product_without_variants() {
    let server = common::test_server();

    let response = server
        .get("/api/categories/electrolyzers/products/0/variants/pts-10")
        .await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["message"],
        "Variant not found"
    );
}
