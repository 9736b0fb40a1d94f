use std::sync::Mutex;

use serde_json::json;

use super::*;
use crate::types::ProductPage;

/// In-memory source: serves `pages[n - 1]` for page `n` and reports
/// `total_pages` on every response. Records every request.
struct FakeSource {
    pages: Vec<Vec<Product>>,
    total_pages: u32,
    fail_on: Option<u32>,
    calls: Mutex<Vec<(u32, u32)>>,
}

impl FakeSource {
    fn new(pages: Vec<Vec<Product>>, total_pages: u32) -> Self {
        Self {
            pages,
            total_pages,
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(u32, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProductSource for FakeSource {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<ProductPage, StoreError> {
        self.calls.lock().unwrap().push((page, per_page));
        if self.fail_on == Some(page) {
            return Err(StoreError::UnexpectedStatus {
                status: 502,
                url: format!("https://shop.example.nl/page/{page}"),
            });
        }
        let products = self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(ProductPage {
            products,
            total_pages: self.total_pages,
        })
    }
}

fn product(value: serde_json::Value) -> Product {
    serde_json::from_value(value).expect("valid product fixture")
}

fn wine(name: &str, price: &str) -> Product {
    product(json!({
        "id": 1,
        "name": name,
        "regular_price": price,
        "stock_quantity": 6,
        "permalink": format!("https://shop.example.nl/{name}"),
        "catalog_visibility": "visible",
        "status": "publish",
        "attributes": [],
        "meta_data": []
    }))
}

fn chateau_test(meta_data: &serde_json::Value) -> Product {
    product(json!({
        "name": "Chateau-Test",
        "attributes": [
            {"id": 1, "options": ["Chateau"]},
            {"id": 6, "options": ["2019"]}
        ],
        "regular_price": "12.50",
        "stock_quantity": null,
        "permalink": "https://shop.example.nl/chateau-test",
        "catalog_visibility": "visible",
        "status": "publish",
        "meta_data": meta_data
    }))
}

#[tokio::test]
async fn builds_row_for_included_product() {
    let source = FakeSource::new(vec![vec![chateau_test(&json!([]))]], 1);
    let run = FeedPipeline::new(&source).run().await.unwrap();

    assert_eq!(run.rows.len(), 1);
    let row = &run.rows[0];
    assert_eq!(row.product_name.as_deref(), Some("Chateau Test 2019"));
    assert_eq!(row.price, "12.50");
    assert_eq!(row.inventory_count, 200);
    assert_eq!(row.link, "https://shop.example.nl/chateau-test");
}

#[tokio::test]
async fn opted_out_product_is_omitted() {
    let source = FakeSource::new(
        vec![vec![chateau_test(
            &json!([{"key": "_exclude_vivino", "value": "yes"}]),
        )]],
        1,
    );
    let run = FeedPipeline::new(&source).run().await.unwrap();
    assert!(run.rows.is_empty());
    assert_eq!(run.products_seen, 1);
    assert_eq!(run.products_skipped, 1);
}

#[tokio::test]
async fn product_without_vintage_gets_nv_suffix() {
    let source = FakeSource::new(vec![vec![wine("Rioja Crianza", "9.95")]], 1);
    let run = FeedPipeline::new(&source).run().await.unwrap();
    assert_eq!(run.rows[0].product_name.as_deref(), Some("Rioja Crianza NV"));
    assert_eq!(run.rows[0].inventory_count, 6);
}

#[tokio::test]
async fn fetches_every_reported_page_in_order() {
    let source = FakeSource::new(
        vec![
            vec![wine("A", "5.00"), wine("Wijnglas set", "5.00")],
            vec![wine("B", "20.00"), wine("C", "6.00")],
            vec![wine("D", "7.00")],
        ],
        3,
    );
    let run = FeedPipeline::new(&source).run().await.unwrap();

    assert_eq!(source.calls(), vec![(1, 10), (2, 10), (3, 10)]);
    assert_eq!(run.pages_fetched, 3);
    assert_eq!(run.products_seen, 5);
    assert_eq!(run.products_skipped, 2);
    let names: Vec<_> = run
        .rows
        .iter()
        .map(|r| r.product_name.as_deref().unwrap())
        .collect();
    assert_eq!(names, vec!["A NV", "C NV", "D NV"]);
}

#[tokio::test]
async fn only_first_page_count_is_used() {
    // Later pages report a different count; the pipeline must ignore it.
    struct ShrinkingSource(Mutex<u32>);
    impl ProductSource for ShrinkingSource {
        async fn fetch_page(&self, page: u32, _per_page: u32) -> Result<ProductPage, StoreError> {
            *self.0.lock().unwrap() += 1;
            Ok(ProductPage {
                products: vec![],
                total_pages: if page == 1 { 2 } else { 9 },
            })
        }
    }

    let source = ShrinkingSource(Mutex::new(0));
    let run = FeedPipeline::new(&source).run().await.unwrap();
    assert_eq!(run.pages_fetched, 2);
    assert_eq!(*source.0.lock().unwrap(), 2);
}

#[tokio::test]
async fn zero_page_count_still_processes_first_page() {
    let source = FakeSource::new(vec![vec![wine("A", "5.00")]], 0);
    let run = FeedPipeline::new(&source).run().await.unwrap();
    assert_eq!(source.calls(), vec![(1, 10)]);
    assert_eq!(run.rows.len(), 1);
}

#[tokio::test]
async fn page_failure_aborts_the_run() {
    let mut source = FakeSource::new(
        vec![vec![wine("A", "5.00")], vec![wine("B", "5.00")], vec![]],
        3,
    );
    source.fail_on = Some(2);
    let result = FeedPipeline::new(&source).run().await;

    assert!(
        matches!(result, Err(StoreError::UnexpectedStatus { status: 502, .. })),
        "expected UnexpectedStatus, got: {result:?}"
    );
    assert_eq!(source.calls(), vec![(1, 10), (2, 10)]);
}

#[tokio::test]
async fn large_page_count_is_followed_to_the_last_page() {
    let source = FakeSource::new(vec![vec![wine("A", "5.00")]], 1_001);
    let run = FeedPipeline::new(&source).run().await.expect("run");

    let calls = source.calls();
    assert_eq!(calls.len(), 1_001);
    assert_eq!(calls.last(), Some(&(1_001, 10)));
    assert_eq!(run.pages_fetched, 1_001);
    assert_eq!(run.rows.len(), 1);
}

#[tokio::test]
async fn normalization_failure_emits_row_without_name() {
    let broken = product(json!({
        "name": "Mystery Wine",
        "regular_price": "8.00",
        "permalink": "https://shop.example.nl/mystery",
        "catalog_visibility": "visible",
        "status": "publish",
        "attributes": [{"id": 6, "options": []}]
    }));
    let source = FakeSource::new(vec![vec![broken, wine("Next", "8.00")]], 1);
    let run = FeedPipeline::new(&source).run().await.unwrap();

    assert_eq!(run.rows.len(), 2);
    assert!(run.rows[0].product_name.is_none());
    assert_eq!(run.rows[0].price, "8.00");
    assert_eq!(run.rows[1].product_name.as_deref(), Some("Next NV"));
    assert_eq!(run.unnamed, 1);
}

#[test]
fn build_row_uses_pricing_override() {
    let mut product = wine("Rioja", "12.50");
    product.meta_data = serde_json::from_value(json!([
        {"key": "_vivino_pricing", "value": "10.00"}
    ]))
    .unwrap();
    let row = build_row(&product, &AttributeRoles::default());
    assert_eq!(row.price, "10.00");
}
