//! Product catalog and inventory endpoints.

use crate::{
    client::ApiClient,
    error::Result,
    transport::{HttpTransport, QueryParams, Transport, TransportResponse},
};

const PRODUCTS_PATH: &str = "/api/products";
const PRODUCT_PATH: &str = "/api/products/{sku}";
const INVENTORY_PATH: &str = "/api/products/{sku}/inventory";
const BATCH_INVENTORY_PATH: &str = "/api/products/inventory/batch";

/// Catalog filters for `GET /api/products`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    /// Exact SKU.
    pub sku: Option<String>,
    /// Style code, e.g. "G500".
    pub style_code: Option<String>,
    /// Brand name, e.g. "Gildan".
    pub brand_name: Option<String>,
    /// Barcode.
    pub gtin: Option<String>,
    /// Color name.
    pub color: Option<String>,
    /// Size label.
    pub size: Option<String>,
    /// Restrict to one distributor's catalog.
    pub distributor_id: Option<String>,
    /// Only products with stock in some warehouse.
    pub in_stock_only: Option<bool>,
    /// One-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

impl ProductQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push_opt("sku", self.sku.as_deref())
            .push_opt("styleCode", self.style_code.as_deref())
            .push_opt("brandName", self.brand_name.as_deref())
            .push_opt("gtin", self.gtin.as_deref())
            .push_opt("color", self.color.as_deref())
            .push_opt("size", self.size.as_deref())
            .push_opt("distributorId", self.distributor_id.as_deref())
            .push_opt("inStockOnly", self.in_stock_only)
            .push_opt("page", self.page)
            .push_opt("pageSize", self.page_size);
        query
    }
}

/// Client for `/api/products`.
#[derive(Debug, Clone)]
pub struct ProductsClient<T = HttpTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> ProductsClient<T> {
    /// Creates the client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// `GET /api/products` with server-side defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_products(&self) -> Result<TransportResponse> {
        self.client.get(PRODUCTS_PATH, &[]).await
    }

    /// `GET /api/products` with filters.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_products_with(&self, filter: &ProductQuery) -> Result<TransportResponse> {
        self.client.get_with_query(PRODUCTS_PATH, &[], &filter.to_query()).await
    }

    /// `GET /api/products?page={page}&pageSize={page_size}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn list_products_page(&self, page: u32, page_size: u32) -> Result<TransportResponse> {
        let filter =
            ProductQuery { page: Some(page), page_size: Some(page_size), ..Default::default() };
        self.list_products_with(&filter).await
    }

    /// `GET /api/products/{sku}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_product(&self, sku: &str) -> Result<TransportResponse> {
        self.client.get(PRODUCT_PATH, &[sku]).await
    }

    /// `GET /api/products/{sku}?distributorId={distributor_id}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_product_for_distributor(
        &self,
        sku: &str,
        distributor_id: &str,
    ) -> Result<TransportResponse> {
        self.client.get_with_query(PRODUCT_PATH, &[sku], &distributor_query(distributor_id)).await
    }

    /// `GET /api/products/{sku}/inventory`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_inventory(&self, sku: &str) -> Result<TransportResponse> {
        self.client.get(INVENTORY_PATH, &[sku]).await
    }

    /// `GET /api/products/{sku}/inventory?distributorId={distributor_id}`
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_inventory_for_distributor(
        &self,
        sku: &str,
        distributor_id: &str,
    ) -> Result<TransportResponse> {
        self.client.get_with_query(INVENTORY_PATH, &[sku], &distributor_query(distributor_id)).await
    }

    /// `GET /api/products/inventory/batch?skus=a,b,c[&distributorId=..]`
    ///
    /// The SKUs are joined with commas into one `skus` value, in the order
    /// given. An empty slice still sends `skus=`.
    ///
    /// # Errors
    ///
    /// Returns error if the round trip fails.
    pub async fn get_batch_inventory<S: AsRef<str>>(
        &self,
        skus: &[S],
        distributor_id: Option<&str>,
    ) -> Result<TransportResponse> {
        let joined = skus.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        let mut query = QueryParams::new();
        query.push("skus", joined).push_opt("distributorId", distributor_id);
        self.client.get_with_query(BATCH_INVENTORY_PATH, &[], &query).await
    }
}

fn distributor_query(distributor_id: &str) -> QueryParams {
    let mut query = QueryParams::new();
    query.push("distributorId", distributor_id);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_data, transport::testing::recording_client};

    #[tokio::test]
    async fn test_product_paths() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);

        products.list_products().await.unwrap();
        products.get_product(test_data::DEFAULT_SKU).await.unwrap();
        products.get_inventory(test_data::DEFAULT_SKU).await.unwrap();
        products.get_product_for_distributor("G500-BLA-L", "img").await.unwrap();
        products.get_inventory_for_distributor("G500-BLA-L", "img").await.unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec![
            "http://localhost:5000/api/products",
            "http://localhost:5000/api/products/G500-BLA-M",
            "http://localhost:5000/api/products/G500-BLA-M/inventory",
            "http://localhost:5000/api/products/G500-BLA-L?distributorId=img",
            "http://localhost:5000/api/products/G500-BLA-L/inventory?distributorId=img",
        ]);
    }

    #[tokio::test]
    async fn test_list_products_page() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);

        products.list_products_page(3, 20).await.unwrap();

        assert_eq!(transport.last().url, "http://localhost:5000/api/products?page=3&pageSize=20");
    }

    #[tokio::test]
    async fn test_list_products_with_filters() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);
        let filter = ProductQuery {
            style_code: Some("G500".to_owned()),
            color: Some("Black".to_owned()),
            in_stock_only: Some(true),
            ..Default::default()
        };

        products.list_products_with(&filter).await.unwrap();

        assert_eq!(
            transport.last().url,
            "http://localhost:5000/api/products?styleCode=G500&color=Black&inStockOnly=true"
        );
    }

    #[tokio::test]
    async fn test_batch_inventory_joins_skus() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);

        products.get_batch_inventory(&["A", "B", "C"], None).await.unwrap();

        assert_eq!(
            transport.last().url,
            "http://localhost:5000/api/products/inventory/batch?skus=A,B,C"
        );
    }

    #[tokio::test]
    async fn test_batch_inventory_for_distributor() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);

        products.get_batch_inventory(&test_data::VALID_SKUS, Some("ss")).await.unwrap();

        assert_eq!(
            transport.last().url,
            "http://localhost:5000/api/products/inventory/batch\
             ?skus=G500-BLA-M,G500-BLA-L,G500-BLA-XL&distributorId=ss"
        );
    }

    #[tokio::test]
    async fn test_batch_inventory_empty() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);
        let skus: Vec<String> = Vec::new();

        products.get_batch_inventory(&skus, None).await.unwrap();

        assert_eq!(
            transport.last().url,
            "http://localhost:5000/api/products/inventory/batch?skus="
        );
    }

    #[tokio::test]
    async fn test_sku_with_reserved_characters() {
        let (client, transport) = recording_client();
        let products = ProductsClient::new(client);

        products.get_product("A/B C").await.unwrap();

        assert_eq!(transport.last().url, "http://localhost:5000/api/products/A%2FB%20C");
    }
}
