use crate::client::GenericClient;
use crate::entity::{BrandEntity, DepartmentEntity, Entity, ProductEntity};
use crate::model::Product;
use crate::qb::RelationMode;
use crate::result::{ExecResult, QueryResult};

/// Product operations.
pub struct ProductHandler<'a, C> {
    client: &'a C,
}

impl<'a, C: GenericClient> ProductHandler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> QueryResult<Product> {
        let mut entity = ProductEntity::new();
        entity.select(self.client).await.into()
    }

    pub async fn get(&self, id: i32) -> QueryResult<Product> {
        let mut entity = ProductEntity::new();
        entity.filters().id(id);
        QueryResult::from(entity.select(self.client).await).first_only()
    }

    /// All products with their brand (required) and department (when present).
    pub async fn list_detailed(&self) -> QueryResult<Product> {
        let mut entity = ProductEntity::new();
        entity
            .bind_referenced(&BrandEntity::new(), RelationMode::Mandatory)
            .bind_referenced(&DepartmentEntity::new(), RelationMode::Optional);
        entity.select(self.client).await.into()
    }

    pub async fn by_brand(&self, brand_id: i32) -> QueryResult<Product> {
        let mut entity = ProductEntity::new();
        entity.filters().brand_id(brand_id);
        entity.select(self.client).await.into()
    }

    pub async fn by_department(&self, department_id: i32) -> QueryResult<Product> {
        let mut entity = ProductEntity::new();
        entity.filters().department_id(department_id);
        entity.select(self.client).await.into()
    }

    pub async fn create(&self, product: &Product) -> ExecResult {
        let mut entity = ProductEntity::new();
        entity
            .values()
            .id(product.id)
            .code(product.code.as_str())
            .name(product.name.as_str())
            .price(product.price)
            .stock(product.stock)
            .brand_id(product.brand_id)
            .department_id(product.department_id);
        entity.insert(self.client).await.into()
    }

    /// Overwrite every non-key column of the product with `product.id`.
    pub async fn update(&self, product: &Product) -> ExecResult {
        let mut entity = ProductEntity::new();
        entity
            .values()
            .code(product.code.as_str())
            .name(product.name.as_str())
            .price(product.price)
            .stock(product.stock)
            .brand_id(product.brand_id)
            .department_id(product.department_id);
        entity.filters().id(product.id);
        entity.update(self.client).await.into()
    }
}
