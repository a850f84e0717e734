use crate::client::GenericClient;
use crate::entity::{BrandEntity, Entity};
use crate::model::Brand;
use crate::result::{ExecResult, QueryResult};

/// Brand operations.
pub struct BrandHandler<'a, C> {
    client: &'a C,
}

impl<'a, C: GenericClient> BrandHandler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// All brands.
    pub async fn list(&self) -> QueryResult<Brand> {
        let mut entity = BrandEntity::new();
        entity.select(self.client).await.into()
    }

    /// The brand with `id`, if any (at most one record).
    pub async fn get(&self, id: i32) -> QueryResult<Brand> {
        let mut entity = BrandEntity::new();
        entity.filters().id(id);
        QueryResult::from(entity.select(self.client).await).first_only()
    }

    pub async fn create(&self, brand: &Brand) -> ExecResult {
        let mut entity = BrandEntity::new();
        entity
            .values()
            .id(brand.id)
            .code(brand.code.as_str())
            .name(brand.name.as_str());
        entity.insert(self.client).await.into()
    }

    /// Overwrite code and name of the brand with `brand.id`.
    pub async fn update(&self, brand: &Brand) -> ExecResult {
        let mut entity = BrandEntity::new();
        entity
            .values()
            .code(brand.code.as_str())
            .name(brand.name.as_str());
        entity.filters().id(brand.id);
        entity.update(self.client).await.into()
    }
}
