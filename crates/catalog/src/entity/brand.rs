use super::Entity;
use crate::model::Brand;
use crate::qb::QueryBuilder;

entity! {
    /// Schema object for the `TB_BRAND` table.
    pub struct BrandEntity {
        table: BRAND = "TB_BRAND",
        primary_key: "BRN_ID",
        filters: BrandFilters,
        values: BrandValues,
        columns: {
            id => "BRN_ID": i32,
            code => "BRN_CODE": String,
            name => "BRN_NAME": String,
        }
    }
}

impl Entity for BrandEntity {
    type Model = Brand;

    fn query(&self) -> &QueryBuilder {
        &self.query
    }

    fn query_mut(&mut self) -> &mut QueryBuilder {
        &mut self.query
    }
}
