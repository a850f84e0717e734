use super::{BRAND, DEPARTMENT, Entity};
use crate::error::CatalogResult;
use crate::model::Product;
use crate::qb::{QueryBuilder, Relation};
use crate::row::{FromRow, optional_at};
use rust_decimal::Decimal;
use tokio_postgres::Row;

entity! {
    /// Schema object for the `TB_PRODUCT` table.
    ///
    /// Products reference their brand (`BRN_ID`) and department (`DPR_ID`),
    /// so related tables are normally bound with
    /// [`Entity::bind_referenced`].
    pub struct ProductEntity {
        table: PRODUCT = "TB_PRODUCT",
        primary_key: "PRD_ID",
        filters: ProductFilters,
        values: ProductValues,
        columns: {
            id => "PRD_ID": i32,
            code => "PRD_CODE": String,
            name => "PRD_NAME": String,
            price => "PRD_PRICE": Decimal,
            stock => "PRD_STOCK": i32,
            brand_id => "BRN_ID": i32,
            department_id => "DPR_ID": i32,
        }
    }
}

impl Entity for ProductEntity {
    type Model = Product;

    fn query(&self) -> &QueryBuilder {
        &self.query
    }

    fn query_mut(&mut self) -> &mut QueryBuilder {
        &mut self.query
    }

    /// Fill `brand` / `department` from the joined column blocks; other bound
    /// tables are skipped over.
    fn map_row(row: &Row, relations: &[Relation]) -> CatalogResult<Product> {
        let mut product = Product::from_row(row)?;

        let mut offset = PRODUCT.width();
        for relation in relations {
            let target = relation.target();
            if target == &BRAND {
                product.brand = optional_at(row, offset)?;
            } else if target == &DEPARTMENT {
                product.department = optional_at(row, offset)?;
            }
            offset += target.width();
        }

        Ok(product)
    }
}
