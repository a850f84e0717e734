use super::Entity;
use crate::model::Department;
use crate::qb::QueryBuilder;

entity! {
    /// Schema object for the `TB_DEPARTMENT` table.
    pub struct DepartmentEntity {
        table: DEPARTMENT = "TB_DEPARTMENT",
        primary_key: "DPR_ID",
        filters: DepartmentFilters,
        values: DepartmentValues,
        columns: {
            id => "DPR_ID": i32,
            name => "DPR_NAME": String,
        }
    }
}

impl Entity for DepartmentEntity {
    type Model = Department;

    fn query(&self) -> &QueryBuilder {
        &self.query
    }

    fn query_mut(&mut self) -> &mut QueryBuilder {
        &mut self.query
    }
}
