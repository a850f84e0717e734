use crate::client::GenericClient;
use crate::entity::{DepartmentEntity, Entity};
use crate::model::Department;
use crate::result::{ExecResult, QueryResult};

/// Department operations.
pub struct DepartmentHandler<'a, C> {
    client: &'a C,
}

impl<'a, C: GenericClient> DepartmentHandler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> QueryResult<Department> {
        let mut entity = DepartmentEntity::new();
        entity.select(self.client).await.into()
    }

    pub async fn get(&self, id: i32) -> QueryResult<Department> {
        let mut entity = DepartmentEntity::new();
        entity.filters().id(id);
        QueryResult::from(entity.select(self.client).await).first_only()
    }

    pub async fn create(&self, department: &Department) -> ExecResult {
        let mut entity = DepartmentEntity::new();
        entity
            .values()
            .id(department.id)
            .name(department.name.as_str());
        entity.insert(self.client).await.into()
    }

    pub async fn update(&self, department: &Department) -> ExecResult {
        let mut entity = DepartmentEntity::new();
        entity.values().name(department.name.as_str());
        entity.filters().id(department.id);
        entity.update(self.client).await.into()
    }
}
