use super::*;
use crate::model::{Brand, Department, Product};
use crate::result::Status;
use crate::test_support::RecordingClient;
use rust_decimal::Decimal;

fn shoes() -> Product {
    Product {
        id: 5,
        code: "SHO-01".to_string(),
        name: "Shoes".to_string(),
        price: Decimal::new(1999, 2),
        stock: 12,
        brand_id: 1,
        department_id: 2,
        brand: None,
        department: None,
    }
}

// ==================== Brand ====================

#[tokio::test]
async fn brand_list_selects_every_column() {
    let client = RecordingClient::new();
    let result = BrandHandler::new(&client).list().await;

    assert!(result.is_success());
    assert!(result.data.is_empty());
    assert_eq!(
        client.statements(),
        vec![
            "SELECT BRN_ID, BRN_CODE, BRN_NAME FROM TB_BRAND".to_string()
        ]
    );
}

#[tokio::test]
async fn brand_get_filters_on_primary_key() {
    let client = RecordingClient::new();
    let result = BrandHandler::new(&client).get(7).await;

    assert!(result.is_success());
    assert_eq!(
        client.statements(),
        vec![
            "SELECT BRN_ID, BRN_CODE, BRN_NAME FROM TB_BRAND WHERE BRN_ID=7".to_string()
        ]
    );
}

#[tokio::test]
async fn brand_failure_is_captured() {
    let client = RecordingClient::failing("connection reset by peer");
    let result = BrandHandler::new(&client).list().await;

    assert!(!result.is_success());
    assert!(result.data.is_empty());
    assert_eq!(result.status.message(), Some("connection reset by peer"));
}

#[tokio::test]
async fn brand_create_and_update() {
    let client = RecordingClient::affecting(1);
    let handler = BrandHandler::new(&client);
    let brand = Brand {
        id: 3,
        code: "OB".to_string(),
        name: "O'Brien".to_string(),
    };

    let created = handler.create(&brand).await;
    let updated = handler.update(&brand).await;

    assert!(created.is_success());
    assert_eq!(created.rows_affected, 1);
    assert_eq!(updated.rows_affected, 1);
    assert_eq!(
        client.statements(),
        vec![
            "INSERT INTO TB_BRAND (BRN_ID,BRN_CODE,BRN_NAME) VALUES (3,'OB','O''Brien')"
                .to_string(),
            "UPDATE TB_BRAND SET BRN_CODE='OB',BRN_NAME='O''Brien' WHERE BRN_ID=3".to_string(),
        ]
    );
}

// ==================== Department ====================

#[tokio::test]
async fn department_operations_render_expected_sql() {
    let client = RecordingClient::new();
    let handler = DepartmentHandler::new(&client);
    let department = Department {
        id: 2,
        name: "Footwear".to_string(),
    };

    handler.list().await;
    handler.get(2).await;
    handler.create(&department).await;
    handler.update(&department).await;

    assert_eq!(
        client.statements(),
        vec![
            "SELECT DPR_ID, DPR_NAME FROM TB_DEPARTMENT".to_string(),
            "SELECT DPR_ID, DPR_NAME FROM TB_DEPARTMENT WHERE DPR_ID=2".to_string(),
            "INSERT INTO TB_DEPARTMENT (DPR_ID,DPR_NAME) VALUES (2,'Footwear')".to_string(),
            "UPDATE TB_DEPARTMENT SET DPR_NAME='Footwear' WHERE DPR_ID=2".to_string(),
        ]
    );
}

#[tokio::test]
async fn department_exec_failure_reports_zero_rows() {
    let client = RecordingClient::failing("duplicate key value");
    let result = DepartmentHandler::new(&client)
        .create(&Department {
            id: 1,
            name: "Toys".to_string(),
        })
        .await;

    assert!(!result.is_success());
    assert_eq!(result.rows_affected, 0);
    assert_eq!(
        result.status,
        Status::Failed {
            message: "duplicate key value".to_string()
        }
    );
}

// ==================== Product ====================

#[tokio::test]
async fn product_get_uses_plain_select() {
    let client = RecordingClient::new();
    ProductHandler::new(&client).get(5).await;

    assert_eq!(
        client.statements(),
        vec![
            "SELECT PRD_ID, PRD_CODE, PRD_NAME, PRD_PRICE, PRD_STOCK, BRN_ID, DPR_ID \
             FROM TB_PRODUCT WHERE PRD_ID=5"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn product_list_detailed_joins_brand_and_department() {
    let client = RecordingClient::new();
    let result = ProductHandler::new(&client).list_detailed().await;
    assert!(result.is_success());

    let statements = client.statements();
    assert_eq!(statements.len(), 1);
    let sql = &statements[0];
    assert!(sql.starts_with("SELECT TB_PRODUCT.PRD_ID, "));
    assert!(sql.contains(
        "TB_PRODUCT.DPR_ID, TB_BRAND.BRN_ID, TB_BRAND.BRN_CODE, TB_BRAND.BRN_NAME, \
         TB_DEPARTMENT.DPR_ID, TB_DEPARTMENT.DPR_NAME FROM TB_PRODUCT"
    ));
    assert!(sql.ends_with(
        "JOIN TB_BRAND ON TB_PRODUCT.BRN_ID = TB_BRAND.BRN_ID \
         LEFT JOIN TB_DEPARTMENT ON TB_PRODUCT.DPR_ID = TB_DEPARTMENT.DPR_ID"
    ));
    assert!(!sql.contains("WHERE"));
}

#[tokio::test]
async fn product_filters_by_foreign_keys() {
    let client = RecordingClient::new();
    let handler = ProductHandler::new(&client);

    handler.by_brand(1).await;
    handler.by_department(2).await;

    let statements = client.statements();
    assert!(statements[0].ends_with("FROM TB_PRODUCT WHERE BRN_ID=1"));
    assert!(statements[1].ends_with("FROM TB_PRODUCT WHERE DPR_ID=2"));
}

#[tokio::test]
async fn product_create_lists_every_column() {
    let client = RecordingClient::affecting(1);
    let result = ProductHandler::new(&client).create(&shoes()).await;

    assert_eq!(result.rows_affected, 1);
    assert_eq!(
        client.statements(),
        vec![
            "INSERT INTO TB_PRODUCT (PRD_ID,PRD_CODE,PRD_NAME,PRD_PRICE,PRD_STOCK,BRN_ID,DPR_ID) \
             VALUES (5,'SHO-01','Shoes',19.99,12,1,2)"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn product_update_keeps_key_in_where() {
    let client = RecordingClient::affecting(0);
    let result = ProductHandler::new(&client).update(&shoes()).await;

    assert!(result.is_success());
    assert_eq!(result.rows_affected, 0);
    assert_eq!(
        client.statements(),
        vec![
            "UPDATE TB_PRODUCT SET PRD_CODE='SHO-01',PRD_NAME='Shoes',PRD_PRICE=19.99,\
             PRD_STOCK=12,BRN_ID=1,DPR_ID=2 WHERE PRD_ID=5"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn handler_can_be_reused_after_failure() {
    let client = RecordingClient::failing("timeout");
    let handler = ProductHandler::new(&client);

    let first = handler.get(1).await;
    let second = handler.get(2).await;

    assert!(!first.is_success());
    assert!(!second.is_success());
    let statements = client.statements();
    assert!(statements[1].ends_with("WHERE PRD_ID=2"));
    assert!(!statements[1].contains("PRD_ID=1"));
}
