// backend/src/models/mod.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Joined employee view (Employee ⟕ Salary ⟕ OfficeCountryMapping)
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct EmployeeView {
    pub employee_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,           // FirstName || ' ' || LastName, NULL if either is
    pub job_title: Option<String>,
    pub office_id: Option<String>,           // text whatever the store's key type
    pub yearly_compensation: Option<f64>,    // NULL when no Salary row
    pub country: Option<String>,             // NULL when no office mapping
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCount {
    pub total_employees: i64,
}
