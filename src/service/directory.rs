use super::HrService;
use crate::error::{HrError, Result};
use crate::model::employee::{CreateEmployee, Department, Employee};
use crate::utils::validation::validate_new_employee;
use tracing::{debug, info, instrument, warn};

impl HrService {
    #[instrument(skip(self, payload), fields(employee_id = %payload.employee_id.trim()))]
    pub async fn add_employee(&self, payload: &CreateEmployee) -> Result<Employee> {
        let new = validate_new_employee(payload)?;

        if !Department::is_known(&new.department) {
            debug!(department = %new.department, "Department outside the suggested list");
        }

        match self.store.insert_employee(new).await {
            Ok(employee) => {
                info!("Employee added");
                Ok(employee)
            }
            Err(e @ HrError::DuplicateKey(_)) => {
                warn!("Employee ID already exists");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let employees = self.store.list_employees().await?;
        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee> {
        self.store
            .get_employee(employee_id)
            .await?
            .ok_or_else(|| HrError::employee_not_found(employee_id))
    }

    /// Deletes the employee together with every attendance record it owns.
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, employee_id: &str) -> Result<()> {
        match self.store.delete_employee_cascade(employee_id).await? {
            Some(purged) => {
                info!(purged_records = purged, "Employee deleted");
                Ok(())
            }
            None => Err(HrError::employee_not_found(employee_id)),
        }
    }
}
