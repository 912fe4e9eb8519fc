//! Student repository.

use conduct_core::entities::Student;
use conduct_core::ids::{PREFIX_STUDENT, new_id};

use crate::error::StoreError;
use crate::registry::Registry;
use crate::store::RecordStore;

impl<S: RecordStore> Registry<S> {
    pub async fn create_student(
        &self,
        class_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Student, StoreError> {
        let student = Student {
            id: new_id(PREFIX_STUDENT)?,
            class_id: class_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        self.save(&student).await?;
        tracing::info!(id = %student.id, class_id, "created student");
        Ok(student)
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        self.list_all().await
    }

    pub async fn students_for_class(&self, class_id: &str) -> Result<Vec<Student>, StoreError> {
        let mut students = self.list_students().await?;
        students.retain(|s| s.class_id == class_id);
        Ok(students)
    }

    pub async fn get_student(&self, id: &str) -> Result<Option<Student>, StoreError> {
        self.find(id).await
    }

    /// Fetch the student and resubmit it with new names.
    ///
    /// Returns `None` without writing anything if the student does not exist.
    pub async fn rename_student(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Student>, StoreError> {
        let Some(mut student) = self.get_student(id).await? else {
            return Ok(None);
        };
        student.first_name = first_name.to_string();
        student.last_name = last_name.to_string();
        self.save(&student).await?;
        Ok(Some(student))
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), StoreError> {
        self.remove::<Student>(id).await
    }
}
