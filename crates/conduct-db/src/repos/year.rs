//! Year level repository.

use conduct_core::entities::YearLevel;
use conduct_core::ids::{PREFIX_YEAR, new_id};

use crate::error::StoreError;
use crate::registry::Registry;
use crate::store::RecordStore;

impl<S: RecordStore> Registry<S> {
    pub async fn create_year(&self, name: &str) -> Result<YearLevel, StoreError> {
        let year = YearLevel {
            id: new_id(PREFIX_YEAR)?,
            name: name.to_string(),
        };
        self.save(&year).await?;
        tracing::info!(id = %year.id, name, "created year level");
        Ok(year)
    }

    pub async fn list_years(&self) -> Result<Vec<YearLevel>, StoreError> {
        self.list_all().await
    }

    pub async fn get_year(&self, id: &str) -> Result<Option<YearLevel>, StoreError> {
        self.find(id).await
    }

    /// Returns `None` without writing anything if the year does not exist.
    pub async fn rename_year(&self, id: &str, name: &str) -> Result<Option<YearLevel>, StoreError> {
        let Some(mut year) = self.get_year(id).await? else {
            return Ok(None);
        };
        year.name = name.to_string();
        self.save(&year).await?;
        Ok(Some(year))
    }

    pub async fn delete_year(&self, id: &str) -> Result<(), StoreError> {
        self.remove::<YearLevel>(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::{memory_registry, sql_registry};

    #[tokio::test]
    async fn create_and_rename_year() {
        let reg = memory_registry();
        let year = reg.create_year("Jahrgang 5").await.unwrap();
        assert!(year.id.starts_with("yr-"));

        let renamed = reg.rename_year(&year.id, "Jahrgang 6").await.unwrap().unwrap();
        assert_eq!(renamed.name, "Jahrgang 6");
        assert_eq!(reg.get_year(&year.id).await.unwrap().unwrap().name, "Jahrgang 6");
        assert_eq!(reg.list_years().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rename_missing_year_writes_nothing() {
        let reg = memory_registry();
        assert!(reg.rename_year("yr-missing", "X").await.unwrap().is_none());
        assert!(reg.list_years().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_year_leaves_classes_in_place() {
        let reg = memory_registry();
        let year = reg.create_year("Jahrgang 7").await.unwrap();
        reg.create_class(&year.id, "7a").await.unwrap();

        reg.delete_year(&year.id).await.unwrap();
        assert!(reg.get_year(&year.id).await.unwrap().is_none());
        assert_eq!(reg.list_classes().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn year_crud_over_sql() {
        let reg = sql_registry().await;
        let year = reg.create_year("Jahrgang 9").await.unwrap();
        assert_eq!(reg.get_year(&year.id).await.unwrap(), Some(year.clone()));

        reg.delete_year(&year.id).await.unwrap();
        reg.delete_year(&year.id).await.unwrap();
        assert!(reg.list_years().await.unwrap().is_empty());
    }
}
