//! School class repository.

use conduct_core::entities::SchoolClass;
use conduct_core::ids::{PREFIX_CLASS, new_id};

use crate::error::StoreError;
use crate::registry::Registry;
use crate::store::RecordStore;

impl<S: RecordStore> Registry<S> {
    pub async fn create_class(&self, year_id: &str, name: &str) -> Result<SchoolClass, StoreError> {
        let class = SchoolClass {
            id: new_id(PREFIX_CLASS)?,
            year_level_id: year_id.to_string(),
            name: name.to_string(),
        };
        self.save(&class).await?;
        tracing::info!(id = %class.id, year_id, name, "created class");
        Ok(class)
    }

    pub async fn list_classes(&self) -> Result<Vec<SchoolClass>, StoreError> {
        self.list_all().await
    }

    pub async fn classes_for_year(&self, year_id: &str) -> Result<Vec<SchoolClass>, StoreError> {
        let mut classes = self.list_classes().await?;
        classes.retain(|c| c.year_level_id == year_id);
        Ok(classes)
    }

    pub async fn get_class(&self, id: &str) -> Result<Option<SchoolClass>, StoreError> {
        self.find(id).await
    }

    /// Returns `None` without writing anything if the class does not exist.
    pub async fn rename_class(&self, id: &str, name: &str) -> Result<Option<SchoolClass>, StoreError> {
        let Some(mut class) = self.get_class(id).await? else {
            return Ok(None);
        };
        class.name = name.to_string();
        self.save(&class).await?;
        Ok(Some(class))
    }

    pub async fn delete_class(&self, id: &str) -> Result<(), StoreError> {
        self.remove::<SchoolClass>(id).await
    }
}

#[cfg(test)]
mod tests {
    use conduct_core::enums::Kind;

    use crate::test_support::helpers::memory_registry;

    #[tokio::test]
    async fn classes_are_scoped_to_their_year() {
        let reg = memory_registry();
        let five = reg.create_year("Jahrgang 5").await.unwrap();
        let six = reg.create_year("Jahrgang 6").await.unwrap();
        reg.create_class(&five.id, "5a").await.unwrap();
        reg.create_class(&five.id, "5b").await.unwrap();
        reg.create_class(&six.id, "6a").await.unwrap();

        let mut names: Vec<String> = reg
            .classes_for_year(&five.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["5a", "5b"]);
        assert_eq!(reg.dependents(Kind::Years, &five.id).await.unwrap(), 2);
        assert_eq!(reg.dependents(Kind::Years, &six.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rename_keeps_year_link() {
        let reg = memory_registry();
        let year = reg.create_year("Jahrgang 8").await.unwrap();
        let class = reg.create_class(&year.id, "8a").await.unwrap();

        let renamed = reg.rename_class(&class.id, "8d").await.unwrap().unwrap();
        assert_eq!(renamed.name, "8d");
        assert_eq!(renamed.year_level_id, year.id);
    }
}
