use diesel::prelude::*;

use crate::{
    domain::language::{Language as DomainLanguage, NewLanguage as DomainNewLanguage},
    models::language::{Language as DbLanguage, NewLanguage as DbNewLanguage},
    repository::{
        DieselRepository, LanguageReader, LanguageWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl LanguageReader for DieselRepository {
    fn list_languages(&self) -> RepositoryResult<Vec<DomainLanguage>> {
        use crate::schema::languages;

        let mut conn = self.conn()?;
        let items = languages::table
            .order(languages::name.asc())
            .load::<DbLanguage>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl LanguageWriter for DieselRepository {
    fn create_language(&self, new_language: &DomainNewLanguage) -> RepositoryResult<DomainLanguage> {
        use crate::schema::languages;

        let mut conn = self.conn()?;
        let db_new = DbNewLanguage::from(new_language);

        let created = diesel::insert_into(languages::table)
            .values(&db_new)
            .get_result::<DbLanguage>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_language(&self, language_id: i32) -> RepositoryResult<()> {
        use crate::schema::languages;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(languages::table.filter(languages::id.eq(language_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
