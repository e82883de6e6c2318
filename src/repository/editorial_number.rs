use diesel::prelude::*;

use crate::{
    domain::editorial_number::{
        EditorialNumber as DomainEditorialNumber, EditorialNumberListQuery,
        NewEditorialNumber as DomainNewEditorialNumber,
        UpdateEditorialNumber as DomainUpdateEditorialNumber,
    },
    models::editorial_number::{
        EditorialNumber as DbEditorialNumber, NewEditorialNumber as DbNewEditorialNumber,
        UpdateEditorialNumber as DbUpdateEditorialNumber,
    },
    repository::{
        DieselRepository, EditorialNumberReader, EditorialNumberWriter,
        errors::RepositoryResult, like_pattern,
    },
};

impl EditorialNumberReader for DieselRepository {
    fn get_editorial_number_by_id(
        &self,
        id: i32,
    ) -> RepositoryResult<Option<DomainEditorialNumber>> {
        use crate::schema::editorial_numbers;

        let mut conn = self.conn()?;
        let number = editorial_numbers::table
            .filter(editorial_numbers::id.eq(id))
            .first::<DbEditorialNumber>(&mut conn)
            .optional()?;

        number.map(TryInto::try_into).transpose()
    }

    fn list_editorial_numbers(
        &self,
        query: EditorialNumberListQuery,
    ) -> RepositoryResult<Vec<DomainEditorialNumber>> {
        use crate::schema::editorial_numbers;

        let mut conn = self.conn()?;

        let mut items = editorial_numbers::table.into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            items = items.filter(editorial_numbers::is_active.eq(true));
        }

        if let Some(term) = query.search.as_ref() {
            items = items.filter(editorial_numbers::title.like(like_pattern(term)));
        }

        // Storage dates are ISO strings, so text order is date order.
        let rows = items
            .order((
                editorial_numbers::start_date.desc(),
                editorial_numbers::number.desc(),
            ))
            .load::<DbEditorialNumber>(&mut conn)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

impl EditorialNumberWriter for DieselRepository {
    fn create_editorial_number(
        &self,
        new_number: &DomainNewEditorialNumber,
    ) -> RepositoryResult<DomainEditorialNumber> {
        use crate::schema::editorial_numbers;

        let mut conn = self.conn()?;
        let db_new = DbNewEditorialNumber::from(new_number);

        let created = diesel::insert_into(editorial_numbers::table)
            .values(&db_new)
            .get_result::<DbEditorialNumber>(&mut conn)?;

        created.try_into()
    }

    fn update_editorial_number(
        &self,
        number_id: i32,
        updates: &DomainUpdateEditorialNumber,
    ) -> RepositoryResult<DomainEditorialNumber> {
        use crate::schema::editorial_numbers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateEditorialNumber::from(updates);

        let updated =
            diesel::update(editorial_numbers::table.filter(editorial_numbers::id.eq(number_id)))
                .set(&db_updates)
                .get_result::<DbEditorialNumber>(&mut conn)?;

        updated.try_into()
    }
}
