use diesel::prelude::*;

use crate::{
    domain::researcher::{
        NewResearcher as DomainNewResearcher, Researcher as DomainResearcher,
        ResearcherListQuery, UpdateResearcher as DomainUpdateResearcher,
    },
    models::researcher::{
        NewResearcher as DbNewResearcher, Researcher as DbResearcher,
        UpdateResearcher as DbUpdateResearcher,
    },
    repository::{
        DieselRepository, ResearcherReader, ResearcherWriter,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
};

impl ResearcherReader for DieselRepository {
    fn get_researcher_by_id(&self, id: i32) -> RepositoryResult<Option<DomainResearcher>> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;
        let researcher = researchers::table
            .filter(researchers::id.eq(id))
            .first::<DbResearcher>(&mut conn)
            .optional()?;

        Ok(researcher.map(Into::into))
    }

    fn list_researchers(
        &self,
        query: ResearcherListQuery,
    ) -> RepositoryResult<Vec<DomainResearcher>> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;

        let mut items = researchers::table.into_boxed::<diesel::sqlite::Sqlite>();

        if query.reviewers_only {
            items = items.filter(researchers::is_reviewer.eq(true));
        }

        if !query.thematic_line_ids.is_empty() {
            items = items.filter(researchers::thematic_line_id.eq_any(query.thematic_line_ids));
        }

        if !query.language_ids.is_empty() {
            items = items.filter(researchers::language_id.eq_any(query.language_ids));
        }

        if !query.countries.is_empty() {
            items = items.filter(researchers::country.eq_any(query.countries));
        }

        let terms = query
            .search
            .into_iter()
            .chain(query.terms)
            .filter(|term| !term.trim().is_empty());

        for term in terms {
            let pattern = like_pattern(&term);
            items = items.filter(
                researchers::first_name
                    .like(pattern.clone())
                    .or(researchers::last_name.like(pattern.clone()))
                    .or(researchers::email.like(pattern.clone()))
                    .or(researchers::affiliation.like(pattern)),
            );
        }

        let rows = items
            .order((researchers::last_name.asc(), researchers::first_name.asc()))
            .load::<DbResearcher>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_countries(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;
        let countries = researchers::table
            .select(researchers::country)
            .filter(researchers::country.is_not_null())
            .distinct()
            .order(researchers::country.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(countries
            .into_iter()
            .flatten()
            .filter(|country| !country.trim().is_empty())
            .collect())
    }
}

impl ResearcherWriter for DieselRepository {
    fn create_researcher(
        &self,
        new_researcher: &DomainNewResearcher,
    ) -> RepositoryResult<DomainResearcher> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;
        let db_new = DbNewResearcher::from(new_researcher);

        let created = diesel::insert_into(researchers::table)
            .values(&db_new)
            .get_result::<DbResearcher>(&mut conn)?;

        Ok(created.into())
    }

    fn create_researchers(&self, new_researchers: &[DomainNewResearcher]) -> RepositoryResult<usize> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;

        conn.transaction::<usize, RepositoryError, _>(|conn| {
            let mut count_inserted: usize = 0;

            for new in new_researchers {
                let db_new = DbNewResearcher::from(new);

                diesel::insert_into(researchers::table)
                    .values(&db_new)
                    .execute(conn)?;
                count_inserted += 1;
            }

            Ok(count_inserted)
        })
    }

    fn update_researcher(
        &self,
        researcher_id: i32,
        updates: &DomainUpdateResearcher,
    ) -> RepositoryResult<DomainResearcher> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateResearcher::from(updates);

        let updated = diesel::update(researchers::table.filter(researchers::id.eq(researcher_id)))
            .set(&db_updates)
            .get_result::<DbResearcher>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_researcher(&self, researcher_id: i32) -> RepositoryResult<()> {
        use crate::schema::researchers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(researchers::table.filter(researchers::id.eq(researcher_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
