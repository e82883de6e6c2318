use diesel::prelude::*;

use crate::{
    domain::thematic_line::{
        NewThematicLine as DomainNewThematicLine, ThematicLine as DomainThematicLine,
        ThematicLineListQuery, UpdateThematicLine as DomainUpdateThematicLine,
    },
    models::thematic_line::{
        NewThematicLine as DbNewThematicLine, ThematicLine as DbThematicLine,
        UpdateThematicLine as DbUpdateThematicLine,
    },
    repository::{
        DieselRepository, ThematicLineReader, ThematicLineWriter,
        errors::{RepositoryError, RepositoryResult},
        like_pattern,
    },
};

impl ThematicLineReader for DieselRepository {
    fn get_thematic_line_by_id(&self, id: i32) -> RepositoryResult<Option<DomainThematicLine>> {
        use crate::schema::thematic_lines;

        let mut conn = self.conn()?;
        let line = thematic_lines::table
            .filter(thematic_lines::id.eq(id))
            .first::<DbThematicLine>(&mut conn)
            .optional()?;

        Ok(line.map(Into::into))
    }

    fn list_thematic_lines(
        &self,
        query: ThematicLineListQuery,
    ) -> RepositoryResult<Vec<DomainThematicLine>> {
        use crate::schema::thematic_lines;

        let mut conn = self.conn()?;

        let mut items = thematic_lines::table.into_boxed::<diesel::sqlite::Sqlite>();

        if query.active_only {
            items = items.filter(thematic_lines::is_active.eq(true));
        }

        if let Some(term) = query.search.as_ref() {
            items = items.filter(thematic_lines::name.like(like_pattern(term)));
        }

        let lines = items
            .order(thematic_lines::name.asc())
            .load::<DbThematicLine>(&mut conn)?;

        Ok(lines.into_iter().map(Into::into).collect())
    }
}

impl ThematicLineWriter for DieselRepository {
    fn create_thematic_line(
        &self,
        new_line: &DomainNewThematicLine,
    ) -> RepositoryResult<DomainThematicLine> {
        use crate::schema::thematic_lines;

        let mut conn = self.conn()?;
        let db_new = DbNewThematicLine::from(new_line);

        let created = diesel::insert_into(thematic_lines::table)
            .values(&db_new)
            .get_result::<DbThematicLine>(&mut conn)?;

        Ok(created.into())
    }

    fn update_thematic_line(
        &self,
        line_id: i32,
        updates: &DomainUpdateThematicLine,
    ) -> RepositoryResult<DomainThematicLine> {
        use crate::schema::thematic_lines;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateThematicLine::from(updates);

        let updated = diesel::update(thematic_lines::table.filter(thematic_lines::id.eq(line_id)))
            .set(&db_updates)
            .get_result::<DbThematicLine>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_thematic_line(&self, line_id: i32) -> RepositoryResult<()> {
        use crate::schema::thematic_lines;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(thematic_lines::table.filter(thematic_lines::id.eq(line_id)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
